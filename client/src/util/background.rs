//! Pure `(color, pattern)` to CSS background mapping for comment bubbles.
//!
//! DESIGN
//! ======
//! The mapping is deterministic and allocation-light, so the comment list
//! recomputes it on every render instead of caching.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

use crate::state::comments::Pattern;
use crate::util::color::darken;

const LINEAR_DARKEN_PERCENT: u8 = 30;
const RADIAL_DARKEN_PERCENT: u8 = 40;

const DOTS_IMAGE: &str = "radial-gradient(circle, rgba(255,255,255,0.3) 1px, transparent 1px)";
const DOTS_SIZE: &str = "20px 20px";
const STRIPES_IMAGE: &str = "repeating-linear-gradient(45deg, transparent, transparent 10px, rgba(255,255,255,0.1) 10px, rgba(255,255,255,0.1) 20px)";
const WAVES_IMAGE: &str = "url(\"data:image/svg+xml,%3Csvg width='60' height='60' viewBox='0 0 60 60' xmlns='http://www.w3.org/2000/svg'%3E%3Cg fill='none' fill-rule='evenodd'%3E%3Cg fill='%23ffffff' fill-opacity='0.1'%3E%3Cpath d='M30 30c0-11.046-8.954-20-20-20s-20 8.954-20 20 8.954 20 20 20 20-8.954 20-20zm0 0c0 11.046 8.954 20 20 20s20-8.954 20-20-8.954-20-20-20-20 8.954-20 20z'/%3E%3C/g%3E%3C/g%3E%3C/svg%3E\")";
const GEOMETRIC_IMAGE: &str = "url(\"data:image/svg+xml,%3Csvg width='40' height='40' viewBox='0 0 40 40' xmlns='http://www.w3.org/2000/svg'%3E%3Cg fill='%23ffffff' fill-opacity='0.1'%3E%3Cpolygon points='20 0 40 20 20 40 0 20'/%3E%3C/g%3E%3C/svg%3E\")";
const MARBLE_IMAGE: &str = "url(\"data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='100' height='100' viewBox='0 0 100 100'%3E%3Cg fill-opacity='0.1'%3E%3Cpath d='M11 18c3.866 0 7-3.134 7-7s-3.134-7-7-7-7 3.134-7 7 3.134 7 7 7zm48 25c3.866 0 7-3.134 7-7s-3.134-7-7-7-7 3.134-7 7 3.134 7 7 7zm-43-7c1.657 0 3-1.343 3-3s-1.343-3-3-3-3 1.343-3 3 1.343 3 3 3zm63 31c1.657 0 3-1.343 3-3s-1.343-3-3-3-3 1.343-3 3 1.343 3 3 3z' fill='%23ffffff'/%3E%3C/g%3E%3C/svg%3E\")";
const NOISE_IMAGE: &str = "url(\"data:image/svg+xml,%3Csvg viewBox='0 0 256 256' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noiseFilter'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noiseFilter)' opacity='0.1'/%3E%3C/svg%3E\")";

/// Paint instruction for one comment background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Background {
    /// Plain fill.
    Solid { color: String },
    /// Two-stop linear gradient at `angle` (a CSS direction such as `135deg`).
    Linear { angle: &'static str, from: String, to: String },
    /// Two-stop circular radial gradient.
    Radial { from: String, to: String },
    /// Base fill with a low-opacity texture laid over it.
    Textured { color: String, image: &'static str, size: Option<&'static str> },
}

impl Background {
    /// Render as an inline `style` declaration list.
    pub fn to_css(&self) -> String {
        match self {
            Self::Solid { color } => format!("background-color: {color};"),
            Self::Linear { angle, from, to } => format!("background: linear-gradient({angle}, {from}, {to});"),
            Self::Radial { from, to } => format!("background: radial-gradient(circle, {from}, {to});"),
            Self::Textured { color, image, size } => {
                let mut css = format!("background-color: {color}; background-image: {image};");
                if let Some(size) = size {
                    css.push_str(&format!(" background-size: {size};"));
                }
                css
            }
        }
    }
}

/// Map a comment's color and pattern to its background.
pub fn background_for(color: &str, pattern: Pattern) -> Background {
    let textured = |image, size| Background::Textured { color: color.to_owned(), image, size };
    match pattern {
        Pattern::Solid => Background::Solid { color: color.to_owned() },
        Pattern::GradientDiagonal => Background::Linear {
            angle: "135deg",
            from: color.to_owned(),
            to: darken(color, LINEAR_DARKEN_PERCENT),
        },
        Pattern::GradientVertical => Background::Linear {
            angle: "to bottom",
            from: color.to_owned(),
            to: darken(color, LINEAR_DARKEN_PERCENT),
        },
        Pattern::GradientRadial => Background::Radial {
            from: color.to_owned(),
            to: darken(color, RADIAL_DARKEN_PERCENT),
        },
        Pattern::Dots => textured(DOTS_IMAGE, Some(DOTS_SIZE)),
        Pattern::Stripes => textured(STRIPES_IMAGE, None),
        Pattern::Waves => textured(WAVES_IMAGE, None),
        Pattern::Geometric => textured(GEOMETRIC_IMAGE, None),
        Pattern::Marble => textured(MARBLE_IMAGE, None),
        Pattern::Noise => textured(NOISE_IMAGE, None),
    }
}
