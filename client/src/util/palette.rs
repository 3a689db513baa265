//! Fixed color swatches and quick-reaction presets for the composer.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Swatches offered by the style picker and used for the random fallback.
///
/// Some hues appear twice; the grid shows them twice too, which weights the
/// random pick toward them.
pub const PALETTE: [&str; 30] = [
    "#1abc9c", "#e74c3c", "#2ecc71", "#3498db", "#f39c12", "#9b59b6", //
    "#e91e63", "#ff5722", "#795548", "#607d8b", "#ffc107", "#4caf50", //
    "#00bcd4", "#ff9800", "#673ab7", "#8bc34a", "#ffeb3b", "#03a9f4", //
    "#f44336", "#e91e63", "#9c27b0", "#673ab7", "#3f51b5", "#2196f3", //
    "#00bcd4", "#009688", "#4caf50", "#8bc34a", "#cddc39", "#ffeb3b",
];

/// A one-click reaction: sets the draft text and its color together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickReaction {
    pub label: &'static str,
    pub color: &'static str,
}

pub const QUICK_REACTIONS: &[QuickReaction] = &[
    QuickReaction { label: "👍 Awesome!", color: "#1abc9c" },
    QuickReaction { label: "🎊 Congratulations!", color: "#e74c3c" },
    QuickReaction { label: "🌟 Outstanding!", color: "#2ecc71" },
    QuickReaction { label: "🚀 Keep it up!", color: "#3498db" },
    QuickReaction { label: "🔥 On fire!", color: "#f39c12" },
    QuickReaction { label: "💪 Strong work!", color: "#9b59b6" },
    QuickReaction { label: "🎯 Perfect!", color: "#e67e22" },
    QuickReaction { label: "⚡ Amazing!", color: "#f1c40f" },
    QuickReaction { label: "🏆 Champion!", color: "#d4af37" },
    QuickReaction { label: "💎 Brilliant!", color: "#8e44ad" },
    QuickReaction { label: "🎉 Fantastic!", color: "#e91e63" },
    QuickReaction { label: "🌈 Incredible!", color: "#00bcd4" },
];

/// Uniformly pick one palette entry.
pub fn random_palette_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PALETTE[rng.random_range(0..PALETTE.len())]
}

/// Build the composer's RNG.
///
/// In the browser the seed comes from `Math.random` and the clock; elsewhere
/// a fixed seed keeps server renders deterministic.
pub fn session_rng() -> SmallRng {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = (js_sys::Math::random() * 9_007_199_254_740_991.0) as u64 ^ (js_sys::Date::now() as u64);
        SmallRng::seed_from_u64(seed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SmallRng::seed_from_u64(0x5eed)
    }
}
