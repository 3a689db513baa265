//! Shared color normalization and shading helpers.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Fallback used when neither a value nor its fallback parses.
const DEFAULT_RGB: (u8, u8, u8) = (0x1a, 0xbc, 0x9c);

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex.get(0..1)?.repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex.get(1..2)?.repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex.get(2..3)?.repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
            let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
            let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Format RGB channels as canonical lowercase `#rrggbb`.
pub fn format_hex_rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Normalize a color to canonical lowercase `#rrggbb`.
pub fn normalize_hex_color(value: &str, fallback: &str) -> String {
    let fallback_rgb = parse_hex_rgb(fallback).unwrap_or(DEFAULT_RGB);
    format_hex_rgb(parse_hex_rgb(value).unwrap_or(fallback_rgb))
}

/// Darken a hex color by `percent` of the full channel range.
///
/// Each channel drops by `round(2.55 * percent)` and clamps at 0. Values
/// that do not parse as hex colors are returned unchanged so CSS still
/// receives the caller's original string.
pub fn darken(value: &str, percent: u8) -> String {
    let Some((r, g, b)) = parse_hex_rgb(value) else {
        return value.to_owned();
    };
    // round(255 * p / 100) in integer space, half rounds up.
    let shift = ((255 * u16::from(percent) + 50) / 100).min(255);
    let step = |c: u8| u8::try_from(u16::from(c).saturating_sub(shift)).unwrap_or(0);
    format_hex_rgb((step(r), step(g), step(b)))
}
