use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("AABBCC"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("rgba(255, 255, 255, 0.05)"), None);
}

#[test]
fn parse_hex_rgb_rejects_multibyte_short_form() {
    assert_eq!(parse_hex_rgb("#€"), None);
    assert_eq!(parse_hex_rgb("#é1"), None);
    assert_eq!(darken("#€", 30), "#€");
}

#[test]
fn normalize_hex_color_uses_canonical_lowercase() {
    assert_eq!(normalize_hex_color("#ABC", "#000000"), "#aabbcc");
    assert_eq!(normalize_hex_color("#A855F7", "#000000"), "#a855f7");
}

#[test]
fn normalize_hex_color_falls_back_to_input_fallback_or_default() {
    assert_eq!(normalize_hex_color("blue", "#ff0000"), "#ff0000");
    assert_eq!(normalize_hex_color("blue", "invalid"), "#1abc9c");
}

#[test]
fn darken_subtracts_rounded_percentage_from_each_channel() {
    // 30% of 255 rounds to 77; 40% is exactly 102.
    assert_eq!(darken("#ffffff", 30), "#b2b2b2");
    assert_eq!(darken("#ffffff", 40), "#999999");
    assert_eq!(darken("#3498db", 40), "#003275");
}

#[test]
fn darken_clamps_channels_at_zero() {
    assert_eq!(darken("#102030", 40), "#000000");
    assert_eq!(darken("#000000", 30), "#000000");
}

#[test]
fn darken_zero_percent_only_canonicalizes() {
    assert_eq!(darken("#A855F7", 0), "#a855f7");
}

#[test]
fn darken_passes_through_unparseable_values() {
    assert_eq!(darken("tomato", 30), "tomato");
}
