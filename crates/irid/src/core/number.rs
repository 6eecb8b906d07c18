//! Parsers for the numeric fields of color formats.
//!
//! The format parsers only hand over substrings that already matched their
//! grammar. Nonetheless, these functions clamp everything into range instead of
//! rejecting it.

use crate::Float;

/// Parse a one or two digit hexadecimal channel. A single digit is doubled, so
/// that `f` becomes `ff`.
pub(crate) fn parse_hex_value(s: &str) -> u8 {
    let n = if s.len() == 1 {
        u32::from_str_radix(&s.repeat(2), 16)
    } else {
        u32::from_str_radix(s, 16)
    };

    n.map_or(0, |n| n.min(255) as u8)
}

/// Parse an RGB channel, which is an integer or an integer percentage. A
/// percentage is scaled by 2.55 and rounded. The result is clamped to
/// `0..=255`.
pub(crate) fn parse_rgb_value(s: &str) -> u8 {
    let (digits, factor) = match s.strip_suffix('%') {
        Some(digits) => (digits, 2.55),
        None => (s, 1.0),
    };

    let value = digits.parse::<Float>().map_or(0.0, |n| (n * factor).round());
    value.clamp(0.0, 255.0) as u8
}

/// Parse an optional alpha. An absent or empty substring produces an absent
/// alpha, not zero. Otherwise, the alpha is clamped to `0..=1`.
pub(crate) fn parse_alpha_value(s: Option<&str>) -> Option<Float> {
    s.filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<Float>().ok())
        .filter(|a| !a.is_nan())
        .map(|a| a.clamp(0.0, 1.0))
}

/// Parse a hue in integral degrees, which may be negative or exceed a full
/// rotation, into a fraction `0..1` of the full circle.
pub(crate) fn parse_hue_value(s: &str) -> Float {
    let degrees = s.parse::<Float>().map_or(0.0, Float::trunc);
    degrees.rem_euclid(360.0) / 360.0
}

/// Parse a saturation or lightness percentage, with the percent sign already
/// stripped, into a fraction `0..=1`.
pub(crate) fn parse_sl_value(s: &str) -> Float {
    let percent = s.parse::<Float>().map_or(0.0, Float::trunc);
    percent.clamp(0.0, 100.0) / 100.0
}

// ====================================================================================================================
