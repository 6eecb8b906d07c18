use std::sync::LazyLock;

use regex::Regex;

use super::number::{
    parse_alpha_value, parse_hex_value, parse_hue_value, parse_rgb_value, parse_sl_value,
};
use crate::{Float, Hsl, Rgb};

// Rust's \d and \s are Unicode-aware, hence the explicit ASCII classes. The
// patterns are literals, so `expect` can only fire on a typo here, which
// test_patterns catches.
static HEX_SHORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?i)([0-9a-f])([0-9a-f])([0-9a-f])([0-9a-f])?$").expect("valid regex")
});
static HEX_LONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?i)([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})?$")
        .expect("valid regex")
});
static CSS_RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^rgba?\([ \t\n\r\f]*(-?[0-9]+%?)[ \t\n\r\f]*,",
        r"[ \t\n\r\f]*(-?[0-9]+%?)[ \t\n\r\f]*,",
        r"[ \t\n\r\f]*(-?[0-9]+%?)[ \t\n\r\f]*",
        r"(?:,[ \t\n\r\f]*(-?[0-9]*(?:\.[0-9]+)?)?)?[ \t\n\r\f]*\)$",
    ))
    .expect("valid regex")
});
static CSS_HSL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^hsla?\([ \t\n\r\f]*(-?[0-9]+)[ \t\n\r\f]*,",
        r"[ \t\n\r\f]*(-?[0-9]+)%[ \t\n\r\f]*,",
        r"[ \t\n\r\f]*(-?[0-9]+)%[ \t\n\r\f]*",
        r"(?:,[ \t\n\r\f]*(-?[0-9]*(?:\.[0-9]+)?)?)?[ \t\n\r\f]*\)$",
    ))
    .expect("valid regex")
});

/// Parse a color in hashed hexadecimal format.
///
/// This function recognizes `#` followed by 3, 4, 6, or 8 hexadecimal digits
/// in either case. With 3 or 4 digits, each digit is doubled. The fourth
/// digit or pair of digits, if present, is the alpha. For all other strings,
/// this function returns `None`.
///
/// ```
/// # use irid::{hex_to_rgb, Rgb};
/// assert_eq!(hex_to_rgb("#0088ff"), Some(Rgb::new(0, 136, 255)));
/// assert_eq!(hex_to_rgb("#08F"), Some(Rgb::new(0, 136, 255)));
/// assert_eq!(hex_to_rgb("#0088f"), None);
/// ```
pub fn hex_to_rgb(s: &str) -> Option<Rgb> {
    let caps = HEX_SHORT.captures(s).or_else(|| HEX_LONG.captures(s))?;

    Some(Rgb::with_alpha(
        parse_hex_value(&caps[1]),
        parse_hex_value(&caps[2]),
        parse_hex_value(&caps[3]),
        caps.get(4)
            .map(|a| Float::from(parse_hex_value(a.as_str())) / 255.0),
    ))
}

/// Parse a color in CSS `rgb()` or `rgba()` notation.
///
/// The function takes three comma-separated channels, which are integers or
/// integer percentages, and an optional fourth alpha term. Either function
/// name accepts either number of terms. White space around commas and
/// parentheses is ignored. For all other strings, this function returns
/// `None`.
///
/// ```
/// # use irid::{css_rgb_to_rgb, Rgb};
/// assert_eq!(css_rgb_to_rgb("rgb(0%, 50%, 100%)"), Some(Rgb::new(0, 127, 255)));
/// assert_eq!(
///     css_rgb_to_rgb("rgba( 0,136,255 , 0.7 )"),
///     Some(Rgb::with_alpha(0, 136, 255, Some(0.7)))
/// );
/// ```
pub fn css_rgb_to_rgb(s: &str) -> Option<Rgb> {
    let caps = CSS_RGB.captures(s)?;

    Some(Rgb::with_alpha(
        parse_rgb_value(&caps[1]),
        parse_rgb_value(&caps[2]),
        parse_rgb_value(&caps[3]),
        parse_alpha_value(caps.get(4).map(|a| a.as_str())),
    ))
}

/// Parse a color in CSS `hsl()` or `hsla()` notation.
///
/// The first term is a hue in integral degrees without unit, the second and
/// third terms are integer percentages for saturation and lightness, and the
/// optional fourth term is the alpha. For all other strings, this function
/// returns `None`.
///
/// ```
/// # use irid::{css_hsl_to_hsl, Hsl};
/// assert_eq!(css_hsl_to_hsl("hsl(180, 60%, 70%)"), Some(Hsl::new(0.5, 0.6, 0.7)));
/// assert_eq!(css_hsl_to_hsl("hsl(180, 60, 70)"), None);
/// ```
pub fn css_hsl_to_hsl(s: &str) -> Option<Hsl> {
    let caps = CSS_HSL.captures(s)?;

    Some(Hsl::with_alpha(
        parse_hue_value(&caps[1]),
        parse_sl_value(&caps[2]),
        parse_sl_value(&caps[3]),
        parse_alpha_value(caps.get(4).map(|a| a.as_str())),
    ))
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the alpha as a byte with two lowercase hexadecimal digits.
fn alpha_byte(alpha: Float) -> u8 {
    (alpha * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Format the RGB tuple in hashed hexadecimal notation.
///
/// The result has six lowercase hexadecimal digits, followed by two more for
/// the alpha if it is present. A present alpha of zero is formatted, too.
///
/// ```
/// # use irid::{rgb_to_hex, Rgb};
/// assert_eq!(rgb_to_hex(&Rgb::new(0, 136, 255)), "#0088ff");
/// assert_eq!(rgb_to_hex(&Rgb::with_alpha(0, 136, 255, Some(0.5))), "#0088ff7f");
/// ```
pub fn rgb_to_hex(rgb: &Rgb) -> String {
    let Rgb { r, g, b, a } = *rgb;
    match a {
        Some(a) => format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, alpha_byte(a)),
        None => format!("#{:02x}{:02x}{:02x}", r, g, b),
    }
}

/// Format the RGB tuple in CSS functional notation.
///
/// Without alpha, the result uses `rgb()`. With alpha, it uses `rgba()` and
/// formats the alpha with two decimals.
pub fn rgb_to_css_rgb(rgb: &Rgb) -> String {
    let Rgb { r, g, b, a } = *rgb;
    match a {
        Some(a) => format!("rgba({}, {}, {}, {:.2})", r, g, b, a),
        None => format!("rgb({}, {}, {})", r, g, b),
    }
}

/// Format the HSL tuple in CSS functional notation.
///
/// The hue is formatted as rounded degrees `0..360` and saturation as well as
/// lightness as rounded percentages. Without alpha, the result uses `hsl()`.
/// With alpha, it uses `hsla()` and formats the alpha with two decimals.
///
/// ```
/// # use irid::{hsl_to_css_hsl, Hsl};
/// assert_eq!(hsl_to_css_hsl(&Hsl::new(0.5, 0.6, 0.7)), "hsl(180, 60%, 70%)");
/// ```
pub fn hsl_to_css_hsl(hsl: &Hsl) -> String {
    // Adding zero turns negative zero into positive zero.
    let h = (hsl.h * 360.0).round().rem_euclid(360.0) + 0.0;
    let s = (hsl.s * 100.0).round() + 0.0;
    let l = (hsl.l * 100.0).round() + 0.0;

    match hsl.a {
        Some(a) => format!("hsla({}, {}%, {}%, {:.2})", h, s, l, a),
        None => format!("hsl({}, {}%, {}%)", h, s, l),
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_patterns() {
        for (pattern, groups) in [(&HEX_SHORT, 5), (&HEX_LONG, 5), (&CSS_RGB, 5), (&CSS_HSL, 5)] {
            assert_eq!(pattern.captures_len(), groups, "{}", pattern.as_str());
        }
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#0088ff"), Some(Rgb::new(0, 136, 255)));
        assert_eq!(hex_to_rgb("#08f"), Some(Rgb::new(0, 136, 255)));
        assert_eq!(hex_to_rgb("#0088FF"), Some(Rgb::new(0, 136, 255)));

        let rgb = hex_to_rgb("#0088ff7f").expect("8 digits");
        assert_eq!([rgb.r, rgb.g, rgb.b], [0, 136, 255]);
        assert!((rgb.a.expect("alpha") - 0.5).abs() < 0.01);

        let rgb = hex_to_rgb("#08f8").expect("4 digits");
        assert_eq!([rgb.r, rgb.g, rgb.b], [0, 136, 255]);
        assert!((rgb.a.expect("alpha") - 0.5).abs() < 0.05);

        assert_eq!(hex_to_rgb("#ab"), None);
        assert_eq!(hex_to_rgb("#yyy"), None);
        assert_eq!(hex_to_rgb("#12345"), None);
        assert_eq!(hex_to_rgb("#1234567"), None);
        assert_eq!(hex_to_rgb("0088ff"), None);
        assert_eq!(hex_to_rgb(" #0088ff"), None);
        assert_eq!(hex_to_rgb("#٠٠٠"), None);
    }

    #[test]
    fn test_css_rgb_to_rgb() {
        assert_eq!(
            css_rgb_to_rgb("rgb(0, 136, 255)"),
            Some(Rgb::new(0, 136, 255))
        );
        assert_eq!(
            css_rgb_to_rgb("rgb(0%, 50%, 100%)"),
            Some(Rgb::new(0, 127, 255))
        );
        assert_eq!(
            css_rgb_to_rgb("rgba(0, 136, 255, 0.7)"),
            Some(Rgb::with_alpha(0, 136, 255, Some(0.7)))
        );
        assert_eq!(
            css_rgb_to_rgb("rgb(0,136,255,.25)"),
            Some(Rgb::with_alpha(0, 136, 255, Some(0.25)))
        );
        assert_eq!(
            css_rgb_to_rgb("rgba(0, 136, 255)"),
            Some(Rgb::new(0, 136, 255))
        );
        assert_eq!(
            css_rgb_to_rgb("rgb( 300 , -5 , 10 )"),
            Some(Rgb::new(255, 0, 10))
        );
        assert_eq!(
            css_rgb_to_rgb("rgb(1, 2, 3, )"),
            Some(Rgb::new(1, 2, 3))
        );

        assert_eq!(css_rgb_to_rgb("rgb(0, 136)"), None);
        assert_eq!(css_rgb_to_rgb("rgb(0 136 255)"), None);
        assert_eq!(css_rgb_to_rgb("RGB(0, 136, 255)"), None);
        assert_eq!(css_rgb_to_rgb("rgb(0.5, 136, 255)"), None);
        assert_eq!(css_rgb_to_rgb("rgb(0, 136, 255"), None);
    }

    #[test]
    fn test_css_hsl_to_hsl() {
        assert_eq!(
            css_hsl_to_hsl("hsl(180, 60%, 70%)"),
            Some(Hsl::new(0.5, 0.6, 0.7))
        );
        assert_eq!(
            css_hsl_to_hsl("hsl(180, 60%, 70%, 0.8)"),
            Some(Hsl::with_alpha(0.5, 0.6, 0.7, Some(0.8)))
        );
        assert_eq!(
            css_hsl_to_hsl("hsla(-90,100%,50%)"),
            Some(Hsl::new(0.75, 1.0, 0.5))
        );
        assert_eq!(css_hsl_to_hsl("hsl(180%, 60%, 70%)"), None);
        assert_eq!(css_hsl_to_hsl("hsl(180, 60%)"), None);
        assert_eq!(css_hsl_to_hsl("rgb(180, 60%, 70%)"), None);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(&Rgb::new(0, 136, 255)), "#0088ff");
        assert_eq!(
            rgb_to_hex(&Rgb::with_alpha(0, 136, 255, Some(0.5))),
            "#0088ff7f"
        );
        assert_eq!(
            rgb_to_hex(&Rgb::with_alpha(0, 0, 0, Some(0.0))),
            "#00000000"
        );
        assert_eq!(
            rgb_to_hex(&Rgb::with_alpha(1, 2, 3, Some(1.0))),
            "#010203ff"
        );
    }

    #[test]
    fn test_rgb_to_css_rgb() {
        assert_eq!(rgb_to_css_rgb(&Rgb::new(0, 136, 255)), "rgb(0, 136, 255)");
        assert_eq!(
            rgb_to_css_rgb(&Rgb::with_alpha(0, 136, 255, Some(0.7))),
            "rgba(0, 136, 255, 0.70)"
        );
        assert_eq!(
            rgb_to_css_rgb(&Rgb::with_alpha(0, 136, 255, Some(0.0))),
            "rgba(0, 136, 255, 0.00)"
        );
    }

    #[test]
    fn test_hsl_to_css_hsl() {
        assert_eq!(
            hsl_to_css_hsl(&Hsl::new(0.5, 0.6, 0.7)),
            "hsl(180, 60%, 70%)"
        );
        assert_eq!(
            hsl_to_css_hsl(&Hsl::with_alpha(0.5, 0.6, 0.7, Some(0.8))),
            "hsla(180, 60%, 70%, 0.80)"
        );
        assert_eq!(
            hsl_to_css_hsl(&Hsl::new(0.9999, 1.0, 0.5)),
            "hsl(0, 100%, 50%)"
        );
    }
}
