use super::conversion::from_24bit;
use crate::{Float, Rgb};

/// The coefficients for computing luma from 24-bit RGB.
const LUMA: [Float; 3] = [0.3, 0.59, 0.11];

/// The coefficients for computing relative luminance from linear sRGB.
const RELATIVE_LUMINANCE: [Float; 3] = [0.2126, 0.7152, 0.0722];

/// Compute the luma, a simple approximation of perceived brightness, for the
/// given RGB tuple. The result is in unit range.
pub(crate) fn to_luma(rgb: &Rgb) -> Float {
    let [c1, c2, c3] = LUMA;
    let [r, g, b] = [Float::from(rgb.r), Float::from(rgb.g), Float::from(rgb.b)];

    (c1 * r + c2 * g + c3 * b) / 255.0
}

/// Compute the relative luminance according to
/// [WCAG](https://www.w3.org/TR/WCAG20/#relativeluminancedef) for the given
/// RGB tuple.
pub(crate) fn to_relative_luminance(rgb: &Rgb) -> Float {
    fn linearize(value: Float) -> Float {
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [c1, c2, c3] = RELATIVE_LUMINANCE;
    let [r, g, b] = from_24bit(rgb.r, rgb.g, rgb.b);

    c1 * linearize(r) + c2 * linearize(g) + c3 * linearize(b)
}

/// Compute the [WCAG contrast
/// ratio](https://www.w3.org/TR/WCAG20/#contrast-ratiodefs) between two
/// relative luminance values. The arguments are interchangeable, and the
/// result is in `1.0..=21.0`.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 >= luminance2 {
        (luminance1, luminance2)
    } else {
        (luminance2, luminance1)
    };

    (lighter + 0.05) / (darker + 0.05)
}
