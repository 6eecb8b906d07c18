use crate::{Float, Hsl, Rgb};

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [
        Float::from(r) / 255.0,
        Float::from(g) / 255.0,
        Float::from(b) / 255.0,
    ]
}

/// Wrap the hue into `0.0..1.0`.
///
/// For tiny negative hues, `rem_euclid` rounds up to exactly `1.0`, which
/// this function maps to `0.0`. Not-a-number stays not-a-number.
#[inline]
pub(crate) fn normalize_hue(h: Float) -> Float {
    let h = h.rem_euclid(1.0);
    if h >= 1.0 {
        0.0
    } else {
        h
    }
}

/// Convert the unit-range coordinate to a channel by flooring and clamping.
#[inline]
fn to_channel(value: Float) -> u8 {
    (value * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Convert an RGB tuple to HSL.
///
/// Black short-circuits to zero hue and saturation, as do grays to zero hue.
/// Otherwise, the hue is determined by which channels are the largest and
/// smallest. The alpha is passed through.
///
/// ```
/// # use irid::{rgb_to_hsl, Hsl, Rgb};
/// assert_eq!(rgb_to_hsl(&Rgb::new(255, 0, 0)), Hsl::new(0.0, 1.0, 0.5));
/// assert_eq!(rgb_to_hsl(&Rgb::new(255, 255, 255)), Hsl::new(0.0, 0.0, 1.0));
/// ```
pub fn rgb_to_hsl(rgb: &Rgb) -> Hsl {
    let [r, g, b] = from_24bit(rgb.r, rgb.g, rgb.b);
    let v = r.max(g).max(b);
    let m = r.min(g).min(b);
    let l = (m + v) / 2.0;

    let mut h = 0.0;
    let mut s = 0.0;

    if l > 0.0 {
        let vm = v - m;
        if vm > 0.0 {
            s = vm / if l <= 0.5 { v + m } else { 2.0 - v - m };

            let r2 = (v - r) / vm;
            let g2 = (v - g) / vm;
            let b2 = (v - b) / vm;

            h = if r == v {
                if g == m {
                    5.0 + b2
                } else {
                    1.0 - g2
                }
            } else if g == v {
                if b == m {
                    1.0 + r2
                } else {
                    3.0 - b2
                }
            } else if r == m {
                3.0 + g2
            } else {
                5.0 - r2
            };
            h /= 6.0;
        }
    }

    Hsl::with_alpha(h, s, l, rgb.a)
}

/// Convert an HSL tuple to RGB.
///
/// The hue wraps around and may be negative. Achromatic colors produce equal
/// channels. Otherwise, the hue's sextant selects how to interpolate between
/// the largest and smallest channel values. Each channel is floored. The
/// alpha is passed through.
///
/// ```
/// # use irid::{hsl_to_rgb, Hsl, Rgb};
/// assert_eq!(hsl_to_rgb(&Hsl::new(1.0, 1.0, 0.5)), Rgb::new(255, 0, 0));
/// assert_eq!(hsl_to_rgb(&Hsl::new(0.0, 1.0, 1.0)), Rgb::new(255, 255, 255));
/// ```
pub fn hsl_to_rgb(hsl: &Hsl) -> Rgb {
    let Hsl { s, l, a, .. } = *hsl;
    let h = normalize_hue(hsl.h);

    let v = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };

    let (r, g, b) = if v > 0.0 {
        let m = l + l - v;
        let sv = (v - m) / v;
        let h = h * 6.0;
        let sextant = h.floor().min(5.0);
        let fract = h - sextant;
        let vsf = v * sv * fract;
        let mid1 = m + vsf;
        let mid2 = v - vsf;

        match sextant as u8 {
            0 => (v, mid1, m),
            1 => (mid2, v, m),
            2 => (m, v, mid1),
            3 => (m, mid2, v),
            4 => (mid1, m, v),
            5.. => (v, m, mid2),
        }
    } else {
        (l, l, l)
    };

    Rgb::with_alpha(to_channel(r), to_channel(g), to_channel(b), a)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{hsl_to_rgb, normalize_hue, rgb_to_hsl};
    use crate::{Float, Hsl, Rgb};

    fn assert_hsl_near(actual: Hsl, h: Float, s: Float, l: Float) {
        assert!((actual.h - h).abs() < 0.005, "hue {} vs {}", actual.h, h);
        assert!((actual.s - s).abs() < 0.005, "saturation {} vs {}", actual.s, s);
        assert!((actual.l - l).abs() < 0.005, "lightness {} vs {}", actual.l, l);
    }

    #[test]
    fn test_hsl_to_rgb() {
        let hsl = Hsl::new(147.0 / 255.0, 1.0, 128.0 / 255.0);
        assert_eq!(hsl_to_rgb(&hsl), Rgb::new(0, 138, 255));

        let hsl = Hsl::with_alpha(147.0 / 255.0, 1.0, 128.0 / 255.0, Some(0.5));
        assert_eq!(hsl_to_rgb(&hsl), Rgb::with_alpha(0, 138, 255, Some(0.5)));

        assert_eq!(hsl_to_rgb(&Hsl::new(0.0, 1.0, 1.0)), Rgb::new(255, 255, 255));
        assert_eq!(hsl_to_rgb(&Hsl::new(1.0, 1.0, 0.5)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(&Hsl::new(0.3, 0.0, 0.0)), Rgb::new(0, 0, 0));
        assert_eq!(hsl_to_rgb(&Hsl::new(0.3, 0.0, 0.5)), Rgb::new(127, 127, 127));
    }

    #[test]
    fn test_negative_hue() {
        // Bypass the constructor, which would already normalize the hue.
        let hsl = Hsl {
            h: -0.25,
            s: 1.0,
            l: 0.5,
            a: None,
        };
        assert_eq!(hsl_to_rgb(&hsl), Rgb::new(127, 0, 255));
        assert_eq!(hsl_to_rgb(&hsl), hsl_to_rgb(&Hsl::new(0.75, 1.0, 0.5)));
    }

    #[test]
    fn test_tiny_negative_hue() {
        let hsl = Hsl {
            h: -1e-17,
            s: 1.0,
            l: 0.5,
            a: None,
        };
        assert_eq!(hsl_to_rgb(&hsl), Rgb::new(255, 0, 0));

        assert_eq!(normalize_hue(-1e-17), 0.0);
        assert_eq!(normalize_hue(1.0), 0.0);
        assert_eq!(normalize_hue(-0.25), 0.75);
        assert!(normalize_hue(Float::NAN).is_nan());
    }

    #[test]
    fn test_rgb_to_hsl() {
        assert_hsl_near(
            rgb_to_hsl(&Rgb::new(0, 138, 255)),
            147.0 / 255.0,
            1.0,
            128.0 / 255.0,
        );

        let hsl = rgb_to_hsl(&Rgb::with_alpha(0, 138, 255, Some(0.5)));
        assert_eq!(hsl.a, Some(0.5));

        assert_hsl_near(rgb_to_hsl(&Rgb::new(255, 255, 255)), 0.0, 0.0, 1.0);
        assert_hsl_near(rgb_to_hsl(&Rgb::new(0, 0, 0)), 0.0, 0.0, 0.0);
        assert_hsl_near(rgb_to_hsl(&Rgb::new(0, 0, 255)), 2.0 / 3.0, 1.0, 0.5);
        assert_hsl_near(rgb_to_hsl(&Rgb::new(255, 0, 255)), 5.0 / 6.0, 1.0, 0.5);
        assert_eq!(rgb_to_hsl(&Rgb::new(10, 20, 30)).a, None);
    }

    mod proptest_conversion {
        use super::super::{hsl_to_rgb, rgb_to_hsl};
        use crate::{Float, Hsl, Rgb};
        use proptest::prelude::*;

        proptest! {
            /// Converting to HSL and back changes every channel by at most one.
            #[test]
            fn round_trip_within_one(r in 0_u8..=255, g in 0_u8..=255, b in 0_u8..=255) {
                let rgb = Rgb::new(r, g, b);
                let back = hsl_to_rgb(&rgb_to_hsl(&rgb));
                prop_assert!((i16::from(back.r) - i16::from(r)).abs() <= 1, "{:?} vs {:?}", back, rgb);
                prop_assert!((i16::from(back.g) - i16::from(g)).abs() <= 1, "{:?} vs {:?}", back, rgb);
                prop_assert!((i16::from(back.b) - i16::from(b)).abs() <= 1, "{:?} vs {:?}", back, rgb);
                prop_assert_eq!(back.a, None);
            }

            /// Hue is always in unit range.
            #[test]
            fn hue_in_unit_range(r in 0_u8..=255, g in 0_u8..=255, b in 0_u8..=255) {
                let hsl = rgb_to_hsl(&Rgb::new(r, g, b));
                prop_assert!((0.0..1.0).contains(&hsl.h), "hue {}", hsl.h);
                prop_assert!((0.0..=1.0).contains(&hsl.s), "saturation {}", hsl.s);
                prop_assert!((0.0..=1.0).contains(&hsl.l), "lightness {}", hsl.l);
            }

            /// Hues that differ by full rotations convert to the same RGB.
            #[test]
            fn hue_wraps_around(
                h in (0.0 as Float)..1.0,
                s in (0.0 as Float)..=1.0,
                l in (0.0 as Float)..=1.0,
                turns in -3_i32..3,
            ) {
                let plain = Hsl { h, s, l, a: None };
                let turned = Hsl { h: h + turns as Float, s, l, a: None };
                let diff = |x: u8, y: u8| (i16::from(x) - i16::from(y)).abs();
                let (p, t) = (hsl_to_rgb(&plain), hsl_to_rgb(&turned));
                prop_assert!(diff(p.r, t.r) <= 1 && diff(p.g, t.g) <= 1 && diff(p.b, t.b) <= 1,
                    "{:?} vs {:?}", p, t);
            }
        }
    }
}
