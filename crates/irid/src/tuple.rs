#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::{normalize_hue, to_eq_bits};
use crate::Float;

/// A 24-bit RGB color with optional alpha.
///
/// The three channels are integers `0..=255`. The alpha, when present, is in
/// `0.0..=1.0`. An absent alpha is *not* the same as zero: it denotes a color
/// whose opacity was never specified. Such colors are fully opaque and
/// serialize without alpha term.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub a: Option<Float>,
}

impl Rgb {
    /// Create a new RGB tuple without alpha.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Create a new RGB tuple with the given alpha.
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: Option<Float>) -> Self {
        Self { r, g, b, a }
    }

    /// Determine whether the alpha is absent or a finite number.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.a.map_or(true, Float::is_finite)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        let [r, g, b] = value;
        Self::new(r, g, b)
    }
}

/// An HSL color with optional alpha.
///
/// Unlike CSS, the hue is a fraction of the full circle, i.e., `0.0..1.0`
/// represents `0°..360°`. Saturation and lightness are `0.0..=1.0`. The alpha
/// has the same semantics as for [`Rgb`].
///
/// Hues wrap around. [`Hsl::new`] and all color operations normalize them
/// into `0.0..1.0`, and equality compares hues modulo one full rotation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub a: Option<Float>,
}

impl Hsl {
    /// Create a new HSL tuple without alpha.
    pub fn new(h: Float, s: Float, l: Float) -> Self {
        Self::with_alpha(h, s, l, None)
    }

    /// Create a new HSL tuple with the given alpha.
    pub fn with_alpha(h: Float, s: Float, l: Float, a: Option<Float>) -> Self {
        Self {
            h: normalize_hue(h),
            s,
            l,
            a,
        }
    }

    /// Get a copy with the hue wrapped into `0.0..1.0`.
    pub(crate) fn normalize(&self) -> Self {
        Self::with_alpha(self.h, self.s, self.l, self.a)
    }

    /// Determine whether all coordinates and the alpha, if present, are
    /// finite numbers.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.h.is_finite()
            && self.s.is_finite()
            && self.l.is_finite()
            && self.a.map_or(true, Float::is_finite)
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        let [h1, h2] = [normalize_hue(self.h), normalize_hue(other.h)];
        to_eq_bits(h1) == to_eq_bits(h2)
            && to_eq_bits(self.s) == to_eq_bits(other.s)
            && to_eq_bits(self.l) == to_eq_bits(other.l)
            && self.a.map(to_eq_bits) == other.a.map(to_eq_bits)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Hsl, Rgb};

    #[test]
    fn test_hue_wraps() {
        assert_eq!(Hsl::new(-0.25, 1.0, 0.5), Hsl::new(0.75, 1.0, 0.5));
        assert_eq!(Hsl::new(1.5, 0.2, 0.3).h, 0.5);
        assert_eq!(Hsl::new(-1e-17, 1.0, 0.5).h, 0.0);
        assert_eq!(Hsl::new(-1e-17, 1.0, 0.5), Hsl::new(0.0, 1.0, 0.5));
        assert_ne!(Hsl::new(0.5, 1.0, 0.5), Hsl::new(0.5, 1.0, 0.4));
        assert_ne!(
            Hsl::with_alpha(0.5, 1.0, 0.5, Some(0.0)),
            Hsl::new(0.5, 1.0, 0.5)
        );
    }

    #[test]
    fn test_well_formed() {
        assert!(Rgb::new(1, 2, 3).is_well_formed());
        assert!(!Rgb::with_alpha(1, 2, 3, Some(f64::NAN as crate::Float)).is_well_formed());
        assert!(Hsl::with_alpha(0.1, 0.2, 0.3, Some(0.4)).is_well_formed());
        assert!(!Hsl::new(0.1, f64::NAN as crate::Float, 0.3).is_well_formed());
        assert!(!Hsl {
            h: f64::INFINITY as crate::Float,
            s: 0.0,
            l: 0.0,
            a: None
        }
        .is_well_formed());
    }

    #[test]
    fn test_from_array() {
        assert_eq!(Rgb::from([0, 136, 255]), Rgb::new(0, 136, 255));
        assert_eq!(Rgb::default(), Rgb::new(0, 0, 0));
    }
}
