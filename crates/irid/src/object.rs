use std::str::FromStr;
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::core::{
    css_hsl_to_hsl, css_rgb_to_rgb, hex_to_rgb, hsl_to_css_hsl, hsl_to_rgb, rgb_to_css_rgb,
    rgb_to_hex, rgb_to_hsl, to_contrast_ratio, to_luma, to_relative_luminance,
};
use crate::error::ColorError;
use crate::swatch::swatch_to_rgb;
use crate::{Float, Hsl, Rgb};

// ====================================================================================================================
// Color Input
// ====================================================================================================================

/// Everything that can become a [`Color`].
///
/// [`Color::new`] and [`can_interpret`] accept anything that converts into a
/// color input, i.e., string slices, references to strings, [`Rgb`] and
/// [`Hsl`] tuples, as well as colors and references to colors.
#[derive(Clone, Debug)]
pub enum ColorInput<'a> {
    /// A hashed hexadecimal color, a CSS `rgb()` or `hsl()` color, or a CSS
    /// color name.
    Text(&'a str),
    /// An RGB tuple.
    Rgb(Rgb),
    /// An HSL tuple.
    Hsl(Hsl),
    /// An existing color.
    Value(Color),
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<Rgb> for ColorInput<'_> {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Hsl> for ColorInput<'_> {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

impl From<Color> for ColorInput<'_> {
    fn from(value: Color) -> Self {
        Self::Value(value)
    }
}

impl From<&Color> for ColorInput<'_> {
    fn from(value: &Color) -> Self {
        Self::Value(value.clone())
    }
}

/// Determine whether [`Color::new`] accepts the given input.
///
/// ```
/// # use irid::{can_interpret, Rgb};
/// assert!(can_interpret("#fff"));
/// assert!(can_interpret("hsl(180, 60%, 70%)"));
/// assert!(can_interpret(Rgb::new(1, 2, 3)));
/// assert!(!can_interpret("#ab"));
/// ```
pub fn can_interpret<'a>(input: impl Into<ColorInput<'a>>) -> bool {
    Color::new(input).is_ok()
}

// ====================================================================================================================
// Component
// ====================================================================================================================

/// A color component that can be updated from a string with
/// [`Color::with_component`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Lightness,
    Alpha,
}

// ====================================================================================================================
// Color
// ====================================================================================================================

/// The tuple a color was created from.
#[derive(Clone, Copy, Debug)]
enum Stored {
    Rgb(Rgb),
    Hsl(Hsl),
}

/// An immutable color value.
///
/// A color remembers the [`Rgb`] or [`Hsl`] tuple it was created from and
/// computes the other representation on first use. The computed tuple is
/// memoized in a [`OnceLock`], so colors are `Send` and `Sync` and never
/// convert more than once.
///
/// All methods that produce colors return new values. When deriving a color
/// from HSL coordinates, say, with [`Color::lighten`], the new color stores
/// the HSL tuple, and the RGB channels are only computed when needed. That
/// preserves fractional lightness across chains of derivations.
///
/// # Equality
///
/// Two colors are equal if their RGB tuples, including alpha, are equal.
/// Hence, a color created from `"white"` equals a color created from
/// `"hsl(0, 0%, 100%)"`.
#[derive(Clone)]
pub struct Color {
    stored: Stored,
    rgb: OnceLock<Rgb>,
    hsl: OnceLock<Hsl>,
}

impl Color {
    /// Create a new color.
    ///
    /// Strings are resolved by trying hashed hexadecimal notation first, then
    /// CSS `rgb()`/`rgba()`, then a CSS color name, and finally CSS
    /// `hsl()`/`hsla()`. Tuples are accepted as long as their floating point
    /// fields are finite. Existing colors are copied.
    ///
    /// # Errors
    ///
    /// This method returns [`ColorError::InvalidSpecification`] if a string
    /// matches none of the formats or a tuple contains not-a-number or
    /// infinite fields.
    ///
    /// ```
    /// # use irid::{Color, ColorError, Hsl};
    /// let azure = Color::new("#0088ff")?;
    /// assert_eq!(azure.green(), 136);
    ///
    /// let also_azure = Color::new("rgb(0, 136, 255)")?;
    /// assert_eq!(azure, also_azure);
    ///
    /// let teal = Color::new(Hsl::new(0.5, 1.0, 0.25))?;
    /// assert_eq!(teal.to_hex_string(), "#007f7f");
    ///
    /// assert!(Color::new("#yyy").is_err());
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn new<'a>(input: impl Into<ColorInput<'a>>) -> Result<Self, ColorError> {
        match input.into() {
            ColorInput::Text(s) => Self::parse(s),
            ColorInput::Rgb(rgb) => Self::try_from(rgb),
            ColorInput::Hsl(hsl) => Self::try_from(hsl),
            ColorInput::Value(color) => Ok(color),
        }
    }

    /// Create a new opaque color from 24-bit RGB.
    ///
    /// ```
    /// # use irid::Color;
    /// assert_eq!(Color::rgb(0, 136, 255).to_hex_string(), "#0088ff");
    /// ```
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(Rgb::new(r, g, b))
    }

    /// Create a new opaque color from HSL coordinates.
    ///
    /// # Errors
    ///
    /// This method fails if any coordinate is not-a-number or infinite.
    pub fn hsl(h: Float, s: Float, l: Float) -> Result<Self, ColorError> {
        Self::try_from(Hsl::new(h, s, l))
    }

    fn from_stored(stored: Stored) -> Self {
        Self {
            stored,
            rgb: OnceLock::new(),
            hsl: OnceLock::new(),
        }
    }

    fn from_rgb(rgb: Rgb) -> Self {
        Self::from_stored(Stored::Rgb(rgb))
    }

    fn from_hsl(hsl: Hsl) -> Self {
        Self::from_stored(Stored::Hsl(hsl.normalize()))
    }

    fn parse(s: &str) -> Result<Self, ColorError> {
        let resolved = hex_to_rgb(s)
            .map(|rgb| ("hex", Stored::Rgb(rgb)))
            .or_else(|| css_rgb_to_rgb(s).map(|rgb| ("rgb", Stored::Rgb(rgb))))
            .or_else(|| swatch_to_rgb(s).map(|rgb| ("swatch", Stored::Rgb(rgb))))
            .or_else(|| css_hsl_to_hsl(s).map(|hsl| ("hsl", Stored::Hsl(hsl))));

        match resolved {
            Some((format, Stored::Rgb(rgb))) => {
                trace!(input = s, format, "resolved color");
                Ok(Self::from_rgb(rgb))
            }
            Some((format, Stored::Hsl(hsl))) => {
                trace!(input = s, format, "resolved color");
                Ok(Self::from_hsl(hsl))
            }
            None => {
                debug!(input = s, "invalid color specification");
                Err(ColorError::invalid(s))
            }
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get this color's RGB tuple, converting from HSL on first use.
    pub fn to_rgb(&self) -> Rgb {
        match self.stored {
            Stored::Rgb(rgb) => rgb,
            Stored::Hsl(hsl) => *self.rgb.get_or_init(|| hsl_to_rgb(&hsl)),
        }
    }

    /// Get this color's HSL tuple, converting from RGB on first use.
    pub fn to_hsl(&self) -> Hsl {
        match self.stored {
            Stored::Rgb(rgb) => *self.hsl.get_or_init(|| rgb_to_hsl(&rgb)),
            Stored::Hsl(hsl) => hsl,
        }
    }

    /// Get the red channel.
    pub fn red(&self) -> u8 {
        self.to_rgb().r
    }

    /// Get the green channel.
    pub fn green(&self) -> u8 {
        self.to_rgb().g
    }

    /// Get the blue channel.
    pub fn blue(&self) -> u8 {
        self.to_rgb().b
    }

    /// Get the hue as a fraction `0.0..1.0` of the full circle.
    pub fn hue(&self) -> Float {
        self.to_hsl().h
    }

    /// Get the saturation.
    pub fn saturation(&self) -> Float {
        self.to_hsl().s
    }

    /// Get the lightness.
    pub fn lightness(&self) -> Float {
        self.to_hsl().l
    }

    /// Get the alpha, which is `None` if it was never set.
    ///
    /// The alpha is read from the stored tuple. Conversions pass the alpha
    /// through unchanged, so the RGB and HSL tuples always agree on it.
    pub fn alpha(&self) -> Option<Float> {
        match self.stored {
            Stored::Rgb(rgb) => rgb.a,
            Stored::Hsl(hsl) => hsl.a,
        }
    }

    /// Get the opacity, which is the same as the alpha.
    pub fn opacity(&self) -> Option<Float> {
        self.alpha()
    }

    // ----------------------------------------------------------------------------------------------------------------

    fn map_rgb(&self, f: impl FnOnce(Rgb) -> Rgb) -> Self {
        Self::from_rgb(f(self.to_rgb()))
    }

    fn map_hsl(&self, f: impl FnOnce(Hsl) -> Hsl) -> Self {
        Self::from_hsl(f(self.to_hsl()))
    }

    /// Replace the red channel.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_red(&self, r: u8) -> Self {
        self.map_rgb(|rgb| Rgb { r, ..rgb })
    }

    /// Replace the green channel.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_green(&self, g: u8) -> Self {
        self.map_rgb(|rgb| Rgb { g, ..rgb })
    }

    /// Replace the blue channel.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_blue(&self, b: u8) -> Self {
        self.map_rgb(|rgb| Rgb { b, ..rgb })
    }

    /// Replace the hue. The hue wraps around, so that `-0.25` is the same as
    /// `0.75`.
    ///
    /// ```
    /// # use irid::{Color, ColorError};
    /// let color = Color::new("#3531ff")?;
    /// assert_eq!(color.with_hue(0.5).to_hex_string(), "#30ffff");
    /// assert_eq!(color.with_hue(-0.5), color.with_hue(0.5));
    /// # Ok::<(), ColorError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_hue(&self, h: Float) -> Self {
        self.map_hsl(|hsl| Hsl { h, ..hsl })
    }

    /// Replace the saturation.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_saturation(&self, s: Float) -> Self {
        self.map_hsl(|hsl| Hsl { s, ..hsl })
    }

    /// Replace the lightness.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_lightness(&self, l: Float) -> Self {
        self.map_hsl(|hsl| Hsl { l, ..hsl })
    }

    /// Replace the alpha. `None` clears the alpha, which is different from
    /// setting it to zero.
    ///
    /// The new color stores the same kind of tuple as this color.
    ///
    /// ```
    /// # use irid::{Color, ColorError};
    /// let white = Color::new("#ffffff55")?;
    /// assert_eq!(white.with_alpha(Some(0.5)).to_hex_string(), "#ffffff7f");
    /// assert_eq!(white.with_alpha(None).to_hex_string(), "#ffffff");
    /// # Ok::<(), ColorError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, a: Option<Float>) -> Self {
        match self.stored {
            Stored::Rgb(rgb) => Self::from_rgb(Rgb { a, ..rgb }),
            Stored::Hsl(hsl) => Self::from_hsl(Hsl { a, ..hsl }),
        }
    }

    /// Replace the opacity, which is the same as the alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_opacity(&self, a: Option<Float>) -> Self {
        self.with_alpha(a)
    }

    /// Replace a component with the number in the given string.
    ///
    /// Red, green, and blue are truncated to integers and clamped to
    /// `0..=255`. Alpha is clamped to `0.0..=1.0`, and an empty string clears
    /// it. Leading and trailing whitespace is ignored.
    ///
    /// # Errors
    ///
    /// This method fails if the string is not a finite number.
    ///
    /// ```
    /// # use irid::{Color, ColorError, Component};
    /// let green = Color::new("black")?.with_component(Component::Green, "101")?;
    /// assert_eq!(green.to_hex_string(), "#006500");
    /// assert!(green.with_component(Component::Hue, "half").is_err());
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn with_component(&self, component: Component, value: &str) -> Result<Self, ColorError> {
        let value = value.trim();
        if component == Component::Alpha && value.is_empty() {
            return Ok(self.with_alpha(None));
        }

        let Some(number) = value.parse::<Float>().ok().filter(|n| n.is_finite()) else {
            debug!(input = value, ?component, "invalid color component");
            return Err(ColorError::invalid(value));
        };
        let channel = || number.trunc().clamp(0.0, 255.0) as u8;

        Ok(match component {
            Component::Red => self.with_red(channel()),
            Component::Green => self.with_green(channel()),
            Component::Blue => self.with_blue(channel()),
            Component::Hue => self.with_hue(number),
            Component::Saturation => self.with_saturation(number),
            Component::Lightness => self.with_lightness(number),
            Component::Alpha => self.with_alpha(Some(number.clamp(0.0, 1.0))),
        })
    }

    /// Adjust the lightness so that the luma comes as close as possible to
    /// the given target. Hue, saturation, and alpha stay the same.
    ///
    /// Since luma does not decrease as lightness increases, this method
    /// bisects the lightness. It tries both extremes first, so targets of 0
    /// and 1 produce black and white. Otherwise, the result's luma is within
    /// one 24-bit step, i.e., 1/255, of the target. A not-a-number target
    /// returns this color.
    ///
    /// ```
    /// # use irid::{Color, ColorError};
    /// let dark = Color::new("#660")?.with_luma(0.7);
    /// assert!((dark.luma() - 0.7).abs() < 0.01);
    /// # Ok::<(), ColorError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_luma(&self, target: Float) -> Self {
        if target.is_nan() {
            return self.clone();
        }

        let target = target.clamp(0.0, 1.0);
        let hsl = self.to_hsl();
        let candidate = |l: Float| Self::from_hsl(Hsl { l, ..hsl });

        let mut best = candidate(0.0);
        let mut best_error = (best.luma() - target).abs();
        let mut consider = |color: Self| -> Float {
            let luma = color.luma();
            let error = (luma - target).abs();
            if error < best_error {
                best = color;
                best_error = error;
            }
            luma
        };

        let (mut low, mut high) = (0.0, 1.0);
        if consider(candidate(high)) <= target {
            return candidate(high);
        }

        for _ in 0..40 {
            let middle = (low + high) / 2.0;
            if consider(candidate(middle)) < target {
                low = middle;
            } else {
                high = middle;
            }
        }

        best
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute the luma, i.e., `0.3r + 0.59g + 0.11b` scaled to unit range.
    ///
    /// ```
    /// # use irid::{Color, ColorError};
    /// assert_eq!(Color::new("#fff")?.luma(), 1.0);
    /// assert!((Color::new("#f00")?.luma() - 0.3).abs() < 1e-9);
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn luma(&self) -> Float {
        to_luma(&self.to_rgb())
    }

    /// Compute the WCAG relative luminance.
    pub fn relative_luminance(&self) -> Float {
        to_relative_luminance(&self.to_rgb())
    }

    /// Compute the WCAG contrast ratio between this and the other color. The
    /// ratio is symmetric and `1.0..=21.0`.
    ///
    /// Like all methods taking other colors, this method expects a color
    /// value. Strings and tuples need to go through [`Color::new`] first,
    /// which surfaces invalid input as an error.
    ///
    /// ```
    /// # use irid::{Color, ColorError};
    /// let white = Color::new("white")?;
    /// let black = Color::new("black")?;
    /// assert!((white.contrast_ratio(&black) - 21.0).abs() < 1e-9);
    /// assert_eq!(white.contrast_ratio(&black), black.contrast_ratio(&white));
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn contrast_ratio(&self, other: &Self) -> Float {
        to_contrast_ratio(self.relative_luminance(), other.relative_luminance())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Lighten this color by moving its lightness the given fraction of the
    /// remaining distance towards 1.
    ///
    /// ```
    /// # use irid::{Color, ColorError};
    /// let gray = Color::new("#000")?.lighten(0.5);
    /// assert_eq!(gray.lightness(), 0.5);
    /// assert_eq!(gray.to_hex_string(), "#7f7f7f");
    /// # Ok::<(), ColorError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lighten(&self, amount: Float) -> Self {
        self.map_hsl(|hsl| Hsl {
            l: hsl.l + (1.0 - hsl.l) * amount,
            ..hsl
        })
    }

    /// Darken this color by scaling its lightness by `1 - amount`.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darken(&self, amount: Float) -> Self {
        self.map_hsl(|hsl| Hsl {
            l: hsl.l * (1.0 - amount),
            ..hsl
        })
    }

    /// Invert each RGB channel.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn invert(&self) -> Self {
        self.map_rgb(|rgb| Rgb {
            r: 255 - rgb.r,
            g: 255 - rgb.g,
            b: 255 - rgb.b,
            a: rgb.a,
        })
    }

    /// Rotate the hue by half a turn.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn complement(&self) -> Self {
        self.rotate(0.5)
    }

    /// Drop all saturation, turning this color into a gray of the same
    /// lightness.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn desaturate(&self) -> Self {
        self.with_saturation(0.0)
    }

    /// Pick white or black, whichever has the larger luma difference to this
    /// color.
    ///
    /// ```
    /// # use irid::{Color, ColorError};
    /// assert_eq!(Color::new("#3531ff")?.contrast().to_hex_string(), "#ffffff");
    /// assert_eq!(Color::new("#d8ec00")?.contrast().to_hex_string(), "#000000");
    /// # Ok::<(), ColorError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn contrast(&self) -> Self {
        self.contrast_with(&Self::rgb(255, 255, 255), &Self::rgb(0, 0, 0))
    }

    /// Pick the light or dark color, whichever has the larger luma difference
    /// to this color. On a tie, this method picks the dark color.
    ///
    /// ```
    /// # use irid::{Color, ColorError};
    /// let light = Color::new("#dddddd")?;
    /// let dark = Color::new("rgb(34, 34, 34)")?;
    /// assert_eq!(Color::new("white")?.contrast_with(&light, &dark), dark);
    /// # Ok::<(), ColorError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn contrast_with(&self, light: &Self, dark: &Self) -> Self {
        let luma = self.luma();
        if (light.luma() - luma).abs() > (dark.luma() - luma).abs() {
            light.clone()
        } else {
            dark.clone()
        }
    }

    /// Blend this color with the other color half and half. The result is
    /// opaque.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blend(&self, other: &Self) -> Self {
        self.blend_with_opacity(other, 0.5)
    }

    /// Blend this color with the other color, which contributes the given
    /// opacity. Each channel is floored, and the result is opaque. Other
    /// inputs become colors with [`Color::new`].
    ///
    /// ```
    /// # use irid::{Color, ColorError};
    /// let white = Color::new("white")?;
    /// let black = Color::new("black")?;
    /// assert_eq!(white.blend(&black).to_hex_string(), "#7f7f7f");
    /// assert_eq!(white.blend_with_opacity(&black, 0.25).to_hex_string(), "#bfbfbf");
    /// # Ok::<(), ColorError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blend_with_opacity(&self, other: &Self, opacity: Float) -> Self {
        let [this, that] = [self.to_rgb(), other.to_rgb()];
        let mix = |c1: u8, c2: u8| {
            (Float::from(c1) * (1.0 - opacity) + Float::from(c2) * opacity)
                .floor()
                .clamp(0.0, 255.0) as u8
        };

        Self::rgb(mix(this.r, that.r), mix(this.g, that.g), mix(this.b, that.b))
    }

    // ----------------------------------------------------------------------------------------------------------------

    fn rotate(&self, turns: Float) -> Self {
        self.with_hue(self.hue() + turns)
    }

    /// Get this color and its two neighbors 30° apart.
    pub fn analogous(&self) -> [Self; 3] {
        [self.clone(), self.rotate(-1.0 / 12.0), self.rotate(1.0 / 12.0)]
    }

    /// Get this color and two more colors 120° apart.
    pub fn triad(&self) -> [Self; 3] {
        [self.clone(), self.rotate(-1.0 / 3.0), self.rotate(1.0 / 3.0)]
    }

    /// Get this color and three more colors 90° apart.
    ///
    /// ```
    /// # use irid::{Color, ColorError};
    /// let hexes = Color::new("red")?.tetrad().map(|c| c.to_hex_string());
    /// assert_eq!(hexes, ["#ff0000", "#7fff00", "#00ffff", "#7f00ff"]);
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn tetrad(&self) -> [Self; 4] {
        [
            self.clone(),
            self.rotate(1.0 / 4.0),
            self.rotate(2.0 / 4.0),
            self.rotate(3.0 / 4.0),
        ]
    }

    /// Get this color and three more colors at 60°, 180°, and 240°.
    pub fn rect_tetrad(&self) -> [Self; 4] {
        [
            self.clone(),
            self.rotate(1.0 / 6.0),
            self.rotate(3.0 / 6.0),
            self.rotate(4.0 / 6.0),
        ]
    }

    /// Get this color and the two neighbors of its complement, which are 150°
    /// apart from this color.
    pub fn split_complementary(&self) -> [Self; 3] {
        [self.clone(), self.rotate(-5.0 / 12.0), self.rotate(5.0 / 12.0)]
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Format this color in hashed hexadecimal notation.
    pub fn to_hex_string(&self) -> String {
        rgb_to_hex(&self.to_rgb())
    }

    /// Format this color as CSS `rgb()` or, with alpha, `rgba()`.
    pub fn to_rgb_string(&self) -> String {
        rgb_to_css_rgb(&self.to_rgb())
    }

    /// Format this color as CSS `hsl()` or, with alpha, `hsla()`.
    pub fn to_hsl_string(&self) -> String {
        hsl_to_css_hsl(&self.to_hsl())
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl TryFrom<Rgb> for Color {
    type Error = ColorError;

    fn try_from(value: Rgb) -> Result<Self, Self::Error> {
        if value.is_well_formed() {
            Ok(Self::from_rgb(value))
        } else {
            debug!(input = ?value, "invalid color specification");
            Err(ColorError::invalid(format!("{:?}", value)))
        }
    }
}

impl TryFrom<Hsl> for Color {
    type Error = ColorError;

    fn try_from(value: Hsl) -> Result<Self, Self::Error> {
        if value.is_well_formed() {
            Ok(Self::from_hsl(value))
        } else {
            debug!(input = ?value, "invalid color specification");
            Err(ColorError::invalid(format!("{:?}", value)))
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgb() == other.to_rgb()
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.stored {
            Stored::Rgb(rgb) => f.write_fmt(format_args!("Color({:?})", rgb)),
            Stored::Hsl(hsl) => f.write_fmt(format_args!("Color({:?})", hsl)),
        }
    }
}

impl std::fmt::Display for Color {
    /// Format this color in hashed hexadecimal notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ====================================================================================================================
