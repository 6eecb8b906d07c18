//! # Irid
//!
//! Irid parses colors written as hashed hexadecimal codes, CSS functional
//! notation, or CSS color names and derives new colors from them.
//!
//!
//! ## 1. Overview
//!
//! Irid's main abstractions are:
//!
//!   * [`Color`] implements **immutable color values**. A color remembers the
//!     [`Rgb`] or [`Hsl`] tuple it was created from and computes the other
//!     representation on first use. Its methods expose component access,
//!     derived colors such as [`Color::lighten`], [`Color::complement`], or
//!     [`Color::blend`], color harmonies, as well as luma and WCAG contrast.
//!   * [`ColorInput`] is the tagged union of everything [`Color::new`]
//!     accepts, i.e., strings, RGB records, HSL records, and existing colors.
//!     [`can_interpret`] determines whether a color input is acceptable
//!     without failing.
//!   * The free functions [`hex_to_rgb`], [`css_rgb_to_rgb`],
//!     [`css_hsl_to_hsl`], [`rgb_to_hex`], [`rgb_to_css_rgb`],
//!     [`hsl_to_css_hsl`], [`rgb_to_hsl`], and [`hsl_to_rgb`] implement the
//!     **string formats and color space conversions** on raw tuples.
//!   * The [`swatch`] module contains the **CSS named colors**.
//!
//!
//! ## 2. Deriving Colors
//!
//! Every color operation returns a new color and leaves its receiver as is.
//!
//! ```
//! # use irid::{Color, ColorError};
//! let red = Color::new("red")?;
//! assert_eq!(red.complement().to_hex_string(), "#00ffff");
//! assert_eq!(red.lighten(0.5).to_hsl_string(), "hsl(0, 100%, 75%)");
//! assert_eq!(red.to_hex_string(), "#ff0000");
//!
//! let text = Color::new("#3531ff")?.contrast();
//! assert_eq!(text.to_string(), "#ffffff");
//! # Ok::<(), ColorError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Irid supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** derives serialization for [`Rgb`] and [`Hsl`] and
//!     serializes [`Color`] as hashed hexadecimal string. This feature is
//!     disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod object;
pub mod swatch;
mod tuple;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{
    css_hsl_to_hsl, css_rgb_to_rgb, hex_to_rgb, hsl_to_css_hsl, hsl_to_rgb, rgb_to_css_rgb,
    rgb_to_hex, rgb_to_hsl,
};
pub use error::ColorError;
pub use object::{can_interpret, Color, ColorInput, Component};
pub use tuple::{Hsl, Rgb};
