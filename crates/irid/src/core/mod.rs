mod contrast;
mod conversion;
mod equality;
mod number;
mod string;

// contrast
pub(crate) use contrast::{to_contrast_ratio, to_luma, to_relative_luminance};

// conversion
pub use conversion::{hsl_to_rgb, rgb_to_hsl};
pub(crate) use conversion::normalize_hue;

// equality
pub use equality::to_eq_bits;

// string
pub use string::{
    css_hsl_to_hsl, css_rgb_to_rgb, hex_to_rgb, hsl_to_css_hsl, rgb_to_css_rgb, rgb_to_hex,
};
