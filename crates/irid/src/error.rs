//! Utility module with irid's errors.

use thiserror::Error;

/// An invalid color specification.
///
/// This is the only error raised by irid. [`Color::new`](crate::Color::new)
/// and its conversion trait siblings return it when a string is neither
/// hashed hexadecimal, `rgb()`/`rgba()`, a CSS color name, nor
/// `hsl()`/`hsla()`, and when a record contains a not-a-number or infinite
/// coordinate. [`Color::with_component`](crate::Color::with_component) also
/// returns it for a string that is not a number.
///
/// The internal format parsers never fail; they just don't match, which lets
/// the constructor try the next format.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The input does not describe a color.
    #[error("invalid color specification: {input}")]
    InvalidSpecification {
        /// A human-readable rendition of the rejected input.
        input: String,
    },
}

impl ColorError {
    /// Create a new invalid specification error for the given input.
    pub fn invalid(input: impl std::fmt::Display) -> Self {
        Self::InvalidSpecification {
            input: input.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ColorError;

    #[test]
    fn test_display() {
        let error = ColorError::invalid("#yyy");
        assert_eq!(error.to_string(), "invalid color specification: #yyy");
        assert_eq!(
            error,
            ColorError::InvalidSpecification {
                input: "#yyy".into()
            }
        );
    }
}
