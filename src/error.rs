//! Error types for bitstream operations.
//!
//! Almost nothing in this crate can fail: out-of-range shift counts and bit
//! positions have defined results, mismatched operand lengths are
//! zero-extended, and allocation exhaustion aborts the process like any other
//! Rust allocation failure. The one recoverable failure is feeding the hex
//! decoder a character that is not a hexadecimal digit.
//!
//! # Error Propagation
//!
//! ```
//! use bitstream::{BitStream, Result};
//!
//! fn widened(literal: &str) -> Result<BitStream> {
//!     let mut value = BitStream::from_hex(literal)?;
//!     value.resize(value.block_count() + 1);
//!     Ok(value)
//! }
//! # assert!(widened("beef").is_ok());
//! # assert!(widened("nope").is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for bitstream operations.
///
/// All fallible operations return [`Result<T>`] where the error type is
/// [`BitStreamError`].
pub type Result<T> = std::result::Result<T, BitStreamError>;

/// Errors that can occur during bitstream operations.
///
/// # Design Notes
/// - `Clone` + `PartialEq` enable testing and error comparison
/// - Variants carry enough context to point at the offending input
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BitStreamError {
    /// The hex decoder encountered a character outside `[0-9a-fA-F]`.
    ///
    /// The decoder rejects the whole literal rather than skipping the
    /// character or mapping it to an arbitrary digit value.
    InvalidHexDigit {
        /// The offending character.
        character: char,
        /// Byte offset of the character within the input string.
        position: usize,
    },
}

impl fmt::Display for BitStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHexDigit {
                character,
                position,
            } => {
                write!(
                    f,
                    "Invalid hexadecimal digit {:?} at position {}.",
                    character, position
                )
            }
        }
    }
}

impl std::error::Error for BitStreamError {}

impl BitStreamError {
    /// Create an `InvalidHexDigit` error.
    ///
    /// # Examples
    /// ```
    /// use bitstream::BitStreamError;
    ///
    /// let err = BitStreamError::invalid_hex_digit('g', 3);
    /// assert!(err.to_string().contains("position 3"));
    /// ```
    #[must_use]
    pub fn invalid_hex_digit(character: char, position: usize) -> Self {
        Self::InvalidHexDigit {
            character,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_hex_digit() {
        let err = BitStreamError::invalid_hex_digit('z', 7);
        let display = format!("{err}");
        assert!(display.contains("'z'"));
        assert!(display.contains("position 7"));
        assert!(display.ends_with('.'));
    }

    #[test]
    fn test_error_implements_std_error() {
        let _err: Box<dyn std::error::Error> =
            Box::new(BitStreamError::invalid_hex_digit('!', 0));
    }

    #[test]
    fn test_error_clone_and_eq() {
        let err1 = BitStreamError::invalid_hex_digit('q', 2);
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(BitStreamError::invalid_hex_digit('x', 0))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
