//! Input validation error for the checksum operations.

use thiserror::Error;

/// Error raised when an input does not form a valid non-negative decimal
/// number.
///
/// Every operation validates its input before any arithmetic runs. A checksum
/// mismatch in [`is_valid`](crate::is_valid) is a normal `Ok(false)`, never an
/// error; this type covers malformed input only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Digit string was empty.
    #[error("empty digit string")]
    Empty,
    /// Digit string contained a character outside `0`..=`9` (sign, separator,
    /// fractional point, whitespace).
    #[error("non-digit character in input: {input:?}")]
    NonDigit {
        /// The offending string, verbatim.
        input: String,
    },
    /// Value does not fit the u64 arithmetic range, either on parse or when
    /// appending a digit to an integer near `u64::MAX`.
    #[error("number out of range for u64 arithmetic: {input}")]
    OutOfRange {
        /// The offending number in decimal form.
        input: String,
    },
}
