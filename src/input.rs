//! Integer-or-digit-string input type and its shared helpers.

use std::fmt;

use crate::error::InputError;

/// A non-negative whole number, presented either as a native integer or as a
/// string of decimal digits.
///
/// The variant tag is carried through [`with_checksum`](crate::with_checksum)
/// so the appended result comes back in the representation the caller
/// supplied. Leading zeros in a digit string are significant for formatting
/// (they survive appending untouched) but not for arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NumericInput {
    /// Native integer form.
    Integer(u64),
    /// Decimal digit string form. Validated lazily by the operations, so a
    /// malformed string is representable but fails at first use.
    Digits(String),
}

impl NumericInput {
    /// Coerce to the integer value used for arithmetic.
    ///
    /// A digit string must be non-empty and all ASCII digits; anything else
    /// is rejected before any arithmetic runs. Strings whose value exceeds
    /// `u64::MAX` are out of range.
    pub fn to_integer(&self) -> Result<u64, InputError> {
        match self {
            NumericInput::Integer(n) => Ok(*n),
            NumericInput::Digits(s) => parse_digits(s),
        }
    }

    /// The integer value if this is the `Integer` variant.
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            NumericInput::Integer(n) => Some(*n),
            NumericInput::Digits(_) => None,
        }
    }

    /// The digit string if this is the `Digits` variant.
    pub fn as_digits(&self) -> Option<&str> {
        match self {
            NumericInput::Integer(_) => None,
            NumericInput::Digits(s) => Some(s),
        }
    }

    /// Split off the trailing decimal digit: `(base, check)`.
    ///
    /// Purely positional: the last digit of the decimal representation is the
    /// check digit, everything before it is the base. A single-digit input
    /// yields base 0.
    pub(crate) fn split_trailing(&self) -> Result<(u64, u8), InputError> {
        match self {
            NumericInput::Integer(n) => Ok((n / 10, (n % 10) as u8)),
            NumericInput::Digits(s) => {
                // Validate the whole string first so "12a" fails as NonDigit
                // rather than as a surprising base parse.
                parse_digits(s)?;
                let (head, last) = s.split_at(s.len() - 1);
                let check = last.as_bytes()[0] - b'0';
                let base = if head.is_empty() {
                    0
                } else {
                    parse_digits(head)?
                };
                Ok((base, check))
            }
        }
    }

    /// Rebuild the appended result in the same representation as `self`.
    ///
    /// Integers multiply-and-add with overflow checked; digit strings keep
    /// their original text verbatim and gain exactly one character. The
    /// numeric value is never re-rendered, so leading zeros survive.
    pub(crate) fn format_with(&self, check: u8) -> Result<NumericInput, InputError> {
        match self {
            NumericInput::Integer(n) => n
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(check)))
                .map(NumericInput::Integer)
                .ok_or_else(|| InputError::OutOfRange {
                    input: n.to_string(),
                }),
            NumericInput::Digits(s) => {
                let mut out = String::with_capacity(s.len() + 1);
                out.push_str(s);
                out.push((b'0' + check) as char);
                Ok(NumericInput::Digits(out))
            }
        }
    }
}

impl From<u64> for NumericInput {
    fn from(n: u64) -> Self {
        NumericInput::Integer(n)
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput::Digits(s.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(s: String) -> Self {
        NumericInput::Digits(s)
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Integer(n) => write!(f, "{}", n),
            NumericInput::Digits(s) => f.write_str(s),
        }
    }
}

/// Parse a non-empty all-digit string as base-10 u64.
fn parse_digits(s: &str) -> Result<u64, InputError> {
    if s.is_empty() {
        return Err(InputError::Empty);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NonDigit {
            input: s.to_string(),
        });
    }
    s.parse::<u64>().map_err(|_| InputError::OutOfRange {
        input: s.to_string(),
    })
}
