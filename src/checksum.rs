//! Primitive97 check digit operations.
//!
//! The check digit of a number is the number reduced modulo 97, then modulo 9,
//! giving a single digit in `[0, 8]`.

use crate::error::InputError;
use crate::input::NumericInput;

/// The mod-97-then-mod-9 reduction on an already-coerced value.
fn check_digit_of(n: u64) -> u8 {
    ((n % 97) % 9) as u8
}

/// Calculates the Primitive97 check digit of a number.
///
/// Accepts a native integer or a decimal digit string; both representations
/// of the same value give the same digit.
///
/// # Examples
/// ```
/// assert_eq!(primitive97::checksum(23569).unwrap(), 5);
/// assert_eq!(primitive97::checksum("0097").unwrap(), 0);
/// ```
pub fn checksum(number: impl Into<NumericInput>) -> Result<u8, InputError> {
    let n = number.into().to_integer()?;
    let check = check_digit_of(n);
    tracing::trace!(n, check, "computed primitive97 check digit");
    Ok(check)
}

/// Checks whether the trailing digit of `number` is its Primitive97 check
/// digit.
///
/// A mismatch is `Ok(false)`; only malformed input is an error. A single-digit
/// input validates against base 0, so `is_valid("0")` is true.
///
/// # Examples
/// ```
/// assert!(primitive97::is_valid(235695).unwrap());
/// assert!(!primitive97::is_valid(235696).unwrap());
/// ```
pub fn is_valid(number: impl Into<NumericInput>) -> Result<bool, InputError> {
    let number = number.into();
    let (base, check) = number.split_trailing()?;
    let ok = check_digit_of(base) == check;
    tracing::trace!(%number, ok, "validated primitive97 check digit");
    Ok(ok)
}

/// Appends the Primitive97 check digit to `number`, preserving its
/// representation.
///
/// An integer comes back as an integer; a digit string comes back as its
/// original text (leading zeros included) with exactly one digit appended.
/// An integer append that would overflow `u64` is an input error.
///
/// # Examples
/// ```
/// use primitive97::NumericInput;
///
/// assert_eq!(
///     primitive97::with_checksum(23569).unwrap(),
///     NumericInput::Integer(235695)
/// );
/// assert_eq!(
///     primitive97::with_checksum("23569").unwrap(),
///     NumericInput::Digits("235695".to_string())
/// );
/// ```
pub fn with_checksum(number: impl Into<NumericInput>) -> Result<NumericInput, InputError> {
    let number = number.into();
    let check = check_digit_of(number.to_integer()?);
    number.format_with(check)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_digit() {
        assert_eq!(checksum(23569u64).unwrap(), 5);
    }

    #[test]
    fn check_digit_is_single_mod_nine_digit() {
        for n in [0u64, 1, 8, 9, 96, 97, 98, 1234567890, u64::MAX] {
            let check = checksum(n).unwrap();
            assert!(check <= 8, "checksum({n}) = {check} out of [0, 8]");
            assert_eq!(u64::from(check), (n % 97) % 9);
        }
    }

    #[test]
    fn zero_has_check_digit_zero() {
        assert_eq!(checksum(0u64).unwrap(), 0);
    }

    #[test]
    fn validates_matching_and_mismatching_digits() {
        assert!(is_valid(235695u64).unwrap());
        assert!(!is_valid(235696u64).unwrap());
    }

    #[test]
    fn single_digit_zero_is_valid() {
        // base 0, check 0.
        assert!(is_valid("0").unwrap());
        assert!(is_valid(0u64).unwrap());
    }

    #[test]
    fn mismatch_is_false_not_error() {
        for n in 235690u64..=235699 {
            let ok = is_valid(n).unwrap();
            assert_eq!(ok, n == 235695);
        }
    }

    #[test]
    fn append_matches_manual_concatenation() {
        assert_eq!(
            with_checksum(23569u64).unwrap(),
            NumericInput::Integer(235695)
        );
        assert_eq!(
            with_checksum("23569").unwrap(),
            NumericInput::Digits("235695".to_string())
        );
    }

    #[test]
    fn malformed_input_errors_on_every_operation() {
        assert!(checksum("12a").is_err());
        assert!(is_valid("12a").is_err());
        assert!(with_checksum("12a").is_err());
        assert!(checksum("").is_err());
    }
}
