//! Primitive97 check digit library.
//!
//! Computes, validates, and appends check digits using the Primitive97
//! scheme: `check = (n mod 97) mod 9`. A number may be supplied as a native
//! integer or as a string of decimal digits, and [`with_checksum`] hands the
//! result back in the same representation it was given.
//!
//! Arithmetic is `u64`. Digit strings whose value exceeds `u64::MAX`, and
//! integer appends that would overflow it, are rejected as
//! [`InputError::OutOfRange`].
//!
//! The library emits `tracing` events at trace level and never installs a
//! subscriber; that is the embedding application's concern.

pub mod checksum;
pub mod error;
pub mod input;

pub use checksum::{checksum, is_valid, with_checksum};
pub use error::InputError;
pub use input::NumericInput;
