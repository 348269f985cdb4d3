//! With the `serde` feature, `NumericInput` serializes untagged: a bare JSON
//! number for the integer form, a bare JSON string for the digit form.

#![cfg(feature = "serde")]

use primitive97::{is_valid, with_checksum, NumericInput};

#[test]
fn serializes_untagged() {
    let int = NumericInput::Integer(235695);
    let digits = NumericInput::Digits("00970".to_string());
    assert_eq!(serde_json::to_string(&int).unwrap(), "235695");
    assert_eq!(serde_json::to_string(&digits).unwrap(), "\"00970\"");
}

#[test]
fn deserializes_either_form() {
    let int: NumericInput = serde_json::from_str("235695").unwrap();
    let digits: NumericInput = serde_json::from_str("\"00970\"").unwrap();
    assert_eq!(int, NumericInput::Integer(235695));
    assert_eq!(digits, NumericInput::Digits("00970".to_string()));
}

#[test]
fn deserialized_values_flow_through_the_operations() {
    let n: NumericInput = serde_json::from_str("\"23569\"").unwrap();
    let appended = with_checksum(n).unwrap();
    assert_eq!(appended.as_digits(), Some("235695"));
    assert!(is_valid(appended).unwrap());
}
