use field_rail::FieldError;
use std::error::Error;

#[test]
fn accessors_return_constructed_parts() {
    let err = FieldError::new("email_presence", String::from("Email is required"));
    assert_eq!(err.name(), "email_presence");
    assert_eq!(err.message(), "Email is required");
}

#[test]
fn display_joins_name_and_message() {
    let err = FieldError::new("age", "must be positive");
    assert_eq!(format!("{}", err), "age: must be positive");
}

#[test]
fn field_error_is_a_std_error_without_source() {
    let err = FieldError::new("age", "must be positive");
    assert!(err.source().is_none());
}

#[test]
#[cfg(feature = "serde")]
fn field_error_serde() {
    let err = FieldError::new("zip", "digits only");
    let serialized = serde_json::to_string(&err).unwrap();
    assert_eq!(serialized, r#"{"name":"zip","message":"digits only"}"#);

    let deserialized: FieldError = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, err);
}
