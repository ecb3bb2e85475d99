//! Validation coverage for user value types.

use super::*;
use rstest::rstest;

#[rstest]
#[case("", "555-0100", UserValidationError::EmptyFullName)]
#[case("   ", "555-0100", UserValidationError::EmptyFullName)]
#[case("Alice", "", UserValidationError::EmptyPhone)]
#[case("Alice", "  ", UserValidationError::EmptyPhone)]
#[case("Alice", "012345678901234567890", UserValidationError::PhoneTooLong { max: PHONE_MAX })]
fn new_user_rejects_invalid_parts(
    #[case] full_name: &str,
    #[case] phone: &str,
    #[case] expected: UserValidationError,
) {
    let err = NewUser::try_from_parts(full_name, phone).expect_err("invalid input must fail");
    assert_eq!(err, expected);
}

#[rstest]
fn full_name_rejects_overlong_values() {
    let long = "a".repeat(FULL_NAME_MAX + 1);
    let err = FullName::new(long).expect_err("overlong name");
    assert_eq!(err, UserValidationError::FullNameTooLong { max: FULL_NAME_MAX });
    assert_eq!(err.field(), "full_name");
    assert_eq!(err.code(), "too_long");
}

#[rstest]
fn phone_is_trimmed() {
    let phone = PhoneNumber::new("  555-0100 ").expect("valid phone");
    assert_eq!(phone.as_ref(), "555-0100");
}

#[rstest]
fn user_serialises_with_snake_case_fields() {
    let user = User::new(
        UserId::new(1).expect("valid id"),
        FullName::new("Alice").expect("valid name"),
        PhoneNumber::new("555-0100").expect("valid phone"),
    );
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value,
        serde_json::json!({ "id": 1, "full_name": "Alice", "phone": "555-0100" })
    );
}
