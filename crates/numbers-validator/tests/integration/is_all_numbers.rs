use numbers_validator::{ErrorKind, NumbersValidator};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn validator() -> NumbersValidator {
    NumbersValidator::new()
}

#[rstest]
#[case(json!([1, 2, 3, 4, 5]), true)]
#[case(json!([]), true)]
#[case(json!([1, 2, "not a number", 4]), false)]
#[case(json!([1, 2, 3, "not a number", 5]), false)]
#[case(json!([1, "x", 3]), false)]
fn classifies_elements(validator: NumbersValidator, #[case] input: Value, #[case] expected: bool) {
    assert_eq!(validator.is_all_numbers(&input), Ok(expected));
}

#[rstest]
fn rejects_non_array(validator: NumbersValidator) {
    let err = validator.is_all_numbers(&json!("not an array")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.to_string(), "[not an array] is not an array");
}
