use numbers_validator::{ErrorKind, NumbersValidator};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn validator() -> NumbersValidator {
    NumbersValidator::new()
}

#[rstest]
#[case(json!(5), true)]
#[case(json!(0), true)]
#[case(json!(-5), true)]
#[case(json!(5.5), false)]
fn classifies_numbers(validator: NumbersValidator, #[case] input: Value, #[case] expected: bool) {
    assert_eq!(validator.is_integer(&input), Ok(expected));
}

#[rstest]
fn rejects_non_number(validator: NumbersValidator) {
    let err = validator.is_integer(&json!("not a number")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.to_string(), "[not a number] is not a number");
}
