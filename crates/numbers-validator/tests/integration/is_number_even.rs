use numbers_validator::{ErrorKind, NumbersValidator};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn validator() -> NumbersValidator {
    NumbersValidator::new()
}

#[rstest]
fn returns_true_for_even_number(validator: NumbersValidator) {
    assert_eq!(validator.is_number_even(&json!(4)), Ok(true));
}

#[rstest]
fn returns_false_for_odd_number(validator: NumbersValidator) {
    assert_eq!(validator.is_number_even(&json!(5)), Ok(false));
}

#[rstest]
fn rejects_string(validator: NumbersValidator) {
    let err = validator.is_number_even(&json!("5")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(
        err.to_string(),
        r#"[5] is not of type "Number" it is of type "string""#
    );
}

#[rstest]
#[case(json!(0), "[0] is too low, Provide a number above 0")]
#[case(json!(-3), "[-3] is too low, Provide a number above 0")]
#[case(json!(-2.5), "[-2.5] is too low, Provide a number above 0")]
fn rejects_non_positive(
    validator: NumbersValidator,
    #[case] input: Value,
    #[case] message: &str,
) {
    let err = validator.is_number_even(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DomainError);
    assert_eq!(err.to_string(), message);
}

#[rstest]
#[case(json!(null), "object")]
#[case(json!(false), "boolean")]
#[case(json!({"n": 2}), "object")]
fn names_actual_runtime_type(
    validator: NumbersValidator,
    #[case] input: Value,
    #[case] actual: &str,
) {
    let err = validator.is_number_even(&input).unwrap_err();
    assert!(err.is_type_mismatch());
    assert!(
        err.to_string()
            .ends_with(&format!(r#"it is of type "{actual}""#)),
        "{err}"
    );
}
