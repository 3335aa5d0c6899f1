use numbers_validator::{ErrorKind, NumbersValidator};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Number, Value, json};

#[fixture]
fn validator() -> NumbersValidator {
    NumbersValidator::new()
}

#[rstest]
fn returns_even_numbers(validator: NumbersValidator) {
    let evens = validator
        .get_even_numbers_from_array(&json!([1, 2, 3, 4, 5, 6]))
        .unwrap();
    assert_eq!(evens, vec![Number::from(2), Number::from(4), Number::from(6)]);
}

#[rstest]
fn returns_empty_when_no_even_numbers(validator: NumbersValidator) {
    let evens = validator.get_even_numbers_from_array(&json!([1, 3, 5])).unwrap();
    assert!(evens.is_empty());
}

#[rstest]
fn rejects_non_array(validator: NumbersValidator) {
    let err = validator
        .get_even_numbers_from_array(&json!("not an array"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(
        err.to_string(),
        r#"[not an array] is not an array of "Numbers""#
    );
}

#[rstest]
fn rejects_non_numeric_element(validator: NumbersValidator) {
    let err = validator
        .get_even_numbers_from_array(&json!([1, 2, "not a number", 4]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(
        err.to_string(),
        r#"[1,2,not a number,4] is not an array of "Numbers""#
    );
}

#[rstest]
#[case(json!([]), json!([]))]
#[case(json!([8, 1, -4, 0]), json!([8, -4, 0]))]
#[case(json!([2.5, 3.0, 10.0]), json!([10.0]))]
fn filters_preserving_order(
    validator: NumbersValidator,
    #[case] input: Value,
    #[case] expected: Value,
) {
    let evens = validator.get_even_numbers_from_array(&input).unwrap();
    assert_eq!(Value::from(evens), expected);
}
