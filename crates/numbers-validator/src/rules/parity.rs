//! Parity rules

use serde_json::{Number, Value};

use crate::error::NumbersError;
use crate::foundation::{Check, CheckResult, log_outcome};
use crate::value;

// ============================================================================
// IS NUMBER EVEN
// ============================================================================

/// Tells whether a strictly positive number is even.
///
/// Fails with a type mismatch for non-numbers and with a domain error for
/// numbers `<= 0`.
///
/// # Examples
///
/// ```
/// use numbers_validator::foundation::Check;
/// use numbers_validator::rules::is_number_even;
/// use serde_json::json;
///
/// assert_eq!(is_number_even().check(&json!(4)), Ok(true));
/// assert_eq!(is_number_even().check(&json!(5)), Ok(false));
/// assert!(is_number_even().check(&json!(0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsNumberEven;

impl Check for IsNumberEven {
    type Output = bool;

    fn check(&self, input: &Value) -> CheckResult<bool> {
        let result = match input {
            Value::Number(n) if value::is_positive(n) => Ok(value::is_even(n)),
            Value::Number(_) => Err(NumbersError::too_low(input)),
            other => Err(NumbersError::not_of_type_number(other)),
        };
        log_outcome(self.name(), result)
    }

    fn name(&self) -> &str {
        "is_number_even"
    }
}

/// Creates a rule that tells whether a positive number is even.
#[must_use]
pub const fn is_number_even() -> IsNumberEven {
    IsNumberEven
}

// ============================================================================
// EVEN NUMBERS
// ============================================================================

/// Extracts the even elements of an array of numbers, order preserved.
///
/// Every element must be a number. Zero and negative even numbers are kept.
///
/// # Examples
///
/// ```
/// use numbers_validator::foundation::Check;
/// use numbers_validator::rules::even_numbers;
/// use serde_json::{json, Number};
///
/// let evens = even_numbers().check(&json!([1, 2, 3, 4])).unwrap();
/// assert_eq!(evens, vec![Number::from(2), Number::from(4)]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EvenNumbers;

impl Check for EvenNumbers {
    type Output = Vec<Number>;

    fn check(&self, input: &Value) -> CheckResult<Vec<Number>> {
        log_outcome(self.name(), collect_evens(input))
    }

    fn name(&self) -> &str {
        "get_even_numbers_from_array"
    }
}

fn collect_evens(input: &Value) -> CheckResult<Vec<Number>> {
    let Value::Array(items) = input else {
        return Err(NumbersError::not_an_array_of_numbers(input));
    };

    let mut evens = Vec::new();
    for item in items {
        // The message embeds the whole array, not the offending element.
        let n = item
            .as_number()
            .ok_or_else(|| NumbersError::not_an_array_of_numbers(input))?;
        if value::is_even(n) {
            evens.push(n.clone());
        }
    }
    Ok(evens)
}

/// Creates a rule that extracts the even numbers from an array.
#[must_use]
pub const fn even_numbers() -> EvenNumbers {
    EvenNumbers
}

// ============================================================================
// TESTS
// ============================================================================
