//! The `NumbersValidator` facade

use serde_json::{Number, Value};

use crate::foundation::{Check, CheckResult};
use crate::rules::{even_numbers, is_all_numbers, is_integer, is_number_even};

/// Stateless collection of numbers checks.
///
/// Every method is a pure function of its argument. Failures come back as
/// [`NumbersError`](crate::NumbersError) with a fixed message; see [`ErrorKind`](crate::ErrorKind)
/// for the two kinds.
///
/// # Examples
///
/// ```
/// use numbers_validator::NumbersValidator;
/// use serde_json::json;
///
/// let validator = NumbersValidator::new();
/// assert_eq!(validator.is_number_even(&json!(4)), Ok(true));
/// assert_eq!(validator.is_integer(&json!(5.5)), Ok(false));
/// assert_eq!(
///     validator.is_number_even(&json!("5")).unwrap_err().to_string(),
///     r#"[5] is not of type "Number" it is of type "string""#,
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NumbersValidator;

impl NumbersValidator {
    /// Creates a validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns whether `value` is even.
    ///
    /// `value` must be a number above 0.
    pub fn is_number_even(&self, value: &Value) -> CheckResult<bool> {
        is_number_even().check(value)
    }

    /// Returns the even elements of `values`, in their original order.
    ///
    /// `values` must be an array whose every element is a number.
    pub fn get_even_numbers_from_array(&self, values: &Value) -> CheckResult<Vec<Number>> {
        even_numbers().check(values)
    }

    /// Returns whether every element of `values` is a number.
    ///
    /// `values` must be an array.
    pub fn is_all_numbers(&self, values: &Value) -> CheckResult<bool> {
        is_all_numbers().check(values)
    }

    /// Returns whether `value` has no fractional component.
    ///
    /// `value` must be a number.
    pub fn is_integer(&self, value: &Value) -> CheckResult<bool> {
        is_integer().check(value)
    }
}
