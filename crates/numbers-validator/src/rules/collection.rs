//! Collection rules

use serde_json::Value;

use crate::error::NumbersError;
use crate::foundation::{Check, CheckResult, log_outcome};

/// Tells whether every element of an array is a number.
///
/// Vacuously true for an empty array. Only a non-array argument fails;
/// non-numeric elements just make the answer `false`.
///
/// # Examples
///
/// ```
/// use numbers_validator::foundation::Check;
/// use numbers_validator::rules::is_all_numbers;
/// use serde_json::json;
///
/// assert_eq!(is_all_numbers().check(&json!([])), Ok(true));
/// assert_eq!(is_all_numbers().check(&json!([1, "x", 3])), Ok(false));
/// assert!(is_all_numbers().check(&json!("not an array")).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsAllNumbers;

impl Check for IsAllNumbers {
    type Output = bool;

    fn check(&self, input: &Value) -> CheckResult<bool> {
        let result = match input {
            Value::Array(items) => Ok(items.iter().all(Value::is_number)),
            other => Err(NumbersError::not_an_array(other)),
        };
        log_outcome(self.name(), result)
    }

    fn name(&self) -> &str {
        "is_all_numbers"
    }
}

/// Creates a rule that tells whether an array holds only numbers.
#[must_use]
pub const fn is_all_numbers() -> IsAllNumbers {
    IsAllNumbers
}
