//! Integer rule

use serde_json::Value;

use crate::error::NumbersError;
use crate::foundation::{Check, CheckResult, log_outcome};
use crate::value;

/// Tells whether a number has no fractional component.
///
/// Zero and negative integers qualify. Non-numbers fail with a type mismatch.
///
/// # Examples
///
/// ```
/// use numbers_validator::foundation::Check;
/// use numbers_validator::rules::is_integer;
/// use serde_json::json;
///
/// assert_eq!(is_integer().check(&json!(-5)), Ok(true));
/// assert_eq!(is_integer().check(&json!(5.5)), Ok(false));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsInteger;

impl Check for IsInteger {
    type Output = bool;

    fn check(&self, input: &Value) -> CheckResult<bool> {
        let result = input
            .as_number()
            .map(value::is_integral)
            .ok_or_else(|| NumbersError::not_a_number(input));
        log_outcome(self.name(), result)
    }

    fn name(&self) -> &str {
        "is_integer"
    }
}

/// Creates a rule that tells whether a number is an integer.
#[must_use]
pub const fn is_integer() -> IsInteger {
    IsInteger
}
