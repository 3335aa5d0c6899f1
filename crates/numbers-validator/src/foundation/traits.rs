//! Core trait for numbers checks
//!
//! This module defines the trait that every rule implements.

use serde_json::Value;

use crate::foundation::CheckResult;

// ============================================================================
// CORE CHECK TRAIT
// ============================================================================

/// The trait every numbers rule implements.
///
/// A check type-guards a dynamic input and either produces a result
/// (a predicate answer or a filtered sequence) or fails with a
/// [`NumbersError`](crate::NumbersError).
///
/// # Examples
///
/// ```
/// use numbers_validator::foundation::Check;
/// use numbers_validator::NumbersError;
/// use serde_json::{json, Value};
///
/// struct IsZero;
///
/// impl Check for IsZero {
///     type Output = bool;
///
///     fn check(&self, input: &Value) -> Result<bool, NumbersError> {
///         Ok(input.as_f64() == Some(0.0))
///     }
/// }
///
/// assert_eq!(IsZero.check(&json!(0)), Ok(true));
/// ```
pub trait Check {
    /// What a successful check produces.
    type Output;

    /// Checks the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(output)` if the input has the required shape
    /// * `Err(NumbersError)` otherwise
    fn check(&self, input: &Value) -> CheckResult<Self::Output>;

    /// Returns the name of this rule.
    ///
    /// Used as the `rule` field of log events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Checks every input in order, stopping at the first failure.
    fn check_all(&self, inputs: &[Value]) -> CheckResult<Vec<Self::Output>> {
        inputs.iter().map(|input| self.check(input)).collect()
    }
}

// ============================================================================
// OUTCOME LOGGING
// ============================================================================

/// Emits the log event for a finished check and passes the result through.
pub(crate) fn log_outcome<T: std::fmt::Debug>(
    rule: &str,
    result: CheckResult<T>,
) -> CheckResult<T> {
    match &result {
        Ok(output) => tracing::trace!(rule, result = ?output, "numbers check passed"),
        Err(error) => tracing::debug!(rule, %error, "numbers check rejected input"),
    }
    result
}

// ============================================================================
// TESTS
// ============================================================================
