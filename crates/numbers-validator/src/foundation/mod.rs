//! Core check types and traits
//!
//! - **Trait**: [`Check`], implemented by every rule
//! - **Errors**: [`NumbersError`], [`ErrorKind`]
//!
//! Rules are generic over nothing: every input is a dynamic
//! [`serde_json::Value`], and the type guard is part of the check itself.
//!
//! ```
//! use numbers_validator::foundation::{check_value, Check};
//! use numbers_validator::rules::is_integer;
//! use serde_json::json;
//!
//! assert_eq!(check_value(&json!(5), &is_integer()), Ok(true));
//! assert!(is_integer().check(&json!("x")).is_err());
//! ```

pub mod traits;

pub use crate::error::{ErrorKind, NumbersError};
pub use traits::Check;
pub(crate) use traits::log_outcome;

/// Runs a single check against a value.
///
/// Convenience for one-off calls where the rule is held by reference.
pub fn check_value<C>(value: &serde_json::Value, rule: &C) -> CheckResult<C::Output>
where
    C: Check + ?Sized,
{
    rule.check(value)
}

/// A check result using [`NumbersError`].
pub type CheckResult<T> = Result<T, NumbersError>;
