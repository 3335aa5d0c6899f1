//! Prelude module for convenient imports.
//!
//! `use numbers_validator::prelude::*;` brings in the facade, the `Check`
//! trait, the error types and every rule factory.

pub use crate::NumbersValidator;
pub use crate::foundation::{Check, CheckResult, ErrorKind, NumbersError, check_value};

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;
