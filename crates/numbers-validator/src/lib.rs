//! # numbers-validator
//!
//! Type-guarded parity, integer and numeric-array checks over dynamic values.
//!
//! ## Quick Start
//!
//! ```rust
//! use numbers_validator::NumbersValidator;
//! use serde_json::{json, Number};
//!
//! let validator = NumbersValidator::new();
//!
//! assert_eq!(validator.is_number_even(&json!(4)), Ok(true));
//! assert_eq!(validator.is_all_numbers(&json!([1, "x", 3])), Ok(false));
//! assert_eq!(
//!     validator.get_even_numbers_from_array(&json!([1, 2, 3, 4, 5, 6])),
//!     Ok(vec![Number::from(2), Number::from(4), Number::from(6)]),
//! );
//! ```
//!
//! ## Errors
//!
//! Every operation returns `Result<_, NumbersError>`. The error's `Display`
//! is a fixed message such as `[0] is too low, Provide a number above 0`,
//! and [`NumbersError::kind`] tells a
//! [`TypeMismatch`](ErrorKind::TypeMismatch) apart from a
//! [`DomainError`](ErrorKind::DomainError).
//!
//! ## Built-in Rules
//!
//! - **Parity**: [`IsNumberEven`](rules::IsNumberEven), [`EvenNumbers`](rules::EvenNumbers)
//! - **Integer**: [`IsInteger`](rules::IsInteger)
//! - **Collection**: [`IsAllNumbers`](rules::IsAllNumbers)

pub mod error;
pub mod foundation;
pub mod prelude;
pub mod rules;
pub mod validator;
pub mod value;

pub use error::{ErrorKind, NumbersError};
pub use validator::NumbersValidator;
