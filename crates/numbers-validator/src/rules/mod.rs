//! Built-in rules
//!
//! One zero-sized [`Check`](crate::foundation::Check) type per operation,
//! each with a `const fn` factory.
//!
//! # Categories
//!
//! - **Parity**: [`IsNumberEven`], [`EvenNumbers`]
//! - **Integer**: [`IsInteger`]
//! - **Collection**: [`IsAllNumbers`]
//!
//! # Examples
//!
//! ```
//! use numbers_validator::prelude::*;
//! use serde_json::json;
//!
//! assert_eq!(is_number_even().check(&json!(8)), Ok(true));
//! assert_eq!(is_all_numbers().check(&json!([1, 2])), Ok(true));
//! ```

pub mod collection;
pub mod integer;
pub mod parity;

pub use collection::{IsAllNumbers, is_all_numbers};
pub use integer::{IsInteger, is_integer};
pub use parity::{EvenNumbers, IsNumberEven, even_numbers, is_number_even};
