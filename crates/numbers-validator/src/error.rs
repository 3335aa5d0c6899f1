//! Error types for numbers checks
//!
//! Every failure carries the rendered offending input and formats to a fixed
//! message template. Callers match on [`ErrorKind`] to tell a wrong runtime
//! type apart from a value that is out of range.

use std::fmt;

use serde_json::json;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Coarse classification of a [`NumbersError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The argument's runtime type is not the expected number or array shape.
    TypeMismatch,
    /// The argument is numeric but outside the accepted range.
    DomainError,
}

impl ErrorKind {
    /// Stable snake_case code for programmatic handling.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::DomainError => "domain_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch => f.write_str("TypeMismatch"),
            Self::DomainError => f.write_str("DomainError"),
        }
    }
}

// ============================================================================
// NUMBERS ERROR
// ============================================================================

/// A failed numbers check.
///
/// `value` fields hold the input already rendered the way it appears inside
/// the brackets of the message (see [`crate::value::render`]).
///
/// # Examples
///
/// ```
/// use numbers_validator::{ErrorKind, NumbersValidator};
/// use serde_json::json;
///
/// let err = NumbersValidator::new().is_number_even(&json!(0)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DomainError);
/// assert_eq!(err.to_string(), "[0] is too low, Provide a number above 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum NumbersError {
    /// A number was required; the message names the actual runtime type.
    #[error("[{value}] is not of type \"Number\" it is of type \"{actual}\"")]
    NotOfTypeNumber {
        value: String,
        actual: &'static str,
    },

    /// A number was required.
    #[error("[{value}] is not a number")]
    NotANumber { value: String },

    /// An array was required.
    #[error("[{value}] is not an array")]
    NotAnArray { value: String },

    /// An array whose every element is a number was required.
    #[error("[{value}] is not an array of \"Numbers\"")]
    NotAnArrayOfNumbers { value: String },

    /// The number must be strictly positive.
    #[error("[{value}] is too low, Provide a number above 0")]
    TooLow { value: String },
}

impl NumbersError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotOfTypeNumber { .. }
            | Self::NotANumber { .. }
            | Self::NotAnArray { .. }
            | Self::NotAnArrayOfNumbers { .. } => ErrorKind::TypeMismatch,
            Self::TooLow { .. } => ErrorKind::DomainError,
        }
    }

    /// Shorthand for `self.kind().code()`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// The offending input as rendered in the message.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::NotOfTypeNumber { value, .. }
            | Self::NotANumber { value }
            | Self::NotAnArray { value }
            | Self::NotAnArrayOfNumbers { value }
            | Self::TooLow { value } => value,
        }
    }

    /// Returns true for [`ErrorKind::TypeMismatch`] errors.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), ErrorKind::TypeMismatch)
    }

    /// Returns true for [`ErrorKind::DomainError`] errors.
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::DomainError)
    }

    /// Converts the error to a JSON structure for reporting.
    pub fn to_json_value(&self) -> serde_json::Value {
        json!({
            "code": self.code(),
            "kind": self.kind().to_string(),
            "message": self.to_string(),
            "value": self.value(),
        })
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl NumbersError {
    pub(crate) fn not_of_type_number(value: &serde_json::Value) -> Self {
        Self::NotOfTypeNumber {
            value: crate::value::render(value),
            actual: crate::value::type_name(value),
        }
    }

    pub(crate) fn not_a_number(value: &serde_json::Value) -> Self {
        Self::NotANumber {
            value: crate::value::render(value),
        }
    }

    pub(crate) fn not_an_array(value: &serde_json::Value) -> Self {
        Self::NotAnArray {
            value: crate::value::render(value),
        }
    }

    pub(crate) fn not_an_array_of_numbers(value: &serde_json::Value) -> Self {
        Self::NotAnArrayOfNumbers {
            value: crate::value::render(value),
        }
    }

    pub(crate) fn too_low(value: &serde_json::Value) -> Self {
        Self::TooLow {
            value: crate::value::render(value),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
