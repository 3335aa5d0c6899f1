//! Runtime type names and string rendering for dynamic values.
//!
//! Messages embed the offending input the way a dynamically typed host
//! coerces it to a string: strings bare, arrays comma-joined, integral
//! numbers without a fractional part.

use serde_json::{Number, Value};

/// Returns the runtime type name of a value, `typeof`-style.
///
/// Arrays and null report `"object"`, matching the host convention the
/// message templates were written against.
///
/// # Examples
///
/// ```
/// use numbers_validator::value::type_name;
/// use serde_json::json;
///
/// assert_eq!(type_name(&json!("5")), "string");
/// assert_eq!(type_name(&json!(5)), "number");
/// assert_eq!(type_name(&json!([5])), "object");
/// ```
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
    }
}

/// Renders a value as it appears between the brackets of an error message.
///
/// # Examples
///
/// ```
/// use numbers_validator::value::render;
/// use serde_json::json;
///
/// assert_eq!(render(&json!("not an array")), "not an array");
/// assert_eq!(render(&json!([1, 2, "x", 4])), "1,2,x,4");
/// assert_eq!(render(&json!(4.0)), "4");
/// ```
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        other => render_element(other),
    }
}

// Null inside an array joins as the empty string.
fn render_element(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_element)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

fn render_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_owned(),
        Some(f) if f.abs() < 1e-6 || f.abs() >= 1e21 => exponent_form(f),
        // Shortest round-trip digits, no exponent, no trailing `.0`.
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

// `1e+21`, `-1.5e-7`: shortest digits with an explicitly signed exponent.
fn exponent_form(f: f64) -> String {
    let formatted = format!("{f:e}");
    match formatted.split_once('e') {
        Some((digits, exp)) if !exp.starts_with('-') => format!("{digits}e+{exp}"),
        _ => formatted,
    }
}

// ============================================================================
// NUMERIC PREDICATES
// ============================================================================

/// Exact for integers; `f64` remainder otherwise.
pub(crate) fn is_even(n: &Number) -> bool {
    if let Some(i) = n.as_i64() {
        i % 2 == 0
    } else if let Some(u) = n.as_u64() {
        u % 2 == 0
    } else {
        n.as_f64().is_some_and(|f| f % 2.0 == 0.0)
    }
}

pub(crate) fn is_integral(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        true
    } else {
        n.as_f64().is_some_and(|f| f.fract() == 0.0)
    }
}

pub(crate) fn is_positive(n: &Number) -> bool {
    if let Some(i) = n.as_i64() {
        i > 0
    } else if let Some(u) = n.as_u64() {
        u > 0
    } else {
        n.as_f64().is_some_and(|f| f > 0.0)
    }
}
