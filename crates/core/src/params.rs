//! Helpers for reading typed scene parameters from a `serde_json::Value` object.
//!
//! Numeric helpers are lenient: a missing key or a value of the
//! wrong type yields the default. Colors are the exception, since a typo in a
//! hex string should be reported rather than silently replaced.

use crate::color::Srgb;
use crate::error::FxError;
use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// JSON integers are accepted and converted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only non-negative JSON integers are accepted.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a hex color from `params[name]`.
///
/// Missing or non-string values give `default`; a string that is not a valid
/// `#rrggbb` color is an `FxError::InvalidColor`.
pub fn param_color(params: &Value, name: &str, default: Srgb) -> Result<Srgb, FxError> {
    match params.get(name).and_then(Value::as_str) {
        Some(hex) => Srgb::from_hex(hex),
        None => Ok(default),
    }
}
