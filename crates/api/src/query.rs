//! Query parameter types for API handlers.
//!
//! Fields are `Option` so a missing parameter reaches the handler and is
//! reported through [`require`] as a JSON validation error, rather than as
//! axum's plain-text extractor rejection.

use khasra_core::error::CoreError;
use serde::Deserialize;

/// `?khasraNumber=&location=` for the khasra lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KhasraValueParams {
    pub khasra_number: Option<String>,
    /// Mouza name.
    pub location: Option<String>,
}

/// `?cityName=&location=&size=` for the property value lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValueParams {
    pub city_name: Option<String>,
    /// A location label, or a classification id when `cityName` is `mouzas`.
    pub location: Option<String>,
    /// Plot size in square yards. Ignored for `mouzas`.
    pub size: Option<String>,
}

/// Unwrap a required parameter, rejecting absent or blank values.
///
/// The value is returned as given; only the emptiness check trims.
pub fn require(value: Option<String>, field: &'static str) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}
