//! Shared response envelope types for API handlers.
//!
//! Successful responses carry `"message": true` next to their payload; error
//! responses carry a string `message` instead (see [`crate::error`]).

use serde::Serialize;

/// Standard `{ "message": true, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::ok(rows)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub message: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            message: true,
            data,
        }
    }
}

/// `{ "message": true, "tables": [...] }` returned by the schema listing.
#[derive(Debug, Serialize)]
pub struct TablesResponse {
    pub message: bool,
    pub tables: Vec<String>,
}

/// Plain `{ "message": "..." }` body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
