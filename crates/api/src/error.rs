use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use khasra_core::error::CoreError;
use khasra_db::error::StorageError;
use khasra_db::resolver::ResolveError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StorageError`] for database
/// failures. Storage failures and [`AppError::InvalidInput`] both map to 500
/// and expose only their context message. Implements [`IntoResponse`] to produce consistent
/// `{ "message": ..., "code": ... }` JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `khasra_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Missing or malformed input on an endpoint that reports it as a
    /// failure of the lookup itself. `context` is the only text the client
    /// sees.
    #[error("{context}: {source}")]
    InvalidInput {
        context: &'static str,
        #[source]
        source: CoreError,
    },

    /// A database failure. `context` is the only text the client sees.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: StorageError,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a `map_err` adapter that tags a sqlx error with a client-facing
    /// context message.
    ///
    /// ```ignore
    /// let rows = Repo::list(&state.pool).await.map_err(AppError::storage("Error fetching rows"))?;
    /// ```
    pub fn storage(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |err| AppError::Storage {
            context,
            source: StorageError::from(err),
        }
    }

    /// Build a `map_err` adapter that reports a validation failure as a
    /// 500 carrying `context`.
    pub fn invalid_input(context: &'static str) -> impl FnOnce(CoreError) -> AppError {
        move |source| AppError::InvalidInput { context, source }
    }

    /// Convert a resolver failure, keeping domain failures distinct from
    /// storage failures.
    pub fn from_resolve(context: &'static str, err: ResolveError) -> AppError {
        match err {
            ResolveError::Domain(core) => AppError::Core(core),
            ResolveError::Storage(source) => AppError::Storage { context, source },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::MouzaNotFound { name } => {
                    tracing::debug!(mouza = %name, "Mouza not found");
                    (StatusCode::NOT_FOUND, "MOUZA_NOT_FOUND", core.to_string())
                }
                CoreError::ClassificationNotFound { mouza_id } => {
                    tracing::debug!(mouza_id, "Mouza has no classifications");
                    (
                        StatusCode::NOT_FOUND,
                        "CLASSIFICATION_NOT_FOUND",
                        core.to_string(),
                    )
                }
                CoreError::CityNotFound { name } => {
                    tracing::debug!(city = %name, "City not in catalog");
                    (StatusCode::NOT_FOUND, "CITY_NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            AppError::InvalidInput { context, source } => {
                tracing::warn!(error = %source, context, "Invalid input");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INVALID_INPUT",
                    context.to_string(),
                )
            }

            // --- Database errors ---
            AppError::Storage { context, source } => {
                tracing::error!(error = %source, context, "Storage error");
                let code = if source.is_timeout() {
                    "STORAGE_TIMEOUT"
                } else {
                    "STORAGE_ERROR"
                };
                (StatusCode::INTERNAL_SERVER_ERROR, code, context.to_string())
            }
        };

        let body = json!({
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
