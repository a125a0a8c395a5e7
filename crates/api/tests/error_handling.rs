//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests call `IntoResponse` directly on `AppError` values and do not
//! need a database or an HTTP server.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use khasra_api::error::AppError;
use khasra_core::error::CoreError;
use khasra_db::error::StorageError;
use khasra_db::resolver::ResolveError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: not-found variants map to 404 with their fixed messages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mouza_not_found_returns_404() {
    let err = AppError::Core(CoreError::MouzaNotFound {
        name: "Beta".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "MOUZA_NOT_FOUND");
    assert_eq!(json["message"], "Mouza not found");
}

#[tokio::test]
async fn classification_not_found_returns_404() {
    let err = AppError::Core(CoreError::ClassificationNotFound { mouza_id: 9 });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "CLASSIFICATION_NOT_FOUND");
    assert_eq!(json["message"], "Classification not found for this mouza");
}

#[tokio::test]
async fn city_not_found_returns_404() {
    let err = AppError::Core(CoreError::CityNotFound {
        name: "karachi".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "CITY_NOT_FOUND");
    assert_eq!(json["message"], "City not found");
}

// ---------------------------------------------------------------------------
// Test: validation maps to 400 with the bare message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("location is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "location is required");
}

// ---------------------------------------------------------------------------
// Test: storage failures map to 500 and only expose the context message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn storage_error_returns_500_and_sanitizes_message() {
    let err = AppError::storage("Error fetching city data")(sqlx::Error::Protocol(
        "relation \"secret_table\" does not exist".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert_eq!(json["message"], "Error fetching city data");
    assert!(!json.to_string().contains("secret_table"));
}

#[tokio::test]
async fn pool_timeout_returns_500_with_timeout_code() {
    let err = AppError::storage("Error fetching property size")(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORAGE_TIMEOUT");
    assert_eq!(json["message"], "Error fetching property size");
}

// ---------------------------------------------------------------------------
// Test: resolver failures keep domain and storage errors apart
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolver_domain_error_keeps_its_status() {
    let err = AppError::from_resolve(
        "Error fetching khasra value",
        ResolveError::Domain(CoreError::MouzaNotFound {
            name: "Beta".into(),
        }),
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Mouza not found");
}

#[tokio::test]
async fn resolver_storage_error_uses_handler_context() {
    let err = AppError::from_resolve(
        "Error fetching khasra value",
        ResolveError::Storage(StorageError::from(sqlx::Error::PoolClosed)),
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert_eq!(json["message"], "Error fetching khasra value");
}

// ---------------------------------------------------------------------------
// Test: invalid input on the khasra lookup maps to 500 with the context only
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_input_returns_500_with_context_message() {
    let err = AppError::invalid_input("Error fetching khasra value")(CoreError::Validation(
        "location is required".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INVALID_INPUT");
    assert_eq!(json["message"], "Error fetching khasra value");
}
