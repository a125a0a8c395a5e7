#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use khasra_core::catalog::CityCatalog;
use sqlx::PgPool;
use tower::ServiceExt;

use khasra_api::config::ServerConfig;
use khasra_api::router::build_app_router;
use khasra_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and `lahore` as the only city table.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        city_tables: vec!["lahore".to_string()],
        json_logs: false,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery) that
/// production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Same as [`build_test_app`] with a caller-supplied configuration.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let catalog = CityCatalog::new(&config.city_tables).unwrap();

    let state = AppState {
        pool,
        catalog: Arc::new(catalog),
    };

    build_app_router(state, &config)
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

pub async fn insert_mouza(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO mouzas (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_classification(pool: &PgPool, mouza_id: i64, name: &str, value: f64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO land_classifications (mouza_id, name, value_per_sq_meter) \
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(mouza_id)
    .bind(name)
    .bind(value)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_exact(pool: &PgPool, classification_id: i64, khasra: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO khasra_numbers (classification_id, is_range, khasra_number) \
         VALUES ($1, false, $2) RETURNING id",
    )
    .bind(classification_id)
    .bind(khasra)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_range(pool: &PgPool, classification_id: i64, start: i64, end: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO khasra_numbers (classification_id, is_range, range_start, range_end) \
         VALUES ($1, true, $2, $3) RETURNING id",
    )
    .bind(classification_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Create and fill the externally managed `lahore` property table.
pub async fn create_lahore(pool: &PgPool) {
    sqlx::query(
        "CREATE TABLE lahore ( \
            id BIGSERIAL PRIMARY KEY, \
            location TEXT NOT NULL, \
            size_sq_yard INTEGER NOT NULL, \
            value_per_sq_meter NUMERIC(12, 2) NOT NULL)",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO lahore (location, size_sq_yard, value_per_sq_meter) VALUES \
            ('Model Town', 500, 12000.50), \
            ('Model Town', 1000, 11000), \
            ('Gulberg', 500, 15000)",
    )
    .execute(pool)
    .await
    .unwrap();
}
