use std::sync::Arc;

use khasra_core::catalog::CityCatalog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened at startup and closed at shutdown.
    pub pool: khasra_db::DbPool,
    /// Allow-list of city tables the city endpoints may read.
    pub catalog: Arc<CityCatalog>,
}
