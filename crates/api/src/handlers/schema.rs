//! Handler for schema table listing.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use khasra_core::catalog::validate_identifier;
use khasra_db::repositories::SchemaRepo;

use crate::error::{AppError, AppResult};
use crate::response::TablesResponse;
use crate::state::AppState;

const CONTEXT: &str = "Error setting database";

/// GET /set-database/{schema}
///
/// List the base tables of a schema. The schema name is only ever bound as a
/// parameter; the connection's `search_path` is left untouched.
pub async fn list_tables(
    State(state): State<AppState>,
    Path(schema): Path<String>,
) -> AppResult<impl IntoResponse> {
    validate_identifier(&schema)?;

    let tables = SchemaRepo::list_base_tables(&state.pool, &schema)
        .await
        .map_err(AppError::storage(CONTEXT))?;

    tracing::debug!(%schema, count = tables.len(), "Listed schema tables");

    Ok(Json(TablesResponse {
        message: true,
        tables,
    }))
}
