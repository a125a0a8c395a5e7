//! Handlers for mouza-scoped reference data.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use khasra_core::error::CoreError;
use khasra_db::repositories::{LandClassificationRepo, MouzaRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

const CONTEXT: &str = "Error fetching classifications";

/// GET /get-classifications/{mouza}
///
/// List a mouza's land classifications. The ids returned here are what the
/// property-value lookup expects as `location` when `cityName=mouzas`.
pub async fn list_classifications(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mouza = MouzaRepo::find_by_name(&state.pool, &name)
        .await
        .map_err(AppError::storage(CONTEXT))?
        .ok_or_else(|| CoreError::MouzaNotFound { name: name.clone() })?;

    let classifications = LandClassificationRepo::list_for_mouza(&state.pool, mouza.id)
        .await
        .map_err(AppError::storage(CONTEXT))?;

    Ok(Json(DataResponse::ok(classifications)))
}
