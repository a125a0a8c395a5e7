//! Handler for the khasra valuation lookup.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use khasra_core::khasra::ParcelNumber;
use khasra_db::resolver::KhasraResolver;

use crate::error::{AppError, AppResult};
use crate::query::{require, KhasraValueParams};
use crate::response::DataResponse;
use crate::state::AppState;

const CONTEXT: &str = "Error fetching khasra value";

/// GET /get-kharsa-value?khasraNumber=&location=
///
/// Resolve a khasra number within a mouza. Responds with every matching
/// khasra record, 404 for an unknown mouza or a mouza without
/// classifications. Missing parameters and storage failures are both a 500
/// carrying the context message.
pub async fn get_khasra_value(
    State(state): State<AppState>,
    Query(params): Query<KhasraValueParams>,
) -> AppResult<impl IntoResponse> {
    let parcel = ParcelNumber::parse(params.khasra_number.as_deref().unwrap_or_default())
        .map_err(AppError::invalid_input(CONTEXT))?;
    let mouza = require(params.location, "location").map_err(AppError::invalid_input(CONTEXT))?;

    let records = KhasraResolver::resolve(&state.pool, &parcel, &mouza)
        .await
        .map_err(|e| AppError::from_resolve(CONTEXT, e))?;

    Ok(Json(DataResponse::ok(records)))
}
