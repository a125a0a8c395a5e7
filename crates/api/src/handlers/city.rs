//! Handlers for the per-city property endpoints.
//!
//! The city in each request is resolved through the [`CityCatalog`] held in
//! state before any SQL is built. `mouzas` is a catalog entry of its own
//! whose values come from `land_classifications`.
//!
//! [`CityCatalog`]: khasra_core::catalog::CityCatalog

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use khasra_core::catalog::CityKind;
use khasra_core::error::CoreError;
use khasra_core::types::DbId;
use khasra_db::repositories::{CityPropertyRepo, LandClassificationRepo};

use crate::error::{AppError, AppResult};
use crate::query::{require, PropertyValueParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /get-city-data/{city}
///
/// List the location labels of a city (`name` for `mouzas`, `location`
/// otherwise).
pub async fn get_city_data(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<impl IntoResponse> {
    let table = state.catalog.lookup(&city)?;

    let rows = CityPropertyRepo::list_locations(&state.pool, table)
        .await
        .map_err(AppError::storage("Error fetching city data"))?;

    tracing::debug!(city = table.name(), count = rows.len(), "Listed city locations");

    Ok(Json(DataResponse::ok(rows)))
}

/// GET /get-property-size/{city}/{location}
///
/// List the plot sizes recorded at a location.
pub async fn get_property_size(
    State(state): State<AppState>,
    Path((city, location)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let table = state.catalog.lookup(&city)?;
    if table.kind() == CityKind::Mouzas {
        return Err(CoreError::Validation(
            "Property sizes are not recorded for mouzas".to_string(),
        )
        .into());
    }

    let rows = CityPropertyRepo::list_sizes(&state.pool, table, &location)
        .await
        .map_err(AppError::storage("Error fetching property size"))?;

    Ok(Json(DataResponse::ok(rows)))
}

/// GET /get-property-value?cityName=&location=&size=
///
/// For `mouzas`, `location` is a land classification id and the value comes
/// from that classification. For any other city, rows are matched on
/// location and plot size.
pub async fn get_property_value(
    State(state): State<AppState>,
    Query(params): Query<PropertyValueParams>,
) -> AppResult<Response> {
    const CONTEXT: &str = "Error fetching property value";

    let city = require(params.city_name, "cityName")?;
    let location = require(params.location, "location")?;
    let table = state.catalog.lookup(&city)?;

    match table.kind() {
        CityKind::Mouzas => {
            let classification_id: DbId = location.trim().parse().map_err(|_| {
                CoreError::Validation(format!(
                    "location must be a classification id for mouzas (got '{location}')"
                ))
            })?;
            let rows = LandClassificationRepo::value_rows_by_id(&state.pool, classification_id)
                .await
                .map_err(AppError::storage(CONTEXT))?;
            Ok(Json(DataResponse::ok(rows)).into_response())
        }
        CityKind::PropertyTable => {
            let size = require(params.size, "size")?;
            let rows = CityPropertyRepo::list_values(&state.pool, table, &location, &size)
                .await
                .map_err(AppError::storage(CONTEXT))?;
            Ok(Json(DataResponse::ok(rows)).into_response())
        }
    }
}
