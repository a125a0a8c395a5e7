pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{city, khasra, mouza, schema};
use crate::state::AppState;

/// Build the land-record route tree.
///
/// The same tree is mounted at the root and under `/api`.
///
/// ```text
/// /set-database/{schema}                      base tables of a schema
/// /get-city-data/{city}                       location labels of a city
/// /get-property-size/{city}/{location}        plot sizes at a location
/// /get-property-value?cityName&location&size  per-square-meter values
/// /get-kharsa-value?khasraNumber&location     khasra lookup within a mouza
/// /get-classifications/{mouza}                land classifications of a mouza
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/set-database/{schema}", get(schema::list_tables))
        .route("/get-city-data/{city}", get(city::get_city_data))
        .route(
            "/get-property-size/{city}/{location}",
            get(city::get_property_size),
        )
        .route("/get-property-value", get(city::get_property_value))
        .route("/get-kharsa-value", get(khasra::get_khasra_value))
        .route(
            "/get-classifications/{mouza}",
            get(mouza::list_classifications),
        )
}
