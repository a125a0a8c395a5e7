//! Repository for the per-city property tables.
//!
//! These tables are externally managed and their column types vary between
//! cities, so rows come back as JSON objects built by Postgres rather than
//! as typed structs. Table names only ever come from a [`CityTable`], which
//! has already been validated against the catalog.

use khasra_core::catalog::CityTable;
use serde_json::Value;
use sqlx::PgPool;

/// Read access to city property tables (and the label column of `mouzas`).
pub struct CityPropertyRepo;

impl CityPropertyRepo {
    /// The location label of every row, as `{ "<label column>": ... }`.
    ///
    /// `mouzas` exposes `name`; property tables expose `location`.
    pub async fn list_locations(pool: &PgPool, table: &CityTable) -> Result<Vec<Value>, sqlx::Error> {
        let column = table.kind().label_column();
        let query = format!(
            "SELECT jsonb_build_object('{column}', {column}) FROM {}",
            table.quoted()
        );
        sqlx::query_scalar::<_, Value>(&query).fetch_all(pool).await
    }

    /// Plot sizes recorded at a location, as `{ "size_sq_yard": ... }`.
    pub async fn list_sizes(
        pool: &PgPool,
        table: &CityTable,
        location: &str,
    ) -> Result<Vec<Value>, sqlx::Error> {
        let query = format!(
            "SELECT jsonb_build_object('size_sq_yard', size_sq_yard) FROM {} \
             WHERE location = $1",
            table.quoted()
        );
        sqlx::query_scalar::<_, Value>(&query)
            .bind(location)
            .fetch_all(pool)
            .await
    }

    /// Per-square-meter values for a location and plot size, as
    /// `{ "value_per_sq_meter": ... }`.
    ///
    /// `size` is compared against the text form of `size_sq_yard` so the
    /// bound parameter works whatever numeric type the city table uses.
    pub async fn list_values(
        pool: &PgPool,
        table: &CityTable,
        location: &str,
        size: &str,
    ) -> Result<Vec<Value>, sqlx::Error> {
        let query = format!(
            "SELECT jsonb_build_object('value_per_sq_meter', value_per_sq_meter) FROM {} \
             WHERE location = $1 AND size_sq_yard::text = $2",
            table.quoted()
        );
        sqlx::query_scalar::<_, Value>(&query)
            .bind(location)
            .bind(size)
            .fetch_all(pool)
            .await
    }
}
