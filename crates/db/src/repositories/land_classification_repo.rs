//! Repository for the `land_classifications` table.

use khasra_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::land_classification::{ClassificationValue, LandClassification};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, mouza_id, name, value_per_sq_meter::float8 AS value_per_sq_meter, \
                       created_at, updated_at";

/// Read access to land classifications.
pub struct LandClassificationRepo;

impl LandClassificationRepo {
    /// Ids of every classification belonging to a mouza, in storage order.
    pub async fn list_ids_for_mouza<'e, E>(
        executor: E,
        mouza_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM land_classifications WHERE mouza_id = $1")
            .bind(mouza_id)
            .fetch_all(executor)
            .await
    }

    /// Every classification belonging to a mouza, ordered by name.
    pub async fn list_for_mouza(
        pool: &PgPool,
        mouza_id: DbId,
    ) -> Result<Vec<LandClassification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM land_classifications WHERE mouza_id = $1 ORDER BY name, id"
        );
        sqlx::query_as::<_, LandClassification>(&query)
            .bind(mouza_id)
            .fetch_all(pool)
            .await
    }

    /// The per-square-meter value of one classification, as a row list.
    ///
    /// Empty when no classification has this id.
    pub async fn value_rows_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Vec<ClassificationValue>, sqlx::Error> {
        sqlx::query_as::<_, ClassificationValue>(
            "SELECT value_per_sq_meter::float8 AS value_per_sq_meter \
             FROM land_classifications WHERE id = $1",
        )
        .bind(id)
        .fetch_all(pool)
        .await
    }
}
