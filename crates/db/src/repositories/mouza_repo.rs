//! Repository for the `mouzas` table.

use khasra_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::mouza::Mouza;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Read access to mouzas.
pub struct MouzaRepo;

impl MouzaRepo {
    /// Find a mouza by exact name.
    ///
    /// Comparison is the store's native text equality; callers pass
    /// normalized names.
    pub async fn find_by_name<'e, E>(executor: E, name: &str) -> Result<Option<Mouza>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM mouzas WHERE name = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Mouza>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// Find a mouza's id by exact name.
    pub async fn find_id_by_name<'e, E>(executor: E, name: &str) -> Result<Option<DbId>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM mouzas WHERE name = $1 ORDER BY id LIMIT 1")
            .bind(name)
            .fetch_optional(executor)
            .await
    }
}
