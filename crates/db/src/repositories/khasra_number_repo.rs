//! Repository for the `khasra_numbers` table.

use khasra_core::khasra::ParcelNumber;
use khasra_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::khasra_number::KhasraNumber;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, classification_id, is_range, khasra_number, range_start, range_end, \
                       created_at, updated_at";

/// Read access to khasra numbers.
pub struct KhasraNumberRepo;

impl KhasraNumberRepo {
    /// Khasra records within `classification_ids` that match `parcel`.
    ///
    /// Exact records match on text equality. Range records match when the
    /// parcel's integer form lies in `[range_start, range_end]`; a parcel with
    /// no integer form binds `NULL` and so never matches a range.
    pub async fn find_matching<'e, E>(
        executor: E,
        parcel: &ParcelNumber,
        classification_ids: &[DbId],
    ) -> Result<Vec<KhasraNumber>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM khasra_numbers \
             WHERE classification_id = ANY($1) \
               AND ( \
                 (is_range = true AND $3::bigint IS NOT NULL \
                    AND range_start <= $3 AND range_end >= $3) \
                 OR \
                 (is_range = false AND khasra_number = $2) \
               ) \
             ORDER BY id"
        );
        sqlx::query_as::<_, KhasraNumber>(&query)
            .bind(classification_ids)
            .bind(parcel.as_text())
            .bind(parcel.numeric())
            .fetch_all(executor)
            .await
    }
}
