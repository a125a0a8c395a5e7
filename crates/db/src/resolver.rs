//! Khasra valuation resolver.
//!
//! Resolves a khasra number within a named mouza in three reads:
//!
//! ```text
//! mouza name --(mouzas)--> mouza id
//!            --(land_classifications)--> classification ids
//!            --(khasra_numbers)--> matching records
//! ```
//!
//! All three run on one pooled connection. The [`PoolConnection`] guard is
//! dropped on every exit path, so early returns and cancelled requests give
//! the connection back to the pool.
//!
//! [`PoolConnection`]: sqlx::pool::PoolConnection

use khasra_core::error::CoreError;
use khasra_core::khasra::ParcelNumber;

use crate::error::StorageError;
use crate::models::khasra_number::KhasraNumber;
use crate::repositories::{KhasraNumberRepo, LandClassificationRepo, MouzaRepo};
use crate::DbPool;

/// Why a resolution failed.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// `MouzaNotFound` or `ClassificationNotFound`.
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<sqlx::Error> for ResolveError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(StorageError::from(err))
    }
}

/// Stateless resolver over the land-record tables.
pub struct KhasraResolver;

impl KhasraResolver {
    /// Statements one resolution runs on its connection.
    pub const READS: u32 = 3;

    /// Resolve `parcel` within the mouza called `mouza_name`.
    ///
    /// Returns every matching khasra record (possibly none). Fails with
    /// [`CoreError::MouzaNotFound`] for an unknown mouza and
    /// [`CoreError::ClassificationNotFound`] for a mouza without
    /// classifications; later reads are skipped in both cases.
    pub async fn resolve(
        pool: &DbPool,
        parcel: &ParcelNumber,
        mouza_name: &str,
    ) -> Result<Vec<KhasraNumber>, ResolveError> {
        let mut conn = pool.acquire().await?;

        let mouza_id = MouzaRepo::find_id_by_name(&mut *conn, mouza_name)
            .await?
            .ok_or_else(|| CoreError::MouzaNotFound {
                name: mouza_name.to_string(),
            })?;

        let classification_ids =
            LandClassificationRepo::list_ids_for_mouza(&mut *conn, mouza_id).await?;
        if classification_ids.is_empty() {
            return Err(CoreError::ClassificationNotFound { mouza_id }.into());
        }

        let records =
            KhasraNumberRepo::find_matching(&mut *conn, parcel, &classification_ids).await?;

        tracing::debug!(
            mouza_id,
            %parcel,
            classifications = classification_ids.len(),
            matches = records.len(),
            "Resolved khasra number",
        );

        Ok(records)
    }
}
