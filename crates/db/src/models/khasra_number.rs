//! Khasra (cadastral parcel) number model.

use khasra_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `khasra_numbers` table.
///
/// Exactly one representation is populated, gated by `is_range`:
/// `khasra_number` for single parcels, `range_start..=range_end` for ranges.
/// The table's check constraint enforces this.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KhasraNumber {
    pub id: DbId,
    pub classification_id: DbId,
    pub is_range: bool,
    pub khasra_number: Option<String>,
    pub range_start: Option<i64>,
    pub range_end: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
