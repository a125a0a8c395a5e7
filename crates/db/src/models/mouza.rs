//! Mouza (village / revenue estate) model.

use khasra_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `mouzas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mouza {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
