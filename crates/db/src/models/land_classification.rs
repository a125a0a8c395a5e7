//! Land classification model.
//!
//! A classification is a valuation category scoped to exactly one mouza
//! (e.g. "Residential", "Commercial", "Agricultural - Chahi").

use khasra_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `land_classifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LandClassification {
    pub id: DbId,
    pub mouza_id: DbId,
    pub name: String,
    pub value_per_sq_meter: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The value projection returned by the property-value endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassificationValue {
    pub value_per_sq_meter: f64,
}
