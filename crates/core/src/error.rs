use crate::types::DbId;

/// Domain-level failures.
///
/// The `Display` text of the not-found variants is the exact message the
/// HTTP layer returns to clients, so keep it stable.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Mouza not found")]
    MouzaNotFound { name: String },

    #[error("Classification not found for this mouza")]
    ClassificationNotFound { mouza_id: DbId },

    #[error("City not found")]
    CityNotFound { name: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
