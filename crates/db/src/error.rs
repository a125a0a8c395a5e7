//! Storage failure classification.

/// Postgres SQLSTATE raised when `statement_timeout` cancels a query.
const QUERY_CANCELED: &str = "57014";

/// A failed database operation, split by whether it ran out of time.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Pool acquisition or statement execution exceeded its timeout.
    #[error("database operation timed out: {0}")]
    Timeout(#[source] sqlx::Error),

    /// Any other connectivity, syntax or constraint failure.
    #[error("database error: {0}")]
    Query(#[source] sqlx::Error),
}

impl StorageError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if is_timeout(&err) {
            Self::Timeout(err)
        } else {
            Self::Query(err)
        }
    }
}

/// Whether a sqlx error means the operation ran out of time.
pub fn is_timeout(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::PoolTimedOut => true,
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(QUERY_CANCELED),
        sqlx::Error::Io(io_err) => io_err.kind() == std::io::ErrorKind::TimedOut,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn pool_timeout_is_timeout() {
        assert_matches!(
            StorageError::from(sqlx::Error::PoolTimedOut),
            StorageError::Timeout(_)
        );
    }

    #[test]
    fn io_timeout_is_timeout() {
        let err = sqlx::Error::Io(std::io::Error::new(std::io::ErrorKind::TimedOut, "slow"));
        assert!(StorageError::from(err).is_timeout());
    }

    #[test]
    fn row_not_found_is_query_error() {
        assert_matches!(
            StorageError::from(sqlx::Error::RowNotFound),
            StorageError::Query(_)
        );
    }

    #[test]
    fn closed_pool_is_query_error() {
        assert!(!StorageError::from(sqlx::Error::PoolClosed).is_timeout());
    }
}
