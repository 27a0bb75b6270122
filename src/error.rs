/// Failures raised by a key-value backend. The journal never inspects these,
/// it only wraps them in [`AppError::StorageUnavailable`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    #[error("Malformed record under {key}: {reason}")]
    MalformedRecord { key: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Storage failures are the only errors worth retrying from the caller's side.
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::StorageUnavailable(_))
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_converts_to_storage_unavailable() {
        let err: AppError = StorageError::Database(sqlx::Error::PoolClosed).into();
        assert!(err.is_storage());
        assert!(err.to_string().starts_with("Storage unavailable"));
    }

    #[test]
    fn test_malformed_record_message_names_key() {
        let err = AppError::MalformedRecord {
            key: "mood-2024-03-01".into(),
            reason: "expected value".into(),
        };
        assert!(!err.is_storage());
        assert_eq!(
            err.to_string(),
            "Malformed record under mood-2024-03-01: expected value"
        );
    }
}
