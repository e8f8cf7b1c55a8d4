//! Store error types.

use anvaya_client::StorageError;
use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A setting value failed validation.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Setting name.
        key: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

impl StoreError {
    /// Returns true if the error means the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<StoreError> for StorageError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(e) => StorageError::Io(e),
            StoreError::Serialization(e) => StorageError::Serialization(e),
            other => StorageError::Io(std::io::Error::other(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        let err = StoreError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert!(!StoreError::Config("x".into()).is_not_found());
    }

    #[test]
    fn test_into_storage_error() {
        let err: StorageError = StoreError::Config("bad".into()).into();
        assert!(matches!(err, StorageError::Io(_)));
        assert!(err.to_string().contains("bad"));
    }
}
