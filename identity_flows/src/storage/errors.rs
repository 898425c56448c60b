use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<StorageError>();
    }

    #[test]
    fn test_error_display() {
        let err = StorageError::Storage("slot unavailable".to_string());
        assert_eq!(err.to_string(), "Storage error: slot unavailable");

        let err = StorageError::Io("permission denied".to_string());
        assert_eq!(err.to_string(), "I/O error: permission denied");
    }
}
