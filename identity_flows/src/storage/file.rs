use async_trait::async_trait;
use std::path::PathBuf;

use crate::storage::errors::StorageError;

use super::types::{CredentialStore, FileCredentialStore};

impl FileCredentialStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        tracing::info!("Creating file credential store at {}", path.display());
        Self { path }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn init(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::Io(e.to_string()))?;
            }
        }
        Ok(())
    }

    async fn save(&mut self, credential: &str) -> Result<(), StorageError> {
        tokio::fs::write(&self.path, credential)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    async fn load(&self) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            // A credential is either present as a single whole string or
            // absent; whitespace-only remnants count as absent.
            Ok(contents) => {
                let credential = contents.trim();
                if credential.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(credential.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    async fn clear(&mut self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}
