use async_trait::async_trait;

use crate::storage::errors::StorageError;

use super::types::{CredentialStore, InMemoryCredentialStore};

impl InMemoryCredentialStore {
    pub(crate) fn new() -> Self {
        tracing::info!("Creating new in-memory credential store");
        Self { slot: None }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn init(&self) -> Result<(), StorageError> {
        Ok(()) // Nothing to initialize for in-memory store
    }

    async fn save(&mut self, credential: &str) -> Result<(), StorageError> {
        self.slot = Some(credential.to_string());
        Ok(())
    }

    async fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.clone())
    }

    async fn clear(&mut self) -> Result<(), StorageError> {
        self.slot = None;
        Ok(())
    }
}
