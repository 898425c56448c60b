use async_trait::async_trait;
use std::path::PathBuf;

use crate::storage::errors::StorageError;

pub(crate) struct InMemoryCredentialStore {
    pub(super) slot: Option<String>,
}

pub(crate) struct FileCredentialStore {
    pub(super) path: PathBuf,
}

// Trait
#[async_trait]
pub(crate) trait CredentialStore: Send + Sync + 'static {
    /// Initialize the store. This is called when the store is created.
    async fn init(&self) -> Result<(), StorageError>;

    /// Persist the credential, overwriting any prior value.
    async fn save(&mut self, credential: &str) -> Result<(), StorageError>;

    /// Return the stored credential, or None when the slot is empty.
    async fn load(&self) -> Result<Option<String>, StorageError>;

    /// Remove the credential unconditionally.
    async fn clear(&mut self) -> Result<(), StorageError>;
}
