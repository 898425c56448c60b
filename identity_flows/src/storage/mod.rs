mod config;
mod errors;
mod file;
mod memory;
mod types;

pub use errors::StorageError;

use config::CREDENTIAL_STORE;

pub async fn init() -> Result<(), StorageError> {
    let store = CREDENTIAL_STORE.lock().await;
    store.init().await
}

/// Persist the bearer credential, overwriting any prior value.
pub async fn save_credential(credential: &str) -> Result<(), StorageError> {
    CREDENTIAL_STORE.lock().await.save(credential).await
}

/// Read the stored bearer credential.
///
/// The store is the single source of truth for "is a credential present".
/// Backend failures are logged and reported as absent, never propagated.
pub async fn load_credential() -> Option<String> {
    match CREDENTIAL_STORE.lock().await.load().await {
        Ok(credential) => credential,
        Err(e) => {
            tracing::warn!("Failed to read stored credential: {}", e);
            None
        }
    }
}

/// Remove the stored credential unconditionally.
pub async fn clear_credential() -> Result<(), StorageError> {
    CREDENTIAL_STORE.lock().await.clear().await
}
