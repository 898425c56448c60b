use std::{env, sync::LazyLock};
use tokio::sync::Mutex;

use super::types::{CredentialStore, FileCredentialStore, InMemoryCredentialStore};

pub(super) static CREDENTIAL_STORE_TYPE: LazyLock<String> = LazyLock::new(|| {
    env::var("CREDENTIAL_STORE_TYPE").unwrap_or_else(|_| "memory".to_string())
});

pub(super) static CREDENTIAL_STORE_PATH: LazyLock<String> = LazyLock::new(|| {
    env::var("CREDENTIAL_STORE_PATH").unwrap_or_else(|_| ".auth_token".to_string())
});

pub(super) static CREDENTIAL_STORE: LazyLock<Mutex<Box<dyn CredentialStore>>> =
    LazyLock::new(|| {
        let store_type = CREDENTIAL_STORE_TYPE.as_str();

        tracing::info!("Initializing credential store with type: {}", store_type);

        let store: Box<dyn CredentialStore> = match store_type {
            "memory" => Box::new(InMemoryCredentialStore::new()),
            "file" => Box::new(FileCredentialStore::new(CREDENTIAL_STORE_PATH.as_str())),
            t => panic!(
                "Unsupported credential store type: {t}. Supported types are 'memory' and 'file'"
            ),
        };

        Mutex::new(store)
    });
