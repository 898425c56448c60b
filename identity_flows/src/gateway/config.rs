//! Configuration for the API gateway

use std::sync::LazyLock;

/// Base URL of the authentication backend
///
/// All endpoint paths are joined under this URL.
/// Default: "http://localhost:3000/api"
pub static AUTH_API_BASE_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("AUTH_API_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3000/api".to_string())
});
