//! Error types for the flow coordination layer

use thiserror::Error;

use crate::gateway::GatewayError;
use crate::storage::StorageError;

/// Errors that can occur while driving an identity flow
#[derive(Debug, Error)]
pub enum FlowError {
    /// The password reset link carried no token
    #[error("Password reset token is missing. Please use the link from your email.")]
    MissingResetToken,

    /// Error from the API gateway, surfaced with its message unmodified so
    /// the caller can render it directly
    #[error(transparent)]
    Gateway(GatewayError),

    /// Error from credential storage
    #[error("Storage error: {0}")]
    Storage(StorageError),
}

// Custom From implementations that log errors as they cross into the
// coordination layer

impl From<GatewayError> for FlowError {
    fn from(err: GatewayError) -> Self {
        tracing::error!("Gateway error: {}", err);
        Self::Gateway(err)
    }
}

impl From<StorageError> for FlowError {
    fn from(err: StorageError) -> Self {
        let error = Self::Storage(err);
        tracing::error!("{}", error);
        error
    }
}
