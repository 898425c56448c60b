use thiserror::Error;

/// Errors surfaced by the API gateway.
///
/// `RequestFailed` and `TransportFailed` carry their message content
/// unmodified so the caller can render it directly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// An operation requiring authentication found no stored credential.
    #[error("No authentication credential found. Please log in.")]
    Unauthenticated,

    /// The backend answered with a non-success status.
    #[error("{0}")]
    RequestFailed(String),

    /// The request never produced an HTTP response.
    #[error("{0}")]
    TransportFailed(String),

    /// The backend answered with a success status but a body that does not
    /// match the contract.
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}
