use thiserror::Error;

/// Decode-time credential failures.
///
/// These are self-healing: the coordination layer clears the stored
/// credential and never surfaces them to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Malformed credential: {0}")]
    MalformedCredential(String),

    #[error("Credential expired")]
    Expired,
}
