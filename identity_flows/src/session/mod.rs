mod decoder;
mod errors;
mod types;

pub use decoder::decode_credential;
pub use errors::SessionError;
pub use types::{CredentialClaims, Session};
