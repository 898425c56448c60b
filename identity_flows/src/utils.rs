use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

use thiserror::Error;

pub(crate) fn base64url_decode(input: &str) -> Result<Vec<u8>, UtilError> {
    let decoded = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|_| UtilError::Format("Failed to decode base64url".to_string()))?;
    Ok(decoded)
}

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Invalid format: {0}")]
    Format(String),
}
