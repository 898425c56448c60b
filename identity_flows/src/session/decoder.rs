use chrono::Utc;

use crate::session::errors::SessionError;
use crate::session::types::CredentialClaims;
use crate::utils::base64url_decode;

/// Extract the claims from a bearer credential without verifying its signature.
///
/// The credential is expected to be dot-separated segments with a base64url
/// JSON payload in the second position. This is an optimistic decode for
/// immediate UI state only: it never contacts the backend and must not be
/// treated as proof of validity for privileged actions.
pub fn decode_credential(credential: &str) -> Result<CredentialClaims, SessionError> {
    let segments: Vec<&str> = credential.split('.').collect();
    if segments.len() < 2 {
        return Err(SessionError::MalformedCredential(
            "expected dot-separated segments".to_string(),
        ));
    }

    let payload =
        base64url_decode(segments[1]).map_err(|e| SessionError::MalformedCredential(e.to_string()))?;

    let claims: CredentialClaims = serde_json::from_slice(&payload)
        .map_err(|e| SessionError::MalformedCredential(e.to_string()))?;

    if claims.exp * 1000 <= Utc::now().timestamp_millis() {
        return Err(SessionError::Expired);
    }

    Ok(claims)
}
