use serde::{Deserialize, Serialize};

use crate::gateway::UserPayload;

/// Claims carried in the middle segment of a bearer credential.
///
/// `exp` is a Unix timestamp in seconds. The segment is read without any
/// signature verification; the backend stays the authority on validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialClaims {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub exp: i64,
}

/// Client-held snapshot of the signed-in user's identity.
///
/// At most one exists at a time; its presence means "optimistically
/// authenticated" and nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
}

impl From<CredentialClaims> for Session {
    fn from(claims: CredentialClaims) -> Self {
        Self {
            user_id: claims.id,
            email: claims.email,
            display_name: claims.name.unwrap_or_else(|| "User".to_string()),
        }
    }
}

impl From<UserPayload> for Session {
    fn from(user: UserPayload) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            display_name: user.name.unwrap_or_else(|| "User".to_string()),
        }
    }
}
