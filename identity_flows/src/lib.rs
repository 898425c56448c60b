//! identity_flows - Session and identity-flow management for web application
//! clients
//!
//! This crate holds the signed-in user's identity, issues authenticated
//! requests, and drives the multi-step identity flows of a web application:
//! registration with email verification, login, password reset, email change,
//! and logout. The backend is an external collaborator behind a fixed HTTP
//! contract; credentials are parsed for optimistic UI state only and all
//! trust decisions stay server-side.

mod coordination;
mod gateway;
mod session;
mod storage;
mod throttle;
mod utils;

// Re-export the main coordination components
pub use coordination::{
    AuthManager, EmailChangeFlow, FlowError, ForgotPasswordFlow, LoginFlow, NavigationTarget,
    Navigator, NoopNavigator, PasswordResetFlow, RegistrationFlow,
};

pub use gateway::{ApiGateway, GatewayError, LoginResponse, MessageResponse, UserPayload};

pub use session::{CredentialClaims, Session, SessionError, decode_credential};

pub use storage::{StorageError, clear_credential, load_credential, save_credential};

pub use throttle::{RESEND_COOLDOWN_SECS, ResendThrottle, ThrottleError};

/// Initialize the identity flow layer
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    storage::init().await?;
    Ok(())
}
