//! Flow coordination module
//!
//! High-level operations driving the identity flows: registration with email
//! verification, login, password reset, email change, and logout. It serves
//! as the main entry point for embeddings.
//!
//! The module is divided into several submodules:
//! - `errors`: Error types specific to flow coordination
//! - `flows`: Per-flow transient state machines owned by the UI layer
//! - `manager`: The `AuthManager` context object owning the session
//! - `navigation`: Post-operation navigation hook

mod errors;
mod flows;
mod manager;
mod navigation;

pub use errors::FlowError;
pub use flows::{
    EmailChangeFlow, ForgotPasswordFlow, LoginFlow, PasswordResetFlow, RegistrationFlow,
};
pub use manager::AuthManager;
pub use navigation::{NavigationTarget, Navigator, NoopNavigator};
