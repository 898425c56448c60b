mod client;
mod config;
mod errors;
mod types;

pub use client::ApiGateway;
pub use errors::GatewayError;
pub use types::{LoginResponse, MessageResponse, UserPayload};
