use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::gateway::config::AUTH_API_BASE_URL;
use crate::gateway::errors::GatewayError;
use crate::gateway::types::{
    ChangePasswordRequest, EmailChangeRequest, ErrorBody, ForgotPasswordRequest, LoginRequest,
    LoginResponse, MessageResponse, RegisterRequest, ResendVerificationRequest,
    ResetPasswordRequest,
};
use crate::storage::load_credential;

/// Typed HTTP gateway to the authentication backend.
///
/// Each operation builds a request under the configured base URL, JSON-encodes
/// the body, attaches the stored bearer credential where the endpoint requires
/// authentication, and normalizes failures into [`GatewayError`]. The gateway
/// performs no retries: one user action, one attempt.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    base_url: String,
    client: reqwest::Client,
}

/// Creates a configured HTTP client for gateway operations with the following
/// settings:
///
/// - `timeout`: 30 seconds, to prevent indefinite hanging of requests.
///
/// - `pool_idle_timeout`: 90 seconds. Controls how long an idle connection
///   stays in the connection pool before being removed.
///
/// - `pool_max_idle_per_host`: 32. The identity flows talk to a single
///   backend host; the default pool size is plenty.
fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .expect("Failed to create reqwest client")
}

impl ApiGateway {
    /// Gateway pointed at the backend named by `AUTH_API_BASE_URL`.
    pub fn new() -> Self {
        Self::with_base_url(AUTH_API_BASE_URL.as_str())
    }

    /// Gateway pointed at an explicit base URL.
    ///
    /// Panics on an unparseable URL: a bad base URL is a configuration error
    /// and should fail at construction, not on the first request.
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).expect("Invalid AUTH_API_BASE_URL");

        Self {
            base_url,
            client: build_client(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn bearer(&self) -> Result<String, GatewayError> {
        load_credential().await.ok_or(GatewayError::Unauthenticated)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::TransportFailed(e.to_string()))?;

        read_json_response(response, fallback).await
    }

    async fn post_json_authenticated<B, T>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        // Precondition check against the token store, before any network I/O
        let credential = self.bearer().await?;

        let response = self
            .client
            .post(self.endpoint(path))
            .bearer_auth(credential)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::TransportFailed(e.to_string()))?;

        read_json_response(response, fallback).await
    }

    async fn get_json<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        fallback: &str,
    ) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(self.endpoint(path))
            .query(query)
            .send()
            .await
            .map_err(|e| GatewayError::TransportFailed(e.to_string()))?;

        read_json_response(response, fallback).await
    }

    /// POST /auth/login
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, GatewayError> {
        self.post_json("/auth/login", &LoginRequest { email, password }, "Login failed")
            .await
    }

    /// POST /auth/register
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<MessageResponse, GatewayError> {
        self.post_json(
            "/auth/register",
            &RegisterRequest {
                email,
                password,
                name,
            },
            "Registration failed",
        )
        .await
    }

    /// POST /auth/forgot-password
    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, GatewayError> {
        self.post_json(
            "/auth/forgot-password",
            &ForgotPasswordRequest { email },
            "Forgot password request failed",
        )
        .await
    }

    /// POST /auth/reset-password
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<MessageResponse, GatewayError> {
        self.post_json(
            "/auth/reset-password",
            &ResetPasswordRequest {
                token,
                new_password,
            },
            "Password reset failed",
        )
        .await
    }

    /// POST /auth/change-email-request (bearer)
    ///
    /// Fails with [`GatewayError::Unauthenticated`] before issuing the network
    /// call when no credential is present in the token store.
    pub async fn request_email_change(
        &self,
        new_email: &str,
    ) -> Result<MessageResponse, GatewayError> {
        self.post_json_authenticated(
            "/auth/change-email-request",
            &EmailChangeRequest { new_email },
            "Email change request failed",
        )
        .await
    }

    /// GET /auth/change-email-verify?token=
    pub async fn verify_new_email(&self, token: &str) -> Result<MessageResponse, GatewayError> {
        self.get_json(
            "/auth/change-email-verify",
            &[("token", token)],
            "New email verification failed",
        )
        .await
    }

    /// GET /auth/verify-email?token=
    pub async fn verify_email(&self, token: &str) -> Result<MessageResponse, GatewayError> {
        self.get_json(
            "/auth/verify-email",
            &[("token", token)],
            "Email verification failed. Invalid or expired link.",
        )
        .await
    }

    /// POST /auth/resend-verification
    pub async fn resend_verification(&self, email: &str) -> Result<MessageResponse, GatewayError> {
        self.post_json(
            "/auth/resend-verification",
            &ResendVerificationRequest { email },
            "Failed to resend email.",
        )
        .await
    }

    /// POST /auth/change-password (bearer)
    ///
    /// Fails with [`GatewayError::Unauthenticated`] before issuing the network
    /// call when no credential is present in the token store.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, GatewayError> {
        self.post_json_authenticated(
            "/auth/change-password",
            &ChangePasswordRequest {
                current_password,
                new_password,
            },
            "Failed to update password.",
        )
        .await
    }
}

impl Default for ApiGateway {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_json_response<T>(
    response: reqwest::Response,
    fallback: &str,
) -> Result<T, GatewayError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GatewayError::TransportFailed(e.to_string()))?;

    if !status.is_success() {
        tracing::debug!("Request failed with status {}: {}", status, body);
        return Err(GatewayError::RequestFailed(error_message(&body, fallback)));
    }

    serde_json::from_str(&body).map_err(|e| {
        GatewayError::InvalidResponse(format!("Failed to deserialize response body: {e}"))
    })
}

/// Pull the backend-supplied message out of an error body, falling back to a
/// generic per-operation message when absent or unparseable.
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| fallback.to_string())
}
