//! Shared test fixtures: a mock authentication backend and helpers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::{Value, json};

use identity_flows::{NavigationTarget, Navigator};

/// Canonical test account accepted by the mock backend.
pub const TEST_EMAIL: &str = "a@x.com";
pub const TEST_PASSWORD: &str = "pw123456";

/// Request counters so tests can assert which endpoints were (not) reached.
#[derive(Clone, Default)]
pub struct MockBackendState {
    pub login_calls: Arc<AtomicUsize>,
    pub reset_calls: Arc<AtomicUsize>,
    pub email_change_calls: Arc<AtomicUsize>,
    pub change_password_calls: Arc<AtomicUsize>,
    pub resend_calls: Arc<AtomicUsize>,
}

/// Mock authentication backend bound to an ephemeral port.
///
/// The server task is aborted on drop so tests cannot leak listeners.
pub struct MockBackend {
    pub base_url: String,
    pub state: MockBackendState,
    handle: tokio::task::JoinHandle<()>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = MockBackendState::default();

        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/register", post(register))
            .route("/api/auth/forgot-password", post(forgot_password))
            .route("/api/auth/reset-password", post(reset_password))
            .route("/api/auth/change-email-request", post(change_email_request))
            .route("/api/auth/change-email-verify", get(change_email_verify))
            .route("/api/auth/verify-email", get(verify_email))
            .route("/api/auth/resend-verification", post(resend_verification))
            .route("/api/auth/change-password", post(change_password))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock backend exited");
        });

        Self {
            base_url: format!("http://{addr}/api"),
            state,
            handle,
        }
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Build a credential in the shape the client consumes: three dot-separated
/// segments with a base64url JSON payload in the middle. The signature is a
/// placeholder; the client never verifies it.
pub fn make_credential(id: &str, email: &str, name: Option<&str>, exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let mut claims = json!({"id": id, "email": email, "exp": exp});
    if let Some(name) = name {
        claims["name"] = json!(name);
    }
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

pub fn future_exp() -> i64 {
    chrono::Utc::now().timestamp() + 3600
}

/// Navigator capturing every target for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    targets: Mutex<Vec<NavigationTarget>>,
}

impl RecordingNavigator {
    pub fn targets(&self) -> Vec<NavigationTarget> {
        self.targets.lock().expect("navigator mutex poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: NavigationTarget) {
        self.targets
            .lock()
            .expect("navigator mutex poisoned")
            .push(target);
    }
}

fn bearer_present(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|h| h.starts_with("Bearer ") && h.len() > "Bearer ".len())
}

async fn login(
    State(state): State<MockBackendState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.login_calls.fetch_add(1, Ordering::SeqCst);

    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default();

    if email != TEST_EMAIL || password != TEST_PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid credentials"})),
        );
    }

    let token = make_credential("u-1", &email, Some("A"), future_exp());
    (
        StatusCode::OK,
        Json(json!({
            "token": token,
            "user": {"id": "u-1", "email": email, "name": "A"}
        })),
    )
}

async fn register(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"].as_str().unwrap_or_default().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Email is required"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"message": "Registration successful. Please verify your email."})),
    )
}

async fn forgot_password(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({"message": "Password reset link sent"}))
}

async fn reset_password(
    State(state): State<MockBackendState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.reset_calls.fetch_add(1, Ordering::SeqCst);

    if body["token"].as_str().unwrap_or_default() == "expired" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Reset link is invalid or expired"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"message": "Password has been reset"})),
    )
}

async fn change_email_request(
    State(state): State<MockBackendState>,
    headers: HeaderMap,
    Json(_body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.email_change_calls.fetch_add(1, Ordering::SeqCst);

    if !bearer_present(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Unauthorized"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"message": "Verification link sent to new address"})),
    )
}

async fn change_email_verify(
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    match params.get("token").map(String::as_str) {
        Some(token) if !token.is_empty() => (
            StatusCode::OK,
            Json(json!({"message": "Email address updated"})),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Verification token is invalid"})),
        ),
    }
}

async fn verify_email(
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    match params.get("token").map(String::as_str) {
        Some(token) if !token.is_empty() => (
            StatusCode::OK,
            Json(json!({"message": "Email verified successfully!"})),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Verification token is invalid"})),
        ),
    }
}

async fn resend_verification(
    State(state): State<MockBackendState>,
    Json(_body): Json<Value>,
) -> Json<Value> {
    state.resend_calls.fetch_add(1, Ordering::SeqCst);
    Json(json!({"message": "New verification link sent to your email."}))
}

async fn change_password(
    State(state): State<MockBackendState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.change_password_calls.fetch_add(1, Ordering::SeqCst);

    if !bearer_present(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Unauthorized"})),
        );
    }
    if body["currentPassword"].as_str().unwrap_or_default() != TEST_PASSWORD {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Current password is incorrect"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"message": "Password updated"})),
    )
}
