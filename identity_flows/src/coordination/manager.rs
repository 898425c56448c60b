use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::coordination::errors::FlowError;
use crate::coordination::navigation::{NavigationTarget, Navigator};
use crate::gateway::ApiGateway;
use crate::session::{Session, decode_credential};
use crate::storage::{clear_credential, load_credential, save_credential};

/// Orchestrates the identity flows and owns the in-memory session.
///
/// One manager exists per process, constructed with [`AuthManager::init`],
/// which restores the session from the stored credential. Consumers receive
/// the manager by reference; there is no ambient global.
///
/// Every operation either completes its side effects and returns normally, or
/// leaves session and credential storage untouched and re-raises the
/// underlying error for the caller to render. The credential store is only
/// written after the network call has fully succeeded.
///
/// Operations are not serialized against each other. Interleaved
/// session-mutating operations are resolved by a monotonic sequence guard: a
/// response that arrives after a newer operation has started applies no write.
pub struct AuthManager {
    gateway: ApiGateway,
    navigator: Arc<dyn Navigator>,
    session: Mutex<Option<Session>>,
    busy: AtomicBool,
    op_seq: AtomicU64,
}

/// Advisory in-flight marker, reset when the guard drops so failure paths
/// cannot leave the flag stuck.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn hold(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl AuthManager {
    /// Construct the manager and run the startup sequence: load the stored
    /// credential and decode it into an optimistic session snapshot.
    ///
    /// A malformed or expired credential is cleared from the store silently;
    /// decode failures never reach the user.
    pub async fn init(gateway: ApiGateway, navigator: Arc<dyn Navigator>) -> Self {
        let manager = Self {
            gateway,
            navigator,
            session: Mutex::new(None),
            busy: AtomicBool::new(false),
            op_seq: AtomicU64::new(0),
        };
        manager.restore_session().await;
        manager
    }

    async fn restore_session(&self) {
        let Some(credential) = load_credential().await else {
            return;
        };

        match decode_credential(&credential) {
            Ok(claims) => {
                *self.session.lock().await = Some(Session::from(claims));
            }
            Err(e) => {
                tracing::debug!("Discarding stored credential: {}", e);
                if let Err(e) = clear_credential().await {
                    tracing::warn!("Failed to clear unusable credential: {}", e);
                }
            }
        }
    }

    /// Snapshot of the optimistically authenticated user, if any.
    pub async fn current_user(&self) -> Option<Session> {
        self.session.lock().await.clone()
    }

    /// Advisory flag: true while an operation is in flight. Meant for UI
    /// disabling, not mutual exclusion.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Authenticate against the backend.
    ///
    /// On success the returned token is persisted, the session is replaced
    /// with the response's user fields, and the navigator is sent to the
    /// dashboard. On failure nothing is mutated and the error is re-raised.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), FlowError> {
        let _busy = BusyGuard::hold(&self.busy);
        let ticket = self.op_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let response = self.gateway.login(email, password).await?;

        // A newer session-mutating operation started while this request was
        // in flight; its result wins and this response is dropped.
        if self.op_seq.load(Ordering::SeqCst) != ticket {
            tracing::debug!("Ignoring superseded login response for {}", email);
            return Ok(());
        }

        save_credential(&response.token).await?;
        *self.session.lock().await = Some(Session::from(response.user));
        self.navigator.navigate(NavigationTarget::Dashboard);
        Ok(())
    }

    /// Create an account. The backend sends a verification email; no session
    /// is created until the user has verified and logged in.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<(), FlowError> {
        let _busy = BusyGuard::hold(&self.busy);

        self.gateway.register(email, password, name).await?;
        self.navigator.navigate(NavigationTarget::VerifyEmail);
        Ok(())
    }

    /// Clear the stored credential and the in-memory session.
    ///
    /// Idempotent and infallible: calling it with no session still clears the
    /// store and navigates home. Storage failures are logged, not raised.
    pub async fn logout(&self) {
        let _busy = BusyGuard::hold(&self.busy);
        self.op_seq.fetch_add(1, Ordering::SeqCst);

        if let Err(e) = clear_credential().await {
            tracing::warn!("Failed to clear stored credential on logout: {}", e);
        }
        *self.session.lock().await = None;
        self.navigator.navigate(NavigationTarget::Home);
    }

    /// Request a password reset link. Returns the backend acknowledgement for
    /// the caller to display; the session is untouched.
    pub async fn forgot_password(&self, email: &str) -> Result<String, FlowError> {
        let _busy = BusyGuard::hold(&self.busy);

        let response = self.gateway.forgot_password(email).await?;
        Ok(response.message)
    }

    /// Complete a password reset with the one-time token from the emailed
    /// link. The user must log in again afterwards; no session is created.
    ///
    /// An empty token is rejected locally, before any network call.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<String, FlowError> {
        let _busy = BusyGuard::hold(&self.busy);

        if token.trim().is_empty() {
            return Err(FlowError::MissingResetToken);
        }

        let response = self.gateway.reset_password(token, new_password).await?;
        Ok(response.message)
    }

    /// Ask the backend to start an email change. The new address receives a
    /// verification link; the session email updates only after verification.
    ///
    /// Requires a stored credential; fails with an unauthenticated error
    /// before any network call otherwise.
    pub async fn request_email_change(&self, new_email: &str) -> Result<String, FlowError> {
        let _busy = BusyGuard::hold(&self.busy);

        let response = self.gateway.request_email_change(new_email).await?;
        Ok(response.message)
    }

    /// Verify a changed email address with the token from the emailed link.
    ///
    /// The session snapshot is not refreshed here: the stored credential
    /// still carries the old address, and only the next login replaces it.
    /// Callers should prompt for re-authentication after showing the message.
    pub async fn verify_new_email(&self, token: &str) -> Result<String, FlowError> {
        let _busy = BusyGuard::hold(&self.busy);

        let response = self.gateway.verify_new_email(token).await?;
        Ok(response.message)
    }
}
