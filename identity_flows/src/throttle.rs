//! Resend-verification cooldown throttle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;

use crate::gateway::{ApiGateway, GatewayError};

/// Seconds a successful resend locks further resends for.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

#[derive(Debug, Error)]
pub enum ThrottleError {
    /// A resend was attempted while the cooldown is still counting down.
    #[error("Please wait {0}s before requesting another verification email")]
    CooldownActive(u32),

    /// A resend was attempted while another resend request is in flight.
    #[error("A resend request is already in flight")]
    ResendInFlight,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Cooldown gate for repeated "resend verification email" requests.
///
/// Owned by the verification view, which is also where the gate lives: the
/// gateway itself never rejects a resend. The countdown runs on a dedicated
/// tokio task as a one-second sleep re-armed each tick, and is cancelled on
/// [`cancel`](Self::cancel) or drop so no timer outlives the hosting view.
pub struct ResendThrottle {
    gateway: ApiGateway,
    seconds_remaining: Arc<AtomicU32>,
    in_flight: AtomicBool,
    timer: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl ResendThrottle {
    pub fn new(gateway: ApiGateway) -> Self {
        Self {
            gateway,
            seconds_remaining: Arc::new(AtomicU32::new(0)),
            in_flight: AtomicBool::new(false),
            timer: std::sync::Mutex::new(None),
        }
    }

    /// Seconds until another resend is permitted. Zero means ready.
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining.load(Ordering::SeqCst)
    }

    /// True when a resend would be accepted right now.
    pub fn is_ready(&self) -> bool {
        self.seconds_remaining() == 0 && !self.in_flight.load(Ordering::SeqCst)
    }

    /// Request another verification email for `email`.
    ///
    /// Rejected locally while the cooldown is counting down or a resend is
    /// already in flight. On backend success the cooldown restarts at
    /// [`RESEND_COOLDOWN_SECS`] and the backend message is returned.
    pub async fn try_resend(&self, email: &str) -> Result<String, ThrottleError> {
        let remaining = self.seconds_remaining();
        if remaining > 0 {
            return Err(ThrottleError::CooldownActive(remaining));
        }
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(ThrottleError::ResendInFlight);
        }

        let result = self.gateway.resend_verification(email).await;
        self.in_flight.store(false, Ordering::SeqCst);

        let response = result?;
        self.begin_cooldown();
        Ok(response.message)
    }

    /// Start (or restart) the countdown at the full cooldown.
    ///
    /// Must be called from within a tokio runtime.
    pub fn begin_cooldown(&self) {
        self.seconds_remaining
            .store(RESEND_COOLDOWN_SECS, Ordering::SeqCst);

        let seconds = Arc::clone(&self.seconds_remaining);
        // One-second single-shot sleeps re-armed each tick; a fixed-period
        // interval would compound drift across renders.
        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                match seconds.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |s| s.checked_sub(1))
                {
                    Ok(previous) if previous > 1 => {}
                    _ => break,
                }
            }
        });

        if let Some(previous) = self
            .timer
            .lock()
            .expect("timer mutex poisoned")
            .replace(handle)
        {
            previous.abort();
        }
    }

    /// Stop the countdown immediately, e.g. when the hosting view unmounts.
    pub fn cancel(&self) {
        if let Some(handle) = self.timer.lock().expect("timer mutex poisoned").take() {
            handle.abort();
        }
    }
}

impl Drop for ResendThrottle {
    fn drop(&mut self) {
        self.cancel();
    }
}
