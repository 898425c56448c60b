//! Per-flow transient state machines.
//!
//! Flow state is owned by the UI layer, independent of the session; the
//! transitions here are driven exclusively by operation outcomes, never
//! guessed ahead of a response.

/// Login: `Idle → Submitting → Authenticated | Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFlow {
    #[default]
    Idle,
    Submitting,
    Authenticated,
    Failed,
}

impl LoginFlow {
    /// Enter the submitting state as the login request is issued.
    pub fn submit(self) -> Self {
        Self::Submitting
    }

    /// Apply the operation outcome.
    pub fn resolve(self, success: bool) -> Self {
        if success {
            Self::Authenticated
        } else {
            Self::Failed
        }
    }
}

/// Registration with email verification:
/// `Submitted → AwaitingVerification → Verified | Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationFlow {
    Submitted,
    AwaitingVerification,
    Verified,
    Failed,
}

impl RegistrationFlow {
    /// The backend accepted the registration and sent a verification email.
    pub fn email_sent(self) -> Self {
        Self::AwaitingVerification
    }

    /// Apply the verification outcome.
    pub fn resolve(self, success: bool) -> Self {
        if success {
            Self::Verified
        } else {
            Self::Failed
        }
    }
}

/// Forgot-password request: `Requested → LinkSent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForgotPasswordFlow {
    Requested,
    LinkSent,
}

impl ForgotPasswordFlow {
    pub fn link_sent(self) -> Self {
        Self::LinkSent
    }
}

/// Password reset, keyed by the one-time token from the emailed link:
/// `TokenPresent → Submitting → Reset | Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordResetFlow {
    TokenPresent,
    Submitting,
    Reset,
    Failed,
}

impl PasswordResetFlow {
    pub fn submit(self) -> Self {
        Self::Submitting
    }

    pub fn resolve(self, success: bool) -> Self {
        if success {
            Self::Reset
        } else {
            Self::Failed
        }
    }
}

/// Email change: `Requested → VerificationSent`, then on a separate later
/// visit `TokenPresent → Verifying → Changed | Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailChangeFlow {
    Requested,
    VerificationSent,
    TokenPresent,
    Verifying,
    Changed,
    Failed,
}

impl EmailChangeFlow {
    pub fn verification_sent(self) -> Self {
        Self::VerificationSent
    }

    pub fn verify(self) -> Self {
        Self::Verifying
    }

    pub fn resolve(self, success: bool) -> Self {
        if success {
            Self::Changed
        } else {
            Self::Failed
        }
    }
}
