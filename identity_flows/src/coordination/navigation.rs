/// Destination views the flow controller routes to after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Landing page, shown after logout.
    Home,
    /// Authenticated area, shown after a successful login.
    Dashboard,
    /// Post-registration "check your email" view.
    VerifyEmail,
}

/// Post-operation navigation hook.
///
/// Implemented by the embedding UI and injected into [`AuthManager`]; the
/// flow controller calls it after the operations that change where the user
/// should be looking.
///
/// [`AuthManager`]: crate::AuthManager
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: NavigationTarget);
}

/// Navigator that goes nowhere, for embeddings that route on their own.
#[derive(Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _target: NavigationTarget) {}
}
