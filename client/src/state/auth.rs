//! Auth-session state for the signed-in admin.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as an `RwSignal<AuthState>` context. Route guards,
//! the sidebar logout button, and every authorized fetch read it; nothing
//! keeps the token in a global.
//!
//! Lifecycle: `restoring` until the persisted token has been checked in the
//! browser, then either signed in (token present) or signed out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    /// True until the persisted token has been looked up.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, loading: true }
    }
}

impl AuthState {
    pub fn signed_in(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()), loading: false }
    }

    pub fn signed_out() -> Self {
        Self { token: None, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Token for authorized calls, empty when signed out.
    pub fn bearer(&self) -> String {
        self.token.clone().unwrap_or_default()
    }
}

/// Protected screens redirect to the login page once restore is done and no
/// token exists.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.token.is_none()
}

/// The login page redirects to the dashboard once a token exists.
pub fn should_redirect_authed(state: &AuthState) -> bool {
    state.token.is_some()
}
