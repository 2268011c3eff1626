//! Route guards shared by every screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected screens and the login screen apply the same redirect rules; the
//! decisions themselves live in `state::auth` so they can be tested natively.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, should_redirect_authed, should_redirect_unauth};

/// Login screen path.
pub const LOGIN_PATH: &str = "/login";
/// Landing screen after sign-in.
pub const HOME_PATH: &str = "/";

/// Redirect to `/login` whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Redirect away from the login screen once a token is present.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
