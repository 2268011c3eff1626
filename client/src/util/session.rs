//! Session lifecycle on top of the `RwSignal<AuthState>` context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls `restore` once after mount. The login page calls `sign_in`,
//! the sidebar calls `sign_out`, and pages pass authorized-call failures
//! through `check_result` so an expired token ends the session everywhere.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::storage;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "expo_admin_token";

/// Blank or whitespace-only stored values do not count as a token.
pub fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

/// Load the persisted token and finish the restoring phase.
pub fn restore(auth: RwSignal<AuthState>) {
    let state = match normalize_token(storage::load_string(TOKEN_KEY)) {
        Some(token) => AuthState::signed_in(token),
        None => AuthState::signed_out(),
    };
    auth.set(state);
}

pub fn sign_in(auth: RwSignal<AuthState>, token: String) {
    storage::save_string(TOKEN_KEY, &token);
    auth.set(AuthState::signed_in(token));
}

pub fn sign_out(auth: RwSignal<AuthState>) {
    storage::remove(TOKEN_KEY);
    auth.set(AuthState::signed_out());
}

/// Token for authorized calls, read without subscribing.
pub fn current_token(auth: RwSignal<AuthState>) -> String {
    auth.with_untracked(AuthState::bearer)
}

/// Log a failed authorized call and end the session on `401`.
///
/// Returns the result unchanged so callers can keep matching on it.
pub fn check_result<T>(auth: RwSignal<AuthState>, context: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(e) = &result {
        leptos::logging::warn!("{context} failed: {e}");
        if e.is_unauthorized() {
            sign_out(auth);
        }
    }
    result
}
