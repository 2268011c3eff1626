//! Typed failure for every backend call.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-success statuses, and undecodable bodies stay
//! distinct so screens can show a reason and the session layer can react to
//! `Unauthorized` without string matching.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired or unauthorized")]
    Unauthorized,
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    ///
    /// Backends usually answer with `{"message": "..."}`; anything else falls
    /// back to a generic status description.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_status_message(status).to_owned());
        Self::Status { status, message }
    }

    /// Short text for display next to the affected panel or form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Check your connection.".to_owned(),
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
            Self::Status { message, .. } => message.clone(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::Unavailable => "Not available.".to_owned(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

fn default_status_message(status: u16) -> &'static str {
    match status {
        400 | 422 => "The request was rejected.",
        403 => "You do not have permission to do that.",
        404 => "Not found.",
        500..=599 => "The server had a problem. Try again later.",
        _ => "Request failed.",
    }
}
