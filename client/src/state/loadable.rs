//! Per-fetch load status.
//!
//! Each independently fetched slice of a screen carries its own `Loadable`, so
//! one failing panel never hides or blocks the others.

#[cfg(test)]
#[path = "loadable_test.rs"]
mod loadable_test;

use crate::net::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Loadable<Vec<T>> {
    /// Fetched rows, or an empty slice while loading or after a failure.
    pub fn items(&self) -> &[T] {
        self.ready().map(Vec::as_slice).unwrap_or_default()
    }
}
