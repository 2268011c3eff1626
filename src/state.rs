//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed host config and one pooled HTTP client for the API proxy.

use std::sync::Arc;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HostConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with a proxy client bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` builder error if the TLS backend cannot start.
    pub fn new(config: HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .connect_timeout(config.proxy_timeout)
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
