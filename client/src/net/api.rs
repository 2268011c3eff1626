//! REST API helpers for the admin backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! `ApiError::Unavailable`, since every endpoint needs the browser session.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Nothing here logs or swallows a
//! failure; screens decide how to surface it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    Activity, Booking, BookingStatus, ChartData, ContactMessage, DashboardSummary, LoginRequest, Registrant,
    StatusUpdate,
};
#[cfg(feature = "hydrate")]
use super::types::LoginResponse;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// API base used when `EXPO_API_BASE` is not set at build time. The host
/// server forwards this prefix to the backend.
pub const DEFAULT_API_BASE: &str = "/api";

pub fn api_base() -> &'static str {
    option_env!("EXPO_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    join_url(api_base(), path)
}

#[cfg(any(test, feature = "hydrate"))]
fn booking_endpoint(id: i64) -> String {
    format!("/spacebooking/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn status_update_body(status: BookingStatus) -> serde_json::Value {
    serde_json::to_value(StatusUpdate { status }).unwrap_or_default()
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Authorized `GET` returning a decoded JSON body.
async fn get_json<T>(token: &str, path: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(path))
            .header("Accept", "application/json")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, path);
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns `ApiError` if the request fails, the credentials are rejected, or
/// the response carries no token.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/auth/login"))
            .header("Accept", "application/json")
            .json(&payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: LoginResponse = read_json(resp).await?;
        if body.token.trim().is_empty() {
            return Err(ApiError::Decode("login response carried an empty token".to_owned()));
        }
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Fetch every contact message via `GET /contact`.
///
/// # Errors
///
/// Returns `ApiError` on transport, status, or decode failure.
pub async fn fetch_contact_messages(token: &str) -> Result<Vec<ContactMessage>, ApiError> {
    get_json(token, "/contact").await
}

/// Fetch headline counts via `GET /admin/dashboard-summary`.
///
/// # Errors
///
/// Returns `ApiError` on transport, status, or decode failure.
pub async fn fetch_dashboard_summary(token: &str) -> Result<DashboardSummary, ApiError> {
    get_json(token, "/admin/dashboard-summary").await
}

/// Fetch chart series via `GET /admin/dashboard-charts`.
///
/// # Errors
///
/// Returns `ApiError` on transport, status, or decode failure.
pub async fn fetch_dashboard_charts(token: &str) -> Result<ChartData, ApiError> {
    get_json(token, "/admin/dashboard-charts").await
}

/// Fetch the recent-activity feed via `GET /admin/recent-activity`.
///
/// # Errors
///
/// Returns `ApiError` on transport, status, or decode failure.
pub async fn fetch_recent_activity(token: &str) -> Result<Vec<Activity>, ApiError> {
    get_json(token, "/admin/recent-activity").await
}

/// Fetch every stall booking via `GET /spacebooking`.
///
/// # Errors
///
/// Returns `ApiError` on transport, status, or decode failure.
pub async fn fetch_bookings(token: &str) -> Result<Vec<Booking>, ApiError> {
    get_json(token, "/spacebooking").await
}

/// Write a booking's status via `PUT /spacebooking/{id}`.
///
/// # Errors
///
/// Returns `ApiError` if the request fails or the backend rejects the update.
pub async fn update_booking_status(token: &str, id: i64, status: BookingStatus) -> Result<(), ApiError> {
    let body = status_update_body(status);
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&endpoint(&booking_endpoint(id)))
            .header("Accept", "application/json")
            .header("Authorization", &bearer(token))
            .json(&body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &text));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, body);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the combined visitor/exhibitor listing via `GET /visitors-exhibitors`.
///
/// # Errors
///
/// Returns `ApiError` on transport, status, or decode failure.
pub async fn fetch_registrants(token: &str) -> Result<Vec<Registrant>, ApiError> {
    get_json(token, "/visitors-exhibitors").await
}
