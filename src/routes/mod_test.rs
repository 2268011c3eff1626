use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;
use crate::config::HostConfig;

fn test_state() -> AppState {
    AppState::new(HostConfig {
        port: 0,
        backend_url: "http://127.0.0.1:9/api".to_owned(),
        proxy_timeout: Duration::from_secs(1),
    })
    .unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = api_routes(test_state())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_paths_are_not_proxied() {
    let response = api_routes(test_state())
        .oneshot(Request::builder().uri("/visitors").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
