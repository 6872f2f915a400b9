// ABOUTME: End-to-end smoke test for the porter identity flow.
// ABOUTME: Drives the assembled router and checks anonymous and header-derived identities.

use std::sync::Arc;

use axum::body::Body;
use http::Request;
use porter_auth::{AuthType, build_strategy};
use porter_server::{AppState, ServerConfig, create_router};
use tower::ServiceExt;

/// Helper to create a test AppState with the noop strategy.
fn test_app_state() -> Arc<AppState> {
    let config = ServerConfig {
        bind: "127.0.0.1:0".parse().unwrap(),
        auth_type: AuthType::Noop,
        config_path: None,
    };
    Arc::new(AppState::new(config, build_strategy(AuthType::Noop)))
}

/// Helper to extract JSON body from a response.
async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn smoke_test_identity_flow() {
    let state = test_app_state();

    // 1. GET /health -> server is alive
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), 200, "health should return 200");
    let json = json_body(resp).await;
    assert_eq!(json["status"], "ok");

    // 2. GET /api/whoami without a header -> anonymous principal
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/api/whoami").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), 200, "whoami should never reject");
    let json = json_body(resp).await;
    assert_eq!(json["identity"], "anonymous");
    assert_eq!(json["display_name"], "Anonymous User");
    assert_eq!(json["is_authenticated"], true);

    // 3. GET /api/whoami with a mixed-case identity header
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(
            Request::get("/api/whoami")
                .header("X-User-ID", "user-67890")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let json = json_body(resp).await;
    assert_eq!(json["identity"], "user-67890");
    assert_eq!(json["display_name"], "user-67890");
    assert_eq!(json["is_authenticated"], true);

    // 4. Unrelated headers never change the resolution
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(
            Request::get("/api/whoami")
                .header("x-user-id", "user-999")
                .header("authorization", "Bearer some-token")
                .header("content-type", "application/json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = json_body(resp).await;
    assert_eq!(json["identity"], "user-999");

    // 5. Empty header value collapses to anonymous, not an empty identity
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(
            Request::get("/api/whoami")
                .header("x-user-id", "")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = json_body(resp).await;
    assert_eq!(json["identity"], "anonymous");
    assert_eq!(json["display_name"], "Anonymous User");
}
