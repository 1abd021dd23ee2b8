#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use homepages_api::auth::jwt::{generate_access_token, JwtConfig};
use homepages_api::config::ServerConfig;
use homepages_api::router::build_app_router;
use homepages_api::state::AppState;
use homepages_core::config::HomepagesConfig;
use homepages_core::settings::{FrontPageMode, ReadingSettings};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults: latest-posts front page,
/// default plugin switches.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_url: "/wp-admin".to_string(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
        homepages: HomepagesConfig::default(),
        reading: ReadingSettings::default(),
    }
}

/// Same as [`test_config`] with a static front page.
pub fn static_front_config(page_on_front: u64) -> ServerConfig {
    ServerConfig {
        reading: ReadingSettings {
            show_on_front: FrontPageMode::Page,
            page_on_front,
            ..ReadingSettings::default()
        },
        ..test_config()
    }
}

pub fn test_state(config: ServerConfig) -> AppState {
    AppState::new(config).expect("state should build")
}

/// Build the full application router over the given state.
pub fn build_test_app(state: &AppState) -> Router {
    build_app_router(state.clone())
}

/// A valid bearer token for a signed-in editor.
pub fn editor_token(state: &AppState) -> String {
    role_token(state, "editor")
}

/// A valid bearer token for a signed-in user with the given role.
pub fn role_token(state: &AppState, role: &str) -> String {
    generate_access_token(1, role, &state.config.jwt).expect("token should encode")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn json_auth(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    json_auth(app, Method::POST, uri, body, token).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    json_auth(app, Method::PUT, uri, body, token).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a homepage through the API and return its id.
pub async fn create_homepage(state: &AppState, title: &str, status: &str) -> u64 {
    let token = editor_token(state);
    let response = post_json_auth(
        build_test_app(state),
        "/wp/v2/homepage",
        serde_json::json!({ "title": title, "status": status }),
        &token,
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_u64().unwrap()
}
