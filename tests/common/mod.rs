use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use classtrack_api::auth::{Claims, Role};
use classtrack_api::config::{AppConfig, Environment, SecurityConfig, ServerConfig};
use classtrack_api::server;
use classtrack_api::state::AppState;

pub const SECRET: &str = "integration-test-secret";
pub const COOKIE: &str = "classtrack_token";

pub fn test_config() -> AppConfig {
    AppConfig {
        environment: Environment::Development,
        server: ServerConfig { port: 0 },
        security: SecurityConfig {
            jwt_secret: SECRET.to_string(),
            token_ttl_days: 7,
            auth_cookie: COOKIE.to_string(),
            enable_cors: false,
            cors_origins: vec![],
        },
    }
}

pub fn test_state() -> AppState {
    AppState::from_config(&test_config()).expect("state from test config")
}

pub fn test_app() -> (Router, AppState) {
    let state = test_state();
    (server::app(state.clone()), state)
}

/// Issues a credential for one of the seeded demo users.
pub async fn token_for(state: &AppState, role: Role) -> String {
    let email = match role {
        Role::Admin => "admin@classtrack.test",
        Role::Instructor => "instructor@classtrack.test",
        Role::Student => "student@classtrack.test",
    };
    let user = state.users.find_by_email(email).await.expect("seeded user");
    let claims = Claims::new(user.id, user.name, user.email, user.role, state.codec.ttl());
    state.codec.issue(&claims).expect("token issue")
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

pub fn get_with_token(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, path: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Result<Response<Body>> {
    Ok(app.clone().oneshot(request).await?)
}

pub async fn body_json(response: Response<Body>) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
