use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::auth::Claims;
use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login - authenticate and receive a signed credential.
///
/// Looks the user up in the credential store, checks the password, and
/// issues a token carrying {sub, name, email, role}. The token is returned
/// in the body and also set as an HttpOnly cookie for browser clients.
/// Bad email and bad password produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::bad_request("email and password are required"));
    }

    let user = state
        .users
        .find_by_email(&payload.email)
        .await
        .filter(|user| user.verify_password(&payload.password))
        .ok_or_else(|| {
            tracing::warn!(email = %payload.email, "login rejected");
            ApiError::unauthorized("Invalid email or password")
        })?;

    let claims = Claims::new(
        user.id,
        user.name.clone(),
        user.email.clone(),
        user.role,
        state.codec.ttl(),
    );
    let token = state.codec.issue(&claims)?;
    let expires_in = claims.exp - claims.iat;

    tracing::info!(subject = %user.id, role = %user.role, "login succeeded");

    let body = ApiResponse::success(json!({
        "token": token,
        "user": {
            "id": user.id,
            "name": user.name,
            "email": user.email,
            "role": user.role,
        },
        "expires_in": expires_in,
    }));

    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        state.auth_cookie, token, expires_in
    );
    let mut response = body.into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| ApiError::internal_server_error("Failed to build session cookie"))?,
    );

    Ok(response)
}

/// POST /auth/logout - clear the session cookie.
///
/// Credentials stay valid until natural expiry (no server-side revocation);
/// logout only removes the client's copy.
pub async fn logout(State(state): State<AppState>) -> Response {
    let cookie = format!("{}=; Path=/; HttpOnly; Max-Age=0", state.auth_cookie);

    let mut response = StatusCode::NO_CONTENT.into_response();
    if let Ok(value) = cookie.parse() {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}
