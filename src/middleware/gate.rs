use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::auth::{Role, RouteClass};
use crate::error::ApiError;
use crate::state::AppState;

/// Request gate applied to the whole router. Classifies the path, then for
/// protected and admin routes requires a verified credential, and for admin
/// routes an admin role on top. Public and asset paths pass untouched.
pub async fn access_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let path = request.uri().path().to_string();

    let class = state.classifier.classify(&path);
    if class == RouteClass::Public {
        return Ok(next.run(request).await);
    }

    let Some(identity) = state.resolver.resolve(request.headers()) else {
        // Invalid credentials were already logged by the resolver; a missing
        // one only rates a debug line
        tracing::debug!(path = %path, "no credential presented for gated route");
        return Err(authentication_required(&path));
    };

    if class == RouteClass::Admin && identity.role != Role::Admin {
        tracing::warn!(
            path = %path,
            subject = %identity.id,
            role = %identity.role,
            "admin route refused"
        );
        return Err(ApiError::forbidden("Administrator access required").into_response());
    }

    // API handlers read identity from extensions instead of re-verifying
    if path.starts_with("/api/") || path == "/api" {
        request.extensions_mut().insert(identity);
    }

    Ok(next.run(request).await)
}

/// 401 carrying the login entry point and the original path so the client
/// can redirect back after logging in.
fn authentication_required(path: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": true,
            "message": "Authentication required",
            "code": "UNAUTHORIZED",
            "login": "/login",
            "from": path,
        })),
    )
        .into_response()
}
