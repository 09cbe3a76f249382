use axum::Extension;
use serde_json::{json, Value};

use crate::auth::Identity;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/auth/whoami - echo the identity the access gate attached.
/// Handlers under /api never re-verify the credential themselves.
pub async fn whoami(Extension(identity): Extension<Identity>) -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({
        "id": identity.id,
        "email": identity.email,
        "role": identity.role,
        "name": identity.name,
    })))
}
