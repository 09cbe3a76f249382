use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{permissions, Action, Identity, Tier};
use crate::error::ApiError;
use crate::state::AppState;

/// Handler-scoped permission check layered onto individual routes:
///
/// ```ignore
/// .route_layer(middleware::from_fn_with_state(
///     state.clone(),
///     |s: State<AppState>, req: Request, next: Next| rbac::enforce(s, Action::Create, req, next),
/// ))
/// ```
///
/// Unlike the access gate, an absent identity is not rejected outright; the
/// caller is treated as the least-privileged tier and the permission table
/// decides. Every decision emits an audit line.
pub async fn enforce(
    State(state): State<AppState>,
    action: Action,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let tier = request
        .extensions()
        .get::<Identity>()
        .map(|identity| identity.role.tier())
        .or_else(|| {
            state
                .resolver
                .resolve(request.headers())
                .map(|identity| identity.role.tier())
        })
        .unwrap_or(Tier::Viewer);

    let allowed = permissions::allows(tier, action);
    tracing::info!(
        target: "audit",
        role = %tier,
        action = %action,
        allowed,
        path = %request.uri().path(),
        "rbac decision"
    );

    if !allowed {
        return Err(ApiError::forbidden(format!(
            "Role '{}' may not {}",
            tier, action
        )));
    }

    Ok(next.run(request).await)
}
