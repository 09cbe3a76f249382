use axum::extract::State;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::Role;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::store::UserRecord;

/// Admin-facing user view; never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<UserRecord> for UserView {
    fn from(user: UserRecord) -> Self {
        Self { id: user.id, name: user.name, email: user.email, role: user.role }
    }
}

/// GET /api/admin/users - list accounts. The route is admin-classified, so
/// the access gate has already required an admin credential.
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<UserView>> {
    let users = state.users.list().await.into_iter().map(UserView::from).collect();
    Ok(ApiResponse::success(users))
}
