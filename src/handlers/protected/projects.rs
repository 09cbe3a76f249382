use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::Identity;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::store::{Project, ProjectStatus};

#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Project>> {
    Ok(ApiResponse::success(state.projects.list().await))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<CreateProject>,
) -> ApiResult<Project> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::validation_error(
            "title must not be empty",
            None,
        ));
    }

    let project = state
        .projects
        .create(payload.title, payload.description, identity.id)
        .await;

    Ok(ApiResponse::created(project))
}

/// PUT /api/projects/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProject>,
) -> ApiResult<Project> {
    if let Some(title) = &payload.title {
        if title.trim().is_empty() {
            return Err(ApiError::validation_error("title must not be empty", None));
        }
    }

    state
        .projects
        .update(id, payload.title, payload.description, payload.status)
        .await
        .map(ApiResponse::success)
        .ok_or_else(|| ApiError::not_found(format!("Project '{}' not found", id)))
}

/// DELETE /api/projects/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    if state.projects.delete(id).await {
        Ok(ApiResponse::<()>::no_content())
    } else {
        Err(ApiError::not_found(format!("Project '{}' not found", id)))
    }
}
