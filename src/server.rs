use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::{self, Next},
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::Action;
use crate::config::SecurityConfig;
use crate::handlers::{elevated, protected, public};
use crate::middleware::{access_gate, rbac};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        // Gated API
        .merge(api_routes(&state))
        // Global middleware; the gate classifies every request itself
        .layer(middleware::from_fn_with_state(state.clone(), access_gate))
        .layer(cors_layer(&crate::config::config().security))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(public::auth::login))
        .route("/auth/logout", post(public::auth::logout))
}

fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/whoami", get(protected::auth::whoami))
        .merge(project_routes(state))
        .route("/api/admin/users", get(elevated::users::list))
}

/// Project CRUD, each method wrapped by the RBAC check for its action.
fn project_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/api/projects",
            get(protected::projects::list).layer(middleware::from_fn_with_state(
                state.clone(),
                |s: State<AppState>, req: Request, next: Next| {
                    rbac::enforce(s, Action::Read, req, next)
                },
            )),
        )
        .route(
            "/api/projects",
            post(protected::projects::create).layer(middleware::from_fn_with_state(
                state.clone(),
                |s: State<AppState>, req: Request, next: Next| {
                    rbac::enforce(s, Action::Create, req, next)
                },
            )),
        )
        .route(
            "/api/projects/:id",
            put(protected::projects::update).layer(middleware::from_fn_with_state(
                state.clone(),
                |s: State<AppState>, req: Request, next: Next| {
                    rbac::enforce(s, Action::Update, req, next)
                },
            )),
        )
        .route(
            "/api/projects/:id",
            delete(protected::projects::delete).layer(middleware::from_fn_with_state(
                state.clone(),
                |s: State<AppState>, req: Request, next: Next| {
                    rbac::enforce(s, Action::Delete, req, next)
                },
            )),
        )
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> =
        security.cors_origins.iter().filter_map(|o| o.parse().ok()).collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new().allow_origin(origins).allow_methods(Any).allow_headers(Any)
    }
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "ClassTrack API",
            "version": version,
            "description": "Education dashboard backend (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "auth": "/auth/login, /auth/logout (public - token acquisition)",
                "whoami": "/api/auth/whoami (protected)",
                "projects": "/api/projects[/:id] (protected, per-action RBAC)",
                "admin": "/api/admin/* (admin role required)",
            }
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        }
    }))
}
