//! HTTP API server for launchtrack.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod extract;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, patch, post},
};
use tower_http::cors::CorsLayer;

use launchtrack_service::{NotificationService, ProgressService, ProjectService};

pub use extract::Actor;
pub use response_types::{ReadinessResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    pub project_service: Arc<ProjectService>,
    pub progress_service: Arc<ProgressService>,
    pub notification_service: Arc<NotificationService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .route(
            "/api/projects",
            get(handlers::projects::list_projects).post(handlers::projects::create_project),
        )
        .route("/api/projects/{id}", get(handlers::projects::get_project))
        .route("/api/projects/{id}/archive", post(handlers::projects::archive_project))
        .route("/api/projects/{id}/phases/{phase}", get(handlers::projects::get_phase))
        .route("/api/tasks/{id}", patch(handlers::tasks::update_task))
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/api/notifications", get(handlers::notifications::list_notifications))
        .route("/api/notifications/read", post(handlers::notifications::mark_all_read))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn readiness() -> (StatusCode, Json<ReadinessResponse>) {
    (StatusCode::OK, Json(ReadinessResponse { status: "ready", message: None }))
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
