use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use launchtrack_core::ProgressUpdate;

use crate::AppState;
use crate::api_error::ApiError;
use crate::extract::Actor;
use crate::query_types::UpdateTaskRequest;

/// PATCH a task. The response carries the written task plus every aggregate
/// before and after the recompute, so clients can update their UI without a
/// refetch. A stale `version` returns 409.
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<ProgressUpdate>, ApiError> {
    let version = req.version;
    let patch = req.into_patch().map_err(ApiError::BadRequest)?;
    let update = state.progress_service.update_task(&id, actor.as_str(), &patch, version).await?;
    Ok(Json(update))
}
