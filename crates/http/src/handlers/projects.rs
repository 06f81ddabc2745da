use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use launchtrack_core::{NewProjectInput, Phase, Project};
use launchtrack_service::{PhaseView, ProjectDetail};

use crate::AppState;
use crate::api_error::ApiError;
use crate::extract::Actor;
use crate::query_types::ListProjectsQuery;
use crate::response_types::ArchiveResponse;

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Json(input): Json<NewProjectInput>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = state.project_service.create_project(actor.as_str(), input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Query(query): Query<ListProjectsQuery>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects =
        state.project_service.list_projects(actor.as_str(), query.include_archived).await?;
    Ok(Json(projects))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Path(id): Path<String>,
) -> Result<Json<ProjectDetail>, ApiError> {
    let detail = state.project_service.project_detail(&id, actor.as_str()).await?;
    Ok(Json(detail))
}

pub async fn archive_project(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Path(id): Path<String>,
) -> Result<Json<ArchiveResponse>, ApiError> {
    state.project_service.archive_project(&id, actor.as_str()).await?;
    Ok(Json(ArchiveResponse { archived: true, id }))
}

pub async fn get_phase(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Path((id, phase)): Path<(String, String)>,
) -> Result<Json<PhaseView>, ApiError> {
    let phase = phase.parse::<Phase>().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let view = state.project_service.phase_view(&id, phase, actor.as_str()).await?;
    Ok(Json(view))
}
