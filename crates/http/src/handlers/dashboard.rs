use std::sync::Arc;

use axum::{Json, extract::State};

use launchtrack_core::DashboardMetrics;

use crate::AppState;
use crate::api_error::ApiError;
use crate::extract::Actor;

pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    actor: Actor,
) -> Result<Json<DashboardMetrics>, ApiError> {
    let metrics = state.project_service.dashboard(actor.as_str()).await?;
    Ok(Json(metrics))
}
