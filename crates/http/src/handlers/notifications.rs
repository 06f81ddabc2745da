use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};

use launchtrack_core::Notification;

use crate::AppState;
use crate::api_error::ApiError;
use crate::extract::Actor;
use crate::query_types::NotificationQuery;
use crate::response_types::MarkReadResponse;

pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Query(query): Query<NotificationQuery>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let notifications = state
        .notification_service
        .list_notifications(actor.as_str(), query.capped_limit())
        .await?;
    Ok(Json(notifications))
}

pub async fn mark_all_read(
    State(state): State<Arc<AppState>>,
    actor: Actor,
) -> Result<Json<MarkReadResponse>, ApiError> {
    let updated = state.notification_service.mark_all_read(actor.as_str()).await?;
    Ok(Json(MarkReadResponse { updated }))
}
