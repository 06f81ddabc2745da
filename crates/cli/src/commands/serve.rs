use std::sync::Arc;

use anyhow::Result;
use launchtrack_http::{AppState, create_router};
use launchtrack_service::{NotificationService, ProgressService, ProjectService};
use launchtrack_storage::PgStorage;

use crate::get_database_url;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let storage = Arc::new(PgStorage::new(&get_database_url()?).await?);

    let state = Arc::new(AppState {
        project_service: Arc::new(ProjectService::new(Arc::clone(&storage))),
        progress_service: Arc::new(ProgressService::new(Arc::clone(&storage))),
        notification_service: Arc::new(NotificationService::new(storage)),
    });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
