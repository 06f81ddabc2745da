use std::sync::Arc;

use launchtrack_core::{DEFAULT_NOTIFICATION_LIMIT, MAX_QUERY_LIMIT, Notification};
use launchtrack_storage::PgStorage;
use launchtrack_storage::traits::NotificationStore;

use crate::ServiceError;

pub struct NotificationService {
    storage: Arc<PgStorage>,
}

impl NotificationService {
    #[must_use]
    pub const fn new(storage: Arc<PgStorage>) -> Self {
        Self { storage }
    }

    /// A user's notifications, newest first. The popover shows five by
    /// default; callers can ask for more up to the query cap.
    pub async fn list_notifications(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Notification>, ServiceError> {
        let limit = limit.unwrap_or(DEFAULT_NOTIFICATION_LIMIT).min(MAX_QUERY_LIMIT);
        Ok(self.storage.list_notifications(user_id, limit).await?)
    }

    /// Mark everything read. Returns how many rows flipped.
    pub async fn mark_all_read(&self, user_id: &str) -> Result<usize, ServiceError> {
        Ok(self.storage.mark_all_read(user_id).await?)
    }
}
