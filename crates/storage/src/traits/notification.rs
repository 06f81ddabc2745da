use async_trait::async_trait;
use launchtrack_core::Notification;

use crate::error::StorageError;

/// Notification persistence for the popover-style listing.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Insert a notification.
    async fn save_notification(&self, notification: &Notification) -> Result<(), StorageError>;

    /// A user's notifications, newest first.
    async fn list_notifications(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<Notification>, StorageError>;

    /// Mark all of a user's notifications read. Returns rows changed.
    async fn mark_all_read(&self, user_id: &str) -> Result<usize, StorageError>;
}
