//! NotificationStore implementation for PgStorage.

use super::*;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::NotificationStore;

#[async_trait]
impl NotificationStore for PgStorage {
    async fn save_notification(&self, notification: &Notification) -> Result<(), StorageError> {
        sqlx::query(&format!(
            "INSERT INTO notifications ({NOTIFICATION_COLUMNS})
             VALUES ($1,$2,$3,$4,$5,$6,$7,$8)"
        ))
        .bind(&notification.id)
        .bind(&notification.user_id)
        .bind(&notification.project_id)
        .bind(&notification.task_id)
        .bind(notification.kind.as_str())
        .bind(&notification.message)
        .bind(notification.read)
        .bind(notification.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_notifications(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<Notification>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT $2"
        ))
        .bind(user_id)
        .bind(usize_to_i64(limit))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_notification).collect()
    }

    async fn mark_all_read(&self, user_id: &str) -> Result<usize, StorageError> {
        let result = sqlx::query("UPDATE notifications SET read = TRUE WHERE user_id = $1 AND NOT read")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(usize::try_from(result.rows_affected()).unwrap_or(usize::MAX))
    }
}
