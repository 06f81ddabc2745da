use std::sync::Arc;

use chrono::Utc;
use launchtrack_core::{Notification, NotificationType, ProgressUpdate, Task, TaskPatch};
use launchtrack_storage::PgStorage;
use launchtrack_storage::traits::{NotificationStore, TaskStore};

use crate::ServiceError;

/// The task-update flow: patch a task, let storage recompute every affected
/// percentage transactionally, then emit any phase-transition notifications.
pub struct ProgressService {
    storage: Arc<PgStorage>,
}

impl ProgressService {
    #[must_use]
    pub const fn new(storage: Arc<PgStorage>) -> Self {
        Self { storage }
    }

    pub async fn get_task(&self, id: &str, owner: &str) -> Result<Option<Task>, ServiceError> {
        Ok(self.storage.get_task(id, owner).await?)
    }

    /// Apply a patch to a task.
    ///
    /// `expected_version` must match the version the caller last read; a
    /// stale value fails with a conflict and changes nothing. Notification
    /// writes happen after the recompute commits and are non-fatal: a failed
    /// insert is logged, never surfaced as an update failure.
    pub async fn update_task(
        &self,
        task_id: &str,
        actor: &str,
        patch: &TaskPatch,
        expected_version: i64,
    ) -> Result<ProgressUpdate, ServiceError> {
        if patch.is_empty() {
            return Err(ServiceError::InvalidInput("task patch has no fields".into()));
        }
        let update = self.storage.update_task(task_id, actor, patch, expected_version).await?;

        for notification in transition_notifications(actor, &update) {
            if let Err(e) = self.storage.save_notification(&notification).await {
                tracing::warn!(
                    error = %e,
                    kind = notification.kind.as_str(),
                    task_id,
                    "failed to record progress notification"
                );
            }
        }
        Ok(update)
    }
}

/// Notifications owed for one progress update: one per phase unlocked, one
/// when the whole project crosses to 100.
fn transition_notifications(actor: &str, update: &ProgressUpdate) -> Vec<Notification> {
    let mut out = Vec::new();
    if let Some(next) = update.newly_unlocked_phase() {
        out.push(notification(
            actor,
            update,
            NotificationType::PhaseUnlocked,
            format!("{} complete! {} ({}) is now unlocked.", update.phase, next, next.title()),
        ));
    }
    if update.project_just_completed() {
        out.push(notification(
            actor,
            update,
            NotificationType::ProjectCompleted,
            "All three phases are at 100%. Project complete!".to_owned(),
        ));
    }
    out
}

fn notification(
    actor: &str,
    update: &ProgressUpdate,
    kind: NotificationType,
    message: String,
) -> Notification {
    Notification {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: actor.to_owned(),
        project_id: Some(update.task.project_id.clone()),
        task_id: Some(update.task.id.clone()),
        kind,
        message,
        read: false,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchtrack_core::{Phase, TaskStatus};

    fn update(phase: Phase, before: i32, after: i32, overall: i32) -> ProgressUpdate {
        ProgressUpdate {
            phase,
            task: Task {
                id: "t1".into(),
                project_id: "p1".into(),
                milestone_id: "m1".into(),
                phase,
                name: "t".into(),
                description: None,
                status: TaskStatus::Complete,
                notes: None,
                due_date: None,
                external_link: None,
                external_logo: None,
                order_index: 1,
                due_soon_notified: false,
                stuck_notified: false,
                modified_by: Some("u1".into()),
                version: 1,
                updated_at: Utc::now(),
            },
            milestone_pct: 100,
            phase_pct_before: before,
            phase_pct_after: after,
            overall_before: 0,
            overall_after: overall,
        }
    }

    #[test]
    fn mid_phase_update_owes_no_notifications() {
        assert!(transition_notifications("u1", &update(Phase::One, 24, 29, 10)).is_empty());
    }

    #[test]
    fn finishing_phase_one_owes_an_unlock_notification() {
        let owed = transition_notifications("u1", &update(Phase::One, 94, 100, 33));
        assert_eq!(owed.len(), 1);
        assert_eq!(owed[0].kind, NotificationType::PhaseUnlocked);
        assert_eq!(owed[0].user_id, "u1");
        assert_eq!(owed[0].project_id.as_deref(), Some("p1"));
        assert!(owed[0].message.contains("Phase 2"));
    }

    #[test]
    fn finishing_phase_three_owes_project_completed() {
        let owed = transition_notifications("u1", &update(Phase::Three, 90, 100, 100));
        assert_eq!(owed.len(), 1);
        assert_eq!(owed[0].kind, NotificationType::ProjectCompleted);
    }

    #[test]
    fn already_complete_phase_owes_nothing() {
        // 100 → 100 is a re-apply, not a transition.
        assert!(transition_notifications("u1", &update(Phase::One, 100, 100, 33)).is_empty());
    }
}
