use async_trait::async_trait;
use launchtrack_core::{Phase, ProgressUpdate, Task, TaskPatch};

use crate::error::StorageError;

/// Task reads plus the transactional update-and-recompute path.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Get a task by id, scoped to the owning project's owner.
    async fn get_task(&self, id: &str, owner: &str) -> Result<Option<Task>, StorageError>;

    /// Tasks of one milestone, in template order.
    async fn get_milestone_tasks(&self, milestone_id: &str) -> Result<Vec<Task>, StorageError>;

    /// Tasks of one phase across the whole project.
    async fn get_phase_tasks(
        &self,
        project_id: &str,
        phase: Phase,
    ) -> Result<Vec<Task>, StorageError>;

    /// Apply a patch to a task and recompute every affected aggregate
    /// (milestone pct, phase pct, overall pct) in a single transaction.
    ///
    /// `expected_version` is the version the caller read; a mismatch fails
    /// with [`StorageError::Conflict`] and leaves all rows untouched.
    async fn update_task(
        &self,
        task_id: &str,
        actor: &str,
        patch: &TaskPatch,
        expected_version: i64,
    ) -> Result<ProgressUpdate, StorageError>;
}
