use async_trait::async_trait;
use launchtrack_core::{Milestone, Phase, Project};

use crate::error::StorageError;

/// Project lifecycle operations. All reads are owner-scoped: a project that
/// exists but belongs to someone else behaves exactly like a missing one.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Insert a project and seed its milestone/task templates in one
    /// transaction.
    async fn create_project(&self, project: &Project) -> Result<(), StorageError>;

    /// Get a project by id, scoped to its owner.
    async fn get_project(&self, id: &str, owner: &str) -> Result<Option<Project>, StorageError>;

    /// List an owner's projects, newest first. Archived projects are excluded
    /// unless requested.
    async fn list_projects(
        &self,
        owner: &str,
        include_archived: bool,
    ) -> Result<Vec<Project>, StorageError>;

    /// Set the archived flag. Returns `true` if a row changed.
    async fn archive_project(&self, id: &str, owner: &str) -> Result<bool, StorageError>;
}

/// Milestone reads. Milestones are created only through project seeding and
/// mutated only by the task-update recompute.
#[async_trait]
pub trait MilestoneStore: Send + Sync {
    /// Milestones of one phase, in template order.
    async fn get_phase_milestones(
        &self,
        project_id: &str,
        phase: Phase,
    ) -> Result<Vec<Milestone>, StorageError>;

    /// All milestones of a project, phase then template order.
    async fn get_project_milestones(
        &self,
        project_id: &str,
    ) -> Result<Vec<Milestone>, StorageError>;
}
