use std::sync::Arc;

use chrono::Utc;
use launchtrack_core::{
    DashboardMetrics, Milestone, NewProjectInput, Phase, Project, Task, phase_unlocked,
};
use launchtrack_storage::PgStorage;
use launchtrack_storage::traits::{MilestoneStore, ProjectStore, TaskStore};
use serde::Serialize;

use crate::ServiceError;

/// One milestone with its tasks, in template order.
#[derive(Debug, Clone, Serialize)]
pub struct MilestoneView {
    #[serde(flatten)]
    pub milestone: Milestone,
    pub tasks: Vec<Task>,
}

/// One phase of a project as the phase page renders it.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseView {
    pub phase: Phase,
    pub title: &'static str,
    pub unlocked: bool,
    pub completion_pct: i32,
    pub milestones: Vec<MilestoneView>,
}

/// A project with all three phases expanded.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub phases: Vec<PhaseView>,
}

pub struct ProjectService {
    storage: Arc<PgStorage>,
}

impl ProjectService {
    #[must_use]
    pub const fn new(storage: Arc<PgStorage>) -> Self {
        Self { storage }
    }

    /// Create a project from the wizard payload and seed its phase templates.
    pub async fn create_project(
        &self,
        owner: &str,
        input: NewProjectInput,
    ) -> Result<Project, ServiceError> {
        input.validate()?;
        let now = Utc::now();
        let project = Project {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name.trim().to_owned(),
            description: input.description,
            primary_keyword: input.primary_keyword.trim().to_owned(),
            project_type: input.project_type,
            owner_id: owner.to_owned(),
            use_community: input.use_community,
            community_choice: input.community_choice,
            community_url: input.community_url,
            tools: input.tools,
            phase1_complete: 0,
            phase2_complete: 0,
            phase3_complete: 0,
            overall_complete: 0,
            archived: false,
            created_at: now,
            updated_at: now,
        };
        self.storage.create_project(&project).await?;
        Ok(project)
    }

    pub async fn get_project(
        &self,
        id: &str,
        owner: &str,
    ) -> Result<Option<Project>, ServiceError> {
        Ok(self.storage.get_project(id, owner).await?)
    }

    pub async fn list_projects(
        &self,
        owner: &str,
        include_archived: bool,
    ) -> Result<Vec<Project>, ServiceError> {
        Ok(self.storage.list_projects(owner, include_archived).await?)
    }

    /// Archive a project, removing it from active listings and the dashboard.
    pub async fn archive_project(&self, id: &str, owner: &str) -> Result<(), ServiceError> {
        if self.storage.archive_project(id, owner).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound { entity: "project", id: id.to_owned() })
        }
    }

    /// The full project view: all three phases with milestones and tasks.
    pub async fn project_detail(
        &self,
        id: &str,
        owner: &str,
    ) -> Result<ProjectDetail, ServiceError> {
        let project = self
            .storage
            .get_project(id, owner)
            .await?
            .ok_or_else(|| ServiceError::NotFound { entity: "project", id: id.to_owned() })?;

        let mut phases = Vec::with_capacity(Phase::ALL.len());
        for phase in Phase::ALL {
            phases.push(self.load_phase(&project, phase).await?);
        }
        Ok(ProjectDetail { project, phases })
    }

    /// One phase of a project. Rejects phases still gated behind an
    /// unfinished prior phase.
    pub async fn phase_view(
        &self,
        project_id: &str,
        phase: Phase,
        owner: &str,
    ) -> Result<PhaseView, ServiceError> {
        let project = self.storage.get_project(project_id, owner).await?.ok_or_else(|| {
            ServiceError::NotFound { entity: "project", id: project_id.to_owned() }
        })?;

        if !phase_unlocked(phase, &project) {
            // Phase 1 is never locked, so `prior` exists here.
            let required = phase.prior().unwrap_or(Phase::One);
            return Err(ServiceError::PhaseLocked { phase, required });
        }
        self.load_phase(&project, phase).await
    }

    /// Dashboard rollup over the owner's active projects.
    pub async fn dashboard(&self, owner: &str) -> Result<DashboardMetrics, ServiceError> {
        let projects = self.storage.list_projects(owner, false).await?;
        Ok(DashboardMetrics::from_projects(&projects))
    }

    async fn load_phase(&self, project: &Project, phase: Phase) -> Result<PhaseView, ServiceError> {
        let milestones = self.storage.get_phase_milestones(&project.id, phase).await?;
        let tasks = self.storage.get_phase_tasks(&project.id, phase).await?;
        Ok(PhaseView {
            phase,
            title: phase.title(),
            unlocked: phase_unlocked(phase, project),
            completion_pct: project.phase_completion(phase),
            milestones: group_tasks(milestones, tasks),
        })
    }
}

/// Attach each task to its milestone, preserving template order on both
/// levels. Tasks whose milestone is missing are dropped.
fn group_tasks(milestones: Vec<Milestone>, tasks: Vec<Task>) -> Vec<MilestoneView> {
    let mut views: Vec<MilestoneView> =
        milestones.into_iter().map(|milestone| MilestoneView { milestone, tasks: Vec::new() }).collect();
    for task in tasks {
        if let Some(view) = views.iter_mut().find(|v| v.milestone.id == task.milestone_id) {
            view.tasks.push(task);
        }
    }
    views
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use launchtrack_core::TaskStatus;

    fn milestone(id: &str, order: i32) -> Milestone {
        Milestone {
            id: id.into(),
            project_id: "p".into(),
            phase: Phase::One,
            name: id.into(),
            order_index: order,
            completion_pct: 0,
        }
    }

    fn task(id: &str, milestone_id: &str) -> Task {
        Task {
            id: id.into(),
            project_id: "p".into(),
            milestone_id: milestone_id.into(),
            phase: Phase::One,
            name: id.into(),
            description: None,
            status: TaskStatus::NotStarted,
            notes: None,
            due_date: None,
            external_link: None,
            external_logo: None,
            order_index: 1,
            due_soon_notified: false,
            stuck_notified: false,
            modified_by: None,
            version: 0,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn tasks_group_under_their_milestone() {
        let milestones = vec![milestone("m1", 1), milestone("m2", 2)];
        let tasks = vec![task("t1", "m1"), task("t2", "m2"), task("t3", "m1")];
        let views = group_tasks(milestones, tasks);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].tasks.len(), 2);
        assert_eq!(views[1].tasks.len(), 1);
        assert_eq!(views[0].tasks[1].id, "t3");
    }

    #[test]
    fn orphan_tasks_are_dropped() {
        let views = group_tasks(vec![milestone("m1", 1)], vec![task("t1", "gone")]);
        assert!(views[0].tasks.is_empty());
    }
}
