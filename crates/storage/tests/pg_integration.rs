//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p launchtrack-storage -- --ignored pg_

#![allow(clippy::unwrap_used, reason = "integration test code")]

use chrono::Utc;
use launchtrack_core::{
    CommunityChoice, NewProjectInput, Notification, NotificationType, Phase, Project, ProjectType,
    TaskPatch, TaskStatus, ToolSelections, phase_unlocked,
};
use launchtrack_storage::PgStorage;
use launchtrack_storage::traits::{MilestoneStore, NotificationStore, ProjectStore, TaskStore};
use uuid::Uuid;

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn unique_id() -> String {
    format!("test-{}", Uuid::new_v4())
}

fn make_project(owner: &str) -> Project {
    let now = Utc::now();
    Project {
        id: unique_id(),
        name: "Integration SaaS".into(),
        description: Some("pg integration project".into()),
        primary_keyword: "saas".into(),
        project_type: ProjectType::MicroSaas,
        owner_id: owner.to_owned(),
        use_community: false,
        community_choice: CommunityChoice::None,
        community_url: None,
        tools: ToolSelections {
            frontend: vec!["lovable".into()],
            backend: "supabase".into(),
            automation: vec!["make".into()],
            payment: "stripe".into(),
            deployment: "vercel".into(),
        },
        phase1_complete: 0,
        phase2_complete: 0,
        phase3_complete: 0,
        overall_complete: 0,
        archived: false,
        created_at: now,
        updated_at: now,
    }
}

fn status_patch(status: TaskStatus) -> TaskPatch {
    TaskPatch { status: Some(status), ..TaskPatch::default() }
}

// ── Seeding ──────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_create_project_seeds_templates() {
    let storage = create_pg_storage().await;
    let owner = unique_id();
    let project = make_project(&owner);
    storage.create_project(&project).await.unwrap();

    let fetched = storage.get_project(&project.id, &owner).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Integration SaaS");
    assert_eq!(fetched.overall_complete, 0);
    assert_eq!(fetched.tools.backend, "supabase");

    let milestones = storage.get_project_milestones(&project.id).await.unwrap();
    assert_eq!(milestones.len(), 13, "4 + 5 + 4 milestones across the three phases");
    assert!(milestones.iter().all(|m| m.completion_pct == 0));

    let phase1_milestones = storage.get_phase_milestones(&project.id, Phase::One).await.unwrap();
    assert_eq!(phase1_milestones.len(), 4);
    assert_eq!(phase1_milestones[0].name, "Idea Validation");

    let phase1_tasks = storage.get_phase_tasks(&project.id, Phase::One).await.unwrap();
    assert_eq!(phase1_tasks.len(), 17);
    assert!(phase1_tasks.iter().all(|t| t.status == TaskStatus::NotStarted && t.version == 0));

    let phase2_tasks = storage.get_phase_tasks(&project.id, Phase::Two).await.unwrap();
    assert!(phase2_tasks.is_empty(), "Phase 2 is seeded as a milestone skeleton");
}

#[tokio::test]
#[ignore]
async fn pg_project_is_owner_scoped() {
    let storage = create_pg_storage().await;
    let owner = unique_id();
    let project = make_project(&owner);
    storage.create_project(&project).await.unwrap();

    let stranger = unique_id();
    assert!(storage.get_project(&project.id, &stranger).await.unwrap().is_none());
    assert!(!storage.archive_project(&project.id, &stranger).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn pg_archive_excludes_from_active_listing() {
    let storage = create_pg_storage().await;
    let owner = unique_id();
    let project = make_project(&owner);
    storage.create_project(&project).await.unwrap();

    assert!(storage.archive_project(&project.id, &owner).await.unwrap());

    let active = storage.list_projects(&owner, false).await.unwrap();
    assert!(active.iter().all(|p| p.id != project.id));

    let all = storage.list_projects(&owner, true).await.unwrap();
    assert!(all.iter().any(|p| p.id == project.id && p.archived));
}

// ── Aggregation ──────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_completing_one_task_recomputes_aggregates() {
    let storage = create_pg_storage().await;
    let owner = unique_id();
    let project = make_project(&owner);
    storage.create_project(&project).await.unwrap();

    let milestones = storage.get_phase_milestones(&project.id, Phase::One).await.unwrap();
    let idea_validation = &milestones[0];
    let tasks = storage.get_milestone_tasks(&idea_validation.id).await.unwrap();
    assert_eq!(tasks.len(), 4);

    let update = storage
        .update_task(&tasks[0].id, &owner, &status_patch(TaskStatus::Complete), 0)
        .await
        .unwrap();

    // 1 of 4 milestone tasks complete, 1 of 17 phase tasks complete.
    assert_eq!(update.milestone_pct, 25);
    assert_eq!(update.phase_pct_before, 0);
    assert_eq!(update.phase_pct_after, 6);
    assert_eq!(update.overall_after, 2);
    assert_eq!(update.task.status, TaskStatus::Complete);
    assert_eq!(update.task.version, 1);
    assert_eq!(update.task.modified_by.as_deref(), Some(owner.as_str()));

    // Persisted rows agree with the report.
    let milestones = storage.get_phase_milestones(&project.id, Phase::One).await.unwrap();
    assert_eq!(milestones[0].completion_pct, 25);
    let fetched = storage.get_project(&project.id, &owner).await.unwrap().unwrap();
    assert_eq!(fetched.phase1_complete, 6);
    assert_eq!(fetched.overall_complete, 2);
}

#[tokio::test]
#[ignore]
async fn pg_reapplying_same_status_is_idempotent() {
    let storage = create_pg_storage().await;
    let owner = unique_id();
    let project = make_project(&owner);
    storage.create_project(&project).await.unwrap();

    let milestones = storage.get_phase_milestones(&project.id, Phase::One).await.unwrap();
    let tasks = storage.get_milestone_tasks(&milestones[0].id).await.unwrap();

    let first = storage
        .update_task(&tasks[0].id, &owner, &status_patch(TaskStatus::Complete), 0)
        .await
        .unwrap();
    let second = storage
        .update_task(&tasks[0].id, &owner, &status_patch(TaskStatus::Complete), 1)
        .await
        .unwrap();

    assert_eq!(first.milestone_pct, second.milestone_pct);
    assert_eq!(first.phase_pct_after, second.phase_pct_after);
    assert_eq!(first.overall_after, second.overall_after);
}

#[tokio::test]
#[ignore]
async fn pg_stale_version_conflicts_and_leaves_aggregates_untouched() {
    let storage = create_pg_storage().await;
    let owner = unique_id();
    let project = make_project(&owner);
    storage.create_project(&project).await.unwrap();

    let milestones = storage.get_phase_milestones(&project.id, Phase::One).await.unwrap();
    let tasks = storage.get_milestone_tasks(&milestones[0].id).await.unwrap();

    storage
        .update_task(&tasks[0].id, &owner, &status_patch(TaskStatus::InProgress), 0)
        .await
        .unwrap();

    // Second writer still holds version 0.
    let err = storage
        .update_task(&tasks[0].id, &owner, &status_patch(TaskStatus::Complete), 0)
        .await
        .unwrap_err();
    assert!(err.is_conflict(), "expected version conflict, got {err}");

    let task = storage.get_task(&tasks[0].id, &owner).await.unwrap().unwrap();
    assert_eq!(task.status, TaskStatus::InProgress, "stale write must not land");
    let fetched = storage.get_project(&project.id, &owner).await.unwrap().unwrap();
    assert_eq!(fetched.phase1_complete, 0, "aggregates untouched by rejected write");
}

#[tokio::test]
#[ignore]
async fn pg_missing_task_is_not_found() {
    let storage = create_pg_storage().await;
    let owner = unique_id();
    let err = storage
        .update_task(&unique_id(), &owner, &status_patch(TaskStatus::Complete), 0)
        .await
        .unwrap_err();
    assert!(
        matches!(err, launchtrack_storage::StorageError::NotFound { .. }),
        "expected not found, got {err}"
    );
}

#[tokio::test]
#[ignore]
async fn pg_completing_phase_one_reaches_100_and_unlocks_phase_two() {
    let storage = create_pg_storage().await;
    let owner = unique_id();
    let project = make_project(&owner);
    storage.create_project(&project).await.unwrap();

    let tasks = storage.get_phase_tasks(&project.id, Phase::One).await.unwrap();
    assert_eq!(tasks.len(), 17);

    let mut last = None;
    for task in &tasks {
        last = Some(
            storage
                .update_task(&task.id, &owner, &status_patch(TaskStatus::Complete), 0)
                .await
                .unwrap(),
        );
    }
    let last = last.unwrap();
    assert_eq!(last.phase_pct_after, 100);
    assert!(last.phase_just_completed());
    assert_eq!(last.newly_unlocked_phase(), Some(Phase::Two));

    let fetched = storage.get_project(&project.id, &owner).await.unwrap().unwrap();
    assert_eq!(fetched.phase1_complete, 100);
    assert_eq!(fetched.overall_complete, 33);
    assert!(phase_unlocked(Phase::Two, &fetched));
    assert!(!phase_unlocked(Phase::Three, &fetched));

    // Every Phase 1 milestone sits at 100 as well.
    let milestones = storage.get_phase_milestones(&project.id, Phase::One).await.unwrap();
    assert!(milestones.iter().all(|m| m.completion_pct == 100));
}

#[tokio::test]
#[ignore]
async fn pg_notes_only_patch_does_not_move_percentages() {
    let storage = create_pg_storage().await;
    let owner = unique_id();
    let project = make_project(&owner);
    storage.create_project(&project).await.unwrap();

    let milestones = storage.get_phase_milestones(&project.id, Phase::One).await.unwrap();
    let tasks = storage.get_milestone_tasks(&milestones[0].id).await.unwrap();

    let patch = TaskPatch { notes: Some("interviewed 5 users".into()), ..TaskPatch::default() };
    let update = storage.update_task(&tasks[0].id, &owner, &patch, 0).await.unwrap();

    assert_eq!(update.task.notes.as_deref(), Some("interviewed 5 users"));
    assert_eq!(update.task.status, TaskStatus::NotStarted);
    assert_eq!(update.milestone_pct, 0);
    assert_eq!(update.phase_pct_after, 0);
    assert_eq!(update.task.version, 1, "version still bumps on notes-only writes");
}

// ── Notifications ────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_notifications_list_and_mark_read() {
    let storage = create_pg_storage().await;
    let user = unique_id();

    for i in 0..3 {
        let notification = Notification {
            id: unique_id(),
            user_id: user.clone(),
            project_id: None,
            task_id: None,
            kind: NotificationType::PhaseUnlocked,
            message: format!("Phase unlocked #{i}"),
            read: false,
            created_at: Utc::now(),
        };
        storage.save_notification(&notification).await.unwrap();
    }

    let listed = storage.list_notifications(&user, 2).await.unwrap();
    assert_eq!(listed.len(), 2, "limit respected");
    assert!(listed.iter().all(|n| !n.read));

    let changed = storage.mark_all_read(&user).await.unwrap();
    assert_eq!(changed, 3);
    let listed = storage.list_notifications(&user, 10).await.unwrap();
    assert!(listed.iter().all(|n| n.read));
}

// Sanity: wizard validation lives in core but is exercised against the same
// input shape the HTTP layer deserializes.
#[test]
fn wizard_input_validation_matches_seeded_shape() {
    let input = NewProjectInput {
        name: "My Awesome SaaS".into(),
        description: None,
        primary_keyword: "saas".into(),
        project_type: ProjectType::B2B,
        use_community: true,
        community_choice: CommunityChoice::Skool,
        community_url: Some("https://skool.com/x".into()),
        tools: ToolSelections {
            frontend: vec!["lovable".into(), "bolt".into()],
            backend: "supabase".into(),
            automation: vec!["make".into(), "n8n".into()],
            payment: "stripe".into(),
            deployment: "vercel".into(),
        },
    };
    assert!(input.validate().is_ok());
}
