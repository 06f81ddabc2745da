//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

// Arithmetic in DB operations (counting, percentages) is bounded by DB limits
#![allow(
    clippy::arithmetic_side_effects,
    reason = "DB row counts and percentages are bounded by PostgreSQL limits"
)]

mod milestones;
mod notifications;
mod projects;
mod tasks;

use chrono::{DateTime, Utc};
use launchtrack_core::{
    CommunityChoice, Milestone, Notification, NotificationType, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS, Phase, Project, ProjectType, Task,
    TaskStatus, ToolSelections,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    /// Connect without running migrations (used by the `migrate` CLI command
    /// which runs them explicitly).
    pub async fn connect_only(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Parse `Phase` from a text column, defaulting loudly on corrupt data.
pub(crate) fn parse_pg_phase(s: &str) -> Phase {
    s.parse().unwrap_or_else(|_| {
        tracing::warn!(invalid_phase = %s, "corrupt phase in DB, defaulting to Phase 1");
        Phase::One
    })
}

pub(crate) fn parse_pg_task_status(s: &str) -> TaskStatus {
    s.parse().unwrap_or_else(|_| {
        tracing::warn!(invalid_status = %s, "corrupt task status in DB, defaulting to Not Started");
        TaskStatus::NotStarted
    })
}

/// Convert `usize` to `i64` for SQL LIMIT binds.
pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

pub(crate) fn row_to_project(row: &sqlx::postgres::PgRow) -> Result<Project, StorageError> {
    let project_type_str: String = row.try_get("project_type")?;
    let project_type: ProjectType = project_type_str.parse().unwrap_or_else(|_| {
        tracing::warn!(invalid_type = %project_type_str, "corrupt project_type in DB, defaulting to Blank");
        ProjectType::Blank
    });
    let community_str: String = row.try_get("community_choice")?;
    let community_choice: CommunityChoice = community_str.parse().unwrap_or_default();
    let tools: serde_json::Value = row.try_get("tools")?;
    let tools: ToolSelections = serde_json::from_value(tools).unwrap_or_default();
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

    Ok(Project {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        primary_keyword: row.try_get("primary_keyword")?,
        project_type,
        owner_id: row.try_get("owner_id")?,
        use_community: row.try_get("use_community")?,
        community_choice,
        community_url: row.try_get("community_url")?,
        tools,
        phase1_complete: row.try_get("phase1_complete")?,
        phase2_complete: row.try_get("phase2_complete")?,
        phase3_complete: row.try_get("phase3_complete")?,
        overall_complete: row.try_get("overall_complete")?,
        archived: row.try_get("archived")?,
        created_at,
        updated_at,
    })
}

pub(crate) fn row_to_milestone(row: &sqlx::postgres::PgRow) -> Result<Milestone, StorageError> {
    Ok(Milestone {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        phase: parse_pg_phase(&row.try_get::<String, _>("phase")?),
        name: row.try_get("name")?,
        order_index: row.try_get("order_index")?,
        completion_pct: row.try_get("completion_pct")?,
    })
}

pub(crate) fn row_to_task(row: &sqlx::postgres::PgRow) -> Result<Task, StorageError> {
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    let due_date: Option<DateTime<Utc>> = row.try_get("due_date")?;
    Ok(Task {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        milestone_id: row.try_get("milestone_id")?,
        phase: parse_pg_phase(&row.try_get::<String, _>("phase")?),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        status: parse_pg_task_status(&row.try_get::<String, _>("status")?),
        notes: row.try_get("notes")?,
        due_date,
        external_link: row.try_get("external_link")?,
        external_logo: row.try_get("external_logo")?,
        order_index: row.try_get("order_index")?,
        due_soon_notified: row.try_get("due_soon_notified")?,
        stuck_notified: row.try_get("stuck_notified")?,
        modified_by: row.try_get("modified_by")?,
        version: row.try_get("version")?,
        updated_at,
    })
}

pub(crate) fn row_to_notification(
    row: &sqlx::postgres::PgRow,
) -> Result<Notification, StorageError> {
    let kind_str: String = row.try_get("type")?;
    let kind: NotificationType = kind_str.parse().map_err(|e| StorageError::DataCorruption {
        context: format!("notification type '{kind_str}'"),
        source: Box::new(e),
    })?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(Notification {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        project_id: row.try_get("project_id")?,
        task_id: row.try_get("task_id")?,
        kind,
        message: row.try_get("message")?,
        read: row.try_get("read")?,
        created_at,
    })
}

pub(crate) const PROJECT_COLUMNS: &str =
    "id, name, description, primary_keyword, project_type, owner_id,
     use_community, community_choice, community_url, tools,
     phase1_complete, phase2_complete, phase3_complete, overall_complete,
     archived, created_at, updated_at";

pub(crate) const MILESTONE_COLUMNS: &str =
    "id, project_id, phase, name, order_index, completion_pct";

pub(crate) const TASK_COLUMNS: &str =
    "id, project_id, milestone_id, phase, name, description, status, notes,
     due_date, external_link, external_logo, order_index,
     due_soon_notified, stuck_notified, modified_by, version, updated_at";

pub(crate) const NOTIFICATION_COLUMNS: &str =
    "id, user_id, project_id, task_id, type, message, read, created_at";
