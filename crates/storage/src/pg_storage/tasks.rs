//! TaskStore implementation for PgStorage, including the transactional
//! update-and-recompute path at the heart of the progress aggregator.

use super::*;

use async_trait::async_trait;
use launchtrack_core::{ProgressUpdate, TaskPatch, completion_pct, overall_pct};
use sqlx::Postgres;

use crate::error::StorageError;
use crate::traits::TaskStore;

const fn phase_column(phase: Phase) -> &'static str {
    match phase {
        Phase::One => "phase1_complete",
        Phase::Two => "phase2_complete",
        Phase::Three => "phase3_complete",
    }
}

/// Completed/total task counts for an aggregate, computed inside `tx` so the
/// percentages are derived from the post-update state.
async fn count_tasks(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    filter_sql: &str,
    bind_a: &str,
    bind_b: Option<&str>,
) -> Result<(i64, i64), StorageError> {
    let sql = format!(
        "SELECT COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'Complete') AS completed
         FROM tasks WHERE {filter_sql}"
    );
    let mut query = sqlx::query(&sql).bind(bind_a);
    if let Some(b) = bind_b {
        query = query.bind(b);
    }
    let row = query.fetch_one(&mut **tx).await?;
    Ok((row.try_get("completed")?, row.try_get("total")?))
}

#[async_trait]
impl TaskStore for PgStorage {
    async fn get_task(&self, id: &str, owner: &str) -> Result<Option<Task>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks
             WHERE id = $1
               AND project_id IN (SELECT id FROM projects WHERE owner_id = $2)"
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_task(&r)).transpose()
    }

    async fn get_milestone_tasks(&self, milestone_id: &str) -> Result<Vec<Task>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE milestone_id = $1 ORDER BY order_index"
        ))
        .bind(milestone_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_task).collect()
    }

    async fn get_phase_tasks(
        &self,
        project_id: &str,
        phase: Phase,
    ) -> Result<Vec<Task>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks
             WHERE project_id = $1 AND phase = $2
             ORDER BY milestone_id, order_index"
        ))
        .bind(project_id)
        .bind(phase.as_str())
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_task).collect()
    }

    async fn update_task(
        &self,
        task_id: &str,
        actor: &str,
        patch: &TaskPatch,
        expected_version: i64,
    ) -> Result<ProgressUpdate, StorageError> {
        let mut tx = self.pool.begin().await?;

        // Version-checked, owner-scoped write. COALESCE leaves un-patched
        // fields alone so notes-only updates share this path.
        let row = sqlx::query(
            "UPDATE tasks SET
                status = COALESCE($1, status),
                notes = COALESCE($2, notes),
                external_link = COALESCE($3, external_link),
                modified_by = $4,
                version = tasks.version + 1,
                updated_at = NOW()
             FROM projects
             WHERE tasks.id = $5
               AND tasks.project_id = projects.id
               AND projects.owner_id = $6
               AND tasks.version = $7
             RETURNING tasks.*",
        )
        .bind(patch.status.map(TaskStatus::as_str))
        .bind(&patch.notes)
        .bind(&patch.external_link)
        .bind(actor)
        .bind(task_id)
        .bind(actor)
        .bind(expected_version)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            // Zero rows: either the task is gone (or foreign) or the version
            // moved on. Distinguish so callers can surface 404 vs 409.
            let current = sqlx::query(
                "SELECT tasks.version FROM tasks
                 JOIN projects ON tasks.project_id = projects.id
                 WHERE tasks.id = $1 AND projects.owner_id = $2",
            )
            .bind(task_id)
            .bind(actor)
            .fetch_optional(&mut *tx)
            .await?;
            return Err(match current {
                Some(row) => StorageError::Conflict {
                    entity: "task",
                    id: task_id.to_owned(),
                    expected: expected_version,
                    actual: row.try_get("version")?,
                },
                None => StorageError::NotFound { entity: "task", id: task_id.to_owned() },
            });
        };
        let task = row_to_task(&row)?;

        // Lock the project row: concurrent recomputes for the same project
        // serialize here instead of clobbering each other's percentages.
        let project_row = sqlx::query(
            "SELECT phase1_complete, phase2_complete, phase3_complete, overall_complete
             FROM projects WHERE id = $1 FOR UPDATE",
        )
        .bind(&task.project_id)
        .fetch_one(&mut *tx)
        .await?;
        let mut phases = [
            project_row.try_get::<i32, _>("phase1_complete")?,
            project_row.try_get::<i32, _>("phase2_complete")?,
            project_row.try_get::<i32, _>("phase3_complete")?,
        ];
        let overall_before: i32 = project_row.try_get("overall_complete")?;
        let phase_idx = match task.phase {
            Phase::One => 0,
            Phase::Two => 1,
            Phase::Three => 2,
        };
        let phase_pct_before = phases[phase_idx];

        // Milestone percentage from post-update counts.
        let (completed, total) =
            count_tasks(&mut tx, "milestone_id = $1", &task.milestone_id, None).await?;
        let milestone_pct = completion_pct(usize_from(completed), usize_from(total));
        sqlx::query("UPDATE milestones SET completion_pct = $1 WHERE id = $2")
            .bind(milestone_pct)
            .bind(&task.milestone_id)
            .execute(&mut *tx)
            .await?;

        // Phase percentage: raw task counts across the whole phase, not a
        // milestone average.
        let (completed, total) = count_tasks(
            &mut tx,
            "project_id = $1 AND phase = $2",
            &task.project_id,
            Some(task.phase.as_str()),
        )
        .await?;
        let phase_pct_after = completion_pct(usize_from(completed), usize_from(total));
        phases[phase_idx] = phase_pct_after;
        let overall_after = overall_pct(phases[0], phases[1], phases[2]);

        sqlx::query(&format!(
            "UPDATE projects SET {} = $1, overall_complete = $2, updated_at = NOW()
             WHERE id = $3",
            phase_column(task.phase)
        ))
        .bind(phase_pct_after)
        .bind(overall_after)
        .bind(&task.project_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            task_id = %task.id,
            milestone_pct,
            phase = %task.phase,
            phase_pct_after,
            overall_after,
            "task updated, aggregates recomputed"
        );

        Ok(ProgressUpdate {
            phase: task.phase,
            task,
            milestone_pct,
            phase_pct_before,
            phase_pct_after,
            overall_before,
            overall_after,
        })
    }
}

fn usize_from(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}
