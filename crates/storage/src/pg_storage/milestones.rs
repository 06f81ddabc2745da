//! MilestoneStore implementation for PgStorage.

use super::*;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::MilestoneStore;

#[async_trait]
impl MilestoneStore for PgStorage {
    async fn get_phase_milestones(
        &self,
        project_id: &str,
        phase: Phase,
    ) -> Result<Vec<Milestone>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {MILESTONE_COLUMNS} FROM milestones
             WHERE project_id = $1 AND phase = $2
             ORDER BY order_index"
        ))
        .bind(project_id)
        .bind(phase.as_str())
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_milestone).collect()
    }

    async fn get_project_milestones(
        &self,
        project_id: &str,
    ) -> Result<Vec<Milestone>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {MILESTONE_COLUMNS} FROM milestones
             WHERE project_id = $1
             ORDER BY phase, order_index"
        ))
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_milestone).collect()
    }
}
