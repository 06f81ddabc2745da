//! ProjectStore and project seeding for PgStorage.

use super::*;

use async_trait::async_trait;
use launchtrack_core::phase_template;
use uuid::Uuid;

use crate::error::StorageError;
use crate::traits::ProjectStore;

#[async_trait]
impl ProjectStore for PgStorage {
    async fn create_project(&self, project: &Project) -> Result<(), StorageError> {
        let tools = serde_json::to_value(&project.tools)?;
        let mut tx = self.pool.begin().await?;

        sqlx::query(&format!(
            "INSERT INTO projects ({PROJECT_COLUMNS})
             VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13,$14,$15,$16,$17)"
        ))
        .bind(&project.id)
        .bind(&project.name)
        .bind(&project.description)
        .bind(&project.primary_keyword)
        .bind(project.project_type.as_str())
        .bind(&project.owner_id)
        .bind(project.use_community)
        .bind(project.community_choice.as_str())
        .bind(&project.community_url)
        .bind(&tools)
        .bind(project.phase1_complete)
        .bind(project.phase2_complete)
        .bind(project.phase3_complete)
        .bind(project.overall_complete)
        .bind(project.archived)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&mut *tx)
        .await?;

        // Seed the fixed milestone/task templates for all three phases.
        for phase in Phase::ALL {
            for milestone in phase_template(phase) {
                let milestone_id = Uuid::new_v4().to_string();
                sqlx::query(
                    "INSERT INTO milestones (id, project_id, phase, name, order_index, completion_pct)
                     VALUES ($1,$2,$3,$4,$5,0)",
                )
                .bind(&milestone_id)
                .bind(&project.id)
                .bind(phase.as_str())
                .bind(milestone.name)
                .bind(milestone.order_index)
                .execute(&mut *tx)
                .await?;

                for task in milestone.tasks {
                    sqlx::query(
                        "INSERT INTO tasks (id, project_id, milestone_id, phase, name, status, order_index)
                         VALUES ($1,$2,$3,$4,$5,$6,$7)",
                    )
                    .bind(Uuid::new_v4().to_string())
                    .bind(&project.id)
                    .bind(&milestone_id)
                    .bind(phase.as_str())
                    .bind(task.name)
                    .bind(TaskStatus::NotStarted.as_str())
                    .bind(task.order_index)
                    .execute(&mut *tx)
                    .await?;
                }
            }
        }

        tx.commit().await?;
        tracing::info!(project_id = %project.id, owner = %project.owner_id, "project created and seeded");
        Ok(())
    }

    async fn get_project(&self, id: &str, owner: &str) -> Result<Option<Project>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1 AND owner_id = $2"
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_project(&r)).transpose()
    }

    async fn list_projects(
        &self,
        owner: &str,
        include_archived: bool,
    ) -> Result<Vec<Project>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects
             WHERE owner_id = $1 AND (NOT archived OR $2)
             ORDER BY created_at DESC"
        ))
        .bind(owner)
        .bind(include_archived)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_project).collect()
    }

    async fn archive_project(&self, id: &str, owner: &str) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "UPDATE projects SET archived = TRUE, updated_at = NOW()
             WHERE id = $1 AND owner_id = $2 AND NOT archived",
        )
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
