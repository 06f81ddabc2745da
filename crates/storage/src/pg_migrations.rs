//! PostgreSQL schema migrations for launchtrack storage.

use sqlx::PgPool;

use crate::error::StorageError;

/// Run all PostgreSQL migrations.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            primary_keyword TEXT NOT NULL,
            project_type TEXT NOT NULL DEFAULT 'Blank',
            owner_id TEXT NOT NULL,
            use_community BOOLEAN NOT NULL DEFAULT FALSE,
            community_choice TEXT NOT NULL DEFAULT 'None',
            community_url TEXT,
            tools JSONB NOT NULL DEFAULT '{}',
            phase1_complete INTEGER NOT NULL DEFAULT 0,
            phase2_complete INTEGER NOT NULL DEFAULT 0,
            phase3_complete INTEGER NOT NULL DEFAULT 0,
            overall_complete INTEGER NOT NULL DEFAULT 0,
            archived BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_proj_owner ON projects (owner_id)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_proj_owner_active ON projects (owner_id) WHERE NOT archived",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS milestones (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            phase TEXT NOT NULL,
            name TEXT NOT NULL,
            order_index INTEGER NOT NULL,
            completion_pct INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_ms_project_phase ON milestones (project_id, phase, order_index)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            milestone_id TEXT NOT NULL REFERENCES milestones(id) ON DELETE CASCADE,
            phase TEXT NOT NULL,
            name TEXT NOT NULL,
            description TEXT,
            status TEXT NOT NULL DEFAULT 'Not Started',
            notes TEXT,
            due_date TIMESTAMPTZ,
            external_link TEXT,
            external_logo TEXT,
            order_index INTEGER NOT NULL,
            due_soon_notified BOOLEAN NOT NULL DEFAULT FALSE,
            stuck_notified BOOLEAN NOT NULL DEFAULT FALSE,
            modified_by TEXT,
            version BIGINT NOT NULL DEFAULT 0,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_task_milestone ON tasks (milestone_id, order_index)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_task_project_phase ON tasks (project_id, phase)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            project_id TEXT,
            task_id TEXT,
            type TEXT NOT NULL,
            message TEXT NOT NULL,
            read BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_notif_user_created ON notifications (user_id, created_at DESC)",
    )
    .execute(pool)
    .await?;

    tracing::info!("PostgreSQL migrations completed");
    Ok(())
}
