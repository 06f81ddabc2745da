//! Schema migration command.
//!
//! Connects, applies the idempotent schema DDL, and exits. `serve` runs the
//! same migrations on startup; this exists for provisioning a database ahead
//! of a deploy.

use launchtrack_storage::{PgStorage, run_pg_migrations};

use crate::get_database_url;

pub(crate) async fn run() -> anyhow::Result<()> {
    let storage = PgStorage::connect_only(&get_database_url()?).await?;
    run_pg_migrations(storage.pool()).await?;
    println!("Migrations applied.");
    Ok(())
}
