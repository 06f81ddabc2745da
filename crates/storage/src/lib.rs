//! Storage layer for launchtrack
//!
//! PostgreSQL-backed persistence via sqlx. The task-update path runs the full
//! milestone/phase/overall recompute inside a single transaction so the
//! derived columns can never be observed half-updated.

mod error;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::PgStorage;
