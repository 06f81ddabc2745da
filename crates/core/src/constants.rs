//! Shared constants for launchtrack.
//!
//! Centralizes magic numbers that would otherwise be duplicated across crates.

/// Maximum number of results for any query (DoS protection).
pub const MAX_QUERY_LIMIT: usize = 1000;

/// Default number of results when limit is not specified by the caller.
pub const DEFAULT_QUERY_LIMIT: usize = 20;

/// Default number of notifications returned by the popover-style listing.
pub const DEFAULT_NOTIFICATION_LIMIT: usize = 5;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// A phase (or milestone, or project) is complete at exactly this percentage.
pub const COMPLETE_PCT: i32 = 100;

/// Maximum frontend tools a project may select in the creation wizard.
pub const MAX_FRONTEND_TOOLS: usize = 2;
