//! Typed error enum for the service layer.
//!
//! Unifies storage and domain-validation failures into a single error type,
//! enabling callers to match on specific failure modes instead of downcasting
//! opaque `anyhow::Error` boxes.

use launchtrack_core::{DomainError, Phase};
use launchtrack_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and domain failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, version conflict, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Domain-level validation failed (wizard rules, bad enum values).
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    /// Caller provided invalid input (empty patch, malformed data).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Entity does not exist for this user.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The requested phase is still gated behind an unfinished one.
    #[error("{phase} is locked until {required} reaches 100%")]
    PhaseLocked { phase: Phase, required: Phase },

    /// Serialization/deserialization failed in the service layer.
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            _ => false,
        }
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
            || matches!(self, Self::Storage(StorageError::NotFound { .. }))
    }

    /// Whether this error represents a stale-version write conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_conflict())
    }

    /// Whether this error should be reported to the caller as bad input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Domain(_))
    }
}
