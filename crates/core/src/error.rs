use std::result::Result as StdResult;

use thiserror::Error;

/// Domain-level errors: parse failures and input validation.
///
/// Storage and service layers carry their own error enums; this one covers
/// what the domain types themselves can reject.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid phase: {0}")]
    InvalidPhase(String),

    #[error("Invalid task status: {0}")]
    InvalidTaskStatus(String),

    #[error("Invalid project type: {0}")]
    InvalidProjectType(String),

    #[error("Invalid community choice: {0}")]
    InvalidCommunityChoice(String),

    #[error("Invalid notification type: {0}")]
    InvalidNotificationType(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, DomainError>;
