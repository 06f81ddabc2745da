use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, Phase};

/// The atomic unit of work. Its status drives every derived completion
/// percentage up the milestone → phase → project chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub milestone_id: String,
    pub phase: Phase,
    pub name: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub notes: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub external_link: Option<String>,
    pub external_logo: Option<String>,
    pub order_index: i32,
    pub due_soon_notified: bool,
    pub stuck_notified: bool,
    pub modified_by: Option<String>,
    /// Optimistic-concurrency token, bumped on every write. Clients send the
    /// version they read; a mismatch rejects the write as a conflict.
    pub version: i64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Complete")]
    Complete,
}

impl TaskStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
        }
    }

    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(Self::NotStarted),
            "In Progress" => Ok(Self::InProgress),
            "Complete" => Ok(Self::Complete),
            _ => Err(DomainError::InvalidTaskStatus(s.to_owned())),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields a task owner may change. `None` fields are left untouched.
///
/// A patch with every field `None` is rejected at the service layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub status: Option<TaskStatus>,
    pub notes: Option<String>,
    pub external_link: Option<String>,
}

impl TaskPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none() && self.external_link.is_none()
    }
}
