use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationType {
    #[serde(rename = "Task Due Soon")]
    TaskDueSoon,
    #[serde(rename = "Task Stuck")]
    TaskStuck,
    #[serde(rename = "Collaborator Update")]
    CollaboratorUpdate,
    #[serde(rename = "Phase Unlocked")]
    PhaseUnlocked,
    #[serde(rename = "Project Completed")]
    ProjectCompleted,
}

impl NotificationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskDueSoon => "Task Due Soon",
            Self::TaskStuck => "Task Stuck",
            Self::CollaboratorUpdate => "Collaborator Update",
            Self::PhaseUnlocked => "Phase Unlocked",
            Self::ProjectCompleted => "Project Completed",
        }
    }
}

impl std::str::FromStr for NotificationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Task Due Soon" => Ok(Self::TaskDueSoon),
            "Task Stuck" => Ok(Self::TaskStuck),
            "Collaborator Update" => Ok(Self::CollaboratorUpdate),
            "Phase Unlocked" => Ok(Self::PhaseUnlocked),
            "Project Completed" => Ok(Self::ProjectCompleted),
            _ => Err(DomainError::InvalidNotificationType(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_type_wire_roundtrip() {
        for kind in [
            NotificationType::TaskDueSoon,
            NotificationType::TaskStuck,
            NotificationType::CollaboratorUpdate,
            NotificationType::PhaseUnlocked,
            NotificationType::ProjectCompleted,
        ] {
            assert_eq!(kind.as_str().parse::<NotificationType>().unwrap(), kind);
        }
    }
}
