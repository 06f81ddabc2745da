//! Request/query types (Deserialize)

use launchtrack_core::{MAX_QUERY_LIMIT, TaskPatch, TaskStatus};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    #[serde(default)]
    pub include_archived: bool,
}

#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    pub limit: Option<usize>,
}

impl NotificationQuery {
    /// Cap limit to prevent DoS via unbounded queries.
    pub fn capped_limit(&self) -> Option<usize> {
        self.limit.map(|l| l.min(MAX_QUERY_LIMIT))
    }
}

/// PATCH body for a task. Only present fields are written; `version` must be
/// the version the client last read.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub external_link: Option<String>,
    pub version: i64,
}

impl UpdateTaskRequest {
    /// Parse the wire-format status and build the patch storage applies.
    pub fn into_patch(self) -> Result<TaskPatch, String> {
        let status = match self.status {
            Some(ref s) => {
                Some(s.parse::<TaskStatus>().map_err(|e| e.to_string())?)
            },
            None => None,
        };
        Ok(TaskPatch { status, notes: self.notes, external_link: self.external_link })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notification_query_capped_limit() {
        let q: NotificationQuery =
            serde_json::from_value(json!({"limit": 5000})).expect("valid NotificationQuery");
        assert_eq!(q.capped_limit(), Some(1000));
    }

    #[test]
    fn test_update_task_request_parses_status() {
        let req: UpdateTaskRequest =
            serde_json::from_value(json!({"status": "In Progress", "version": 3}))
                .expect("valid UpdateTaskRequest");
        assert_eq!(req.version, 3);
        let patch = req.into_patch().unwrap();
        assert_eq!(patch.status, Some(TaskStatus::InProgress));
        assert!(patch.notes.is_none());
    }

    #[test]
    fn test_update_task_request_rejects_unknown_status() {
        let req: UpdateTaskRequest =
            serde_json::from_value(json!({"status": "Done", "version": 0}))
                .expect("valid UpdateTaskRequest");
        assert!(req.into_patch().is_err());
    }

    #[test]
    fn test_update_task_request_notes_only() {
        let req: UpdateTaskRequest =
            serde_json::from_value(json!({"notes": "talked to 3 users", "version": 1}))
                .expect("valid UpdateTaskRequest");
        let patch = req.into_patch().unwrap();
        assert!(patch.status.is_none());
        assert_eq!(patch.notes.as_deref(), Some("talked to 3 users"));
    }
}
