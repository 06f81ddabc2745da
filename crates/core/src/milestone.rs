use serde::{Deserialize, Serialize};

use crate::Phase;

/// A named checkpoint within a phase, composed of an ordered set of tasks.
///
/// Created in bulk from the phase templates when a project is created and
/// never deleted afterwards; only `completion_pct` changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub project_id: String,
    pub phase: Phase,
    pub name: String,
    pub order_index: i32,
    pub completion_pct: i32,
}
