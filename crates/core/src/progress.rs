//! Progress arithmetic.
//!
//! All derived percentages in the system come from these functions, so the
//! milestone, phase, and overall columns can never disagree about rounding.
//! Percentages are recomputed from task counts on every change, never
//! adjusted by deltas, which makes re-applying the same update a no-op.

use serde::{Deserialize, Serialize};

use crate::{COMPLETE_PCT, Phase, Project, Task, TaskStatus};

/// `round(100 * completed / total)`, `0` when there are no tasks.
#[must_use]
pub fn completion_pct(completed: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, reason = "task counts are far below 2^52")]
    let ratio = completed as f64 / total as f64;
    #[allow(clippy::cast_possible_truncation, reason = "bounded to 0..=100")]
    {
        (ratio * 100.0).round() as i32
    }
}

/// Canonical overall completion: equal-weighted mean of the three phases.
#[must_use]
pub fn overall_pct(phase1: i32, phase2: i32, phase3: i32) -> i32 {
    #[allow(clippy::cast_possible_truncation, reason = "bounded to 0..=100")]
    {
        (f64::from(phase1 + phase2 + phase3) / 3.0).round() as i32
    }
}

/// Completed/total counts for one aggregate (a milestone or a phase).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub completed: usize,
    pub total: usize,
}

impl TaskCounts {
    #[must_use]
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            counts.total += 1;
            if task.status.is_complete() {
                counts.completed += 1;
            }
        }
        counts
    }

    #[must_use]
    pub fn pct(self) -> i32 {
        completion_pct(self.completed, self.total)
    }
}

/// Phase gating: Phase 1 is always open, every later phase requires the prior
/// phase's stored completion to be exactly 100. Evaluated on read, never
/// tracked as separate state.
#[must_use]
pub fn phase_unlocked(phase: Phase, project: &Project) -> bool {
    match phase.prior() {
        None => true,
        Some(prior) => project.phase_completion(prior) == COMPLETE_PCT,
    }
}

/// Report returned by the transactional task-update path: the written task
/// plus every aggregate before and after the recompute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub task: Task,
    pub milestone_pct: i32,
    pub phase: Phase,
    pub phase_pct_before: i32,
    pub phase_pct_after: i32,
    pub overall_before: i32,
    pub overall_after: i32,
}

impl ProgressUpdate {
    /// Phase crossed below-100 → 100 in this update.
    #[must_use]
    pub const fn phase_just_completed(&self) -> bool {
        self.phase_pct_before < COMPLETE_PCT && self.phase_pct_after == COMPLETE_PCT
    }

    /// Overall completion crossed below-100 → 100 in this update.
    #[must_use]
    pub const fn project_just_completed(&self) -> bool {
        self.overall_before < COMPLETE_PCT && self.overall_after == COMPLETE_PCT
    }

    /// Phase newly unlocked by this update, if any. Completing Phase 3
    /// unlocks nothing.
    #[must_use]
    pub fn newly_unlocked_phase(&self) -> Option<Phase> {
        if self.phase_just_completed() { self.phase.next() } else { None }
    }
}

/// Dashboard rollup over a user's active projects.
///
/// A project is "in" the furthest phase it has reached: still researching
/// while phase 1 is short of 100, building once phase 1 closed, marketing
/// once phase 2 closed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardMetrics {
    pub total_projects: usize,
    pub phase1_count: usize,
    pub phase2_count: usize,
    pub phase3_count: usize,
    pub avg_completion: i32,
}

impl DashboardMetrics {
    #[must_use]
    pub fn from_projects(projects: &[Project]) -> Self {
        if projects.is_empty() {
            return Self::default();
        }
        let phase1_count = projects.iter().filter(|p| p.phase1_complete < COMPLETE_PCT).count();
        let phase2_count = projects
            .iter()
            .filter(|p| p.phase1_complete == COMPLETE_PCT && p.phase2_complete < COMPLETE_PCT)
            .count();
        let phase3_count =
            projects.iter().filter(|p| p.phase2_complete == COMPLETE_PCT).count();
        let sum: i64 = projects.iter().map(|p| i64::from(p.overall_complete)).sum();
        #[allow(clippy::cast_precision_loss, reason = "project counts are small")]
        #[allow(clippy::cast_possible_truncation, reason = "bounded to 0..=100")]
        let avg_completion = (sum as f64 / projects.len() as f64).round() as i32;
        Self {
            total_projects: projects.len(),
            phase1_count,
            phase2_count,
            phase3_count,
            avg_completion,
        }
    }
}
