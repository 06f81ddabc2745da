//! Storage trait abstraction
//!
//! Async domain traits for the four collections the aggregator touches:
//! projects, milestones, tasks, notifications.

pub mod notification;
pub mod project;
pub mod task;

pub use notification::NotificationStore;
pub use project::{MilestoneStore, ProjectStore};
pub use task::TaskStore;
