//! Service layer for launchtrack
//!
//! Centralizes business logic between the HTTP handlers and storage: wizard
//! validation, phase gating, the task-update/notification flow, and dashboard
//! rollups.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
mod notification_service;
mod progress_service;
mod project_service;

pub use error::ServiceError;
pub use notification_service::NotificationService;
pub use progress_service::ProgressService;
pub use project_service::{MilestoneView, PhaseView, ProjectDetail, ProjectService};
