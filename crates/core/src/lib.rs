//! Core types for launchtrack
//!
//! This crate contains domain types shared across all other crates, plus the
//! pure progress arithmetic every aggregate update is derived from.

mod constants;
mod env_config;
mod error;
mod milestone;
mod notification;
mod phase;
mod progress;
mod project;
mod task;
mod template;

pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use milestone::*;
pub use notification::*;
pub use phase::*;
pub use progress::*;
pub use project::*;
pub use task::*;
pub use template::*;
