pub mod dashboard;
pub mod notifications;
pub mod projects;
pub mod tasks;
