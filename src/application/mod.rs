//! Application layer - Use cases and orchestration

pub mod edit_tags;
pub mod history;
pub mod init;
pub mod manage_config;

pub use edit_tags::{EditReport, TagService};
pub use history::HistoryService;
pub use manage_config::ConfigService;
