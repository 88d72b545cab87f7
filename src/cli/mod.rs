//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_checkpoint, format_edit_report, format_history, format_tag_list};
