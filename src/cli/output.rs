//! Output formatting utilities

use crate::application::EditReport;
use crate::domain::{Label, Snapshot};
use std::collections::BTreeMap;

/// Format a list of tags for display, one per line.
pub fn format_tag_list(tags: &[Label]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }

    output
}

/// Format recorded versions, oldest first.
pub fn format_history(versions: &BTreeMap<usize, Snapshot>) -> String {
    if versions.is_empty() {
        return "No versions recorded".to_string();
    }

    let mut output = String::new();
    for (key, snapshot) in versions {
        output.push_str(&format!("{:>4}  {}\n", key, format_inline(snapshot)));
    }

    output
}

/// Summary line for a mutating command.
pub fn format_edit_report(report: &EditReport) -> String {
    let mut output = if report.changed() {
        format!("Tags: {}", format_inline(&report.after))
    } else {
        format!("Unchanged: {}", format_inline(&report.after))
    };

    if let Some(version) = report.version {
        output.push_str(&format!("\nRecorded version {}", version));
    }

    output
}

pub fn format_checkpoint(version: Option<usize>) -> String {
    match version {
        Some(version) => format!("Recorded version {}", version),
        None => "No changes since last version".to_string(),
    }
}

fn format_inline(labels: &[Label]) -> String {
    if labels.is_empty() {
        return "(none)".to_string();
    }

    labels
        .iter()
        .map(Label::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
