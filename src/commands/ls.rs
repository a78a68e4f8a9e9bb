//! # Ls Command
//!
//! Lists note files with relative age, word count, and TODO count.
//!
//! Licensed under the MIT License.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::{
    notes, stats, table,
    table::{Record, Style},
};

/// Executes the ls command.
///
/// `now` is the reference instant captured once at invocation.
pub fn execute(paths: &[PathBuf], now: DateTime<Local>) -> Result<()> {
    let records = collect(paths, now)?;
    println!("{}", table::render(&records)?);
    Ok(())
}

/// Collects one record per note file in enumeration order.
///
/// Files with at least one bare TODO are flagged with a warning style.
pub fn collect(paths: &[PathBuf], now: DateTime<Local>) -> Result<Vec<Record>> {
    let root = notes::resolve_root(paths);

    let mut records = Vec::new();
    for path in notes::walk_notes(&root) {
        let metadata = fs::metadata(&path)
            .with_context(|| format!("Failed to stat note: {}", path.display()))?;
        let modified: DateTime<Local> = metadata
            .modified()
            .with_context(|| format!("No modification time for: {}", path.display()))?
            .into();

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read note: {}", path.display()))?;
        let file_stats = stats::scan_contents(&text);

        let style = if file_stats.todos > 0 {
            Style::Warning
        } else {
            Style::Default
        };

        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        records.push(
            Record::new()
                .field("file", file)
                .field("modified", human_age(modified, now))
                .field("words", file_stats.words)
                .field("todos", file_stats.todos)
                .styled(style),
        );
    }

    Ok(records)
}

/// Formats a modification time as a coarse relative age: minutes under an
/// hour, hours under a day, days otherwise.
fn human_age(modified: DateTime<Local>, now: DateTime<Local>) -> String {
    let age = now.signed_duration_since(modified);
    if age.num_hours() < 1 {
        format!("{}m ago", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}h ago", age.num_hours())
    } else {
        format!("{}d ago", age.num_days())
    }
}
