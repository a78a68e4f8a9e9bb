//! # Todos Command
//!
//! Scans every note under the root for annotations and renders them as
//! one table.
//!
//! Licensed under the MIT License.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::{
    constants::SUBTASK_SEPARATOR,
    notes, scan,
    scan::{Annotation, Subtask},
    table,
    table::Record,
};

/// Executes the todos command.
///
/// `now` is the reference instant captured once at invocation.
pub fn execute(paths: &[PathBuf], now: DateTime<Local>) -> Result<()> {
    let records = collect(paths, now)?;
    println!("{}", table::render(&records)?);
    Ok(())
}

/// Collects annotation records across all notes, preserving per-file order
/// and file-enumeration order.
pub fn collect(paths: &[PathBuf], now: DateTime<Local>) -> Result<Vec<Record>> {
    let root = notes::resolve_root(paths);
    let today = now.date_naive();

    let mut records = Vec::new();
    for path in notes::walk_notes(&root) {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read note: {}", path.display()))?;
        let file = file_label(&path);
        for annotation in scan::scan_text(&file, &text, today) {
            records.push(annotation_record(&annotation));
        }
    }

    Ok(records)
}

/// Display label for a note: its file name without directories.
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn annotation_record(annotation: &Annotation) -> Record {
    Record::new()
        .field("file", &annotation.file)
        .field("status", annotation.status)
        .field("description", &annotation.description)
        .field("tags", &annotation.tags)
        .field("subtasks", format_subtasks(&annotation.subtasks))
        .styled(annotation.style)
}

/// Renders subtasks for a table cell: `[x] done bit; [ ] open bit`.
fn format_subtasks(subtasks: &[Subtask]) -> String {
    subtasks
        .iter()
        .map(|subtask| {
            let mark = if subtask.checked { 'x' } else { ' ' };
            format!("[{mark}] {}", subtask.description)
        })
        .collect::<Vec<_>>()
        .join(SUBTASK_SEPARATOR)
}
