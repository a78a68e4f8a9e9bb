//! # Table
//!
//! Console table rendering for uniform record sequences.
//!
//! Licensed under the MIT License.

use std::fmt;

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use crate::constants::{COLUMN_SPACING, NO_RESULTS_PLACEHOLDER};

/// Display-only style hint attached to a record.
///
/// Styles are derived from annotation status and due-date urgency; they are
/// never a data column and are stripped before cell values are extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Plain terminal style
    #[default]
    Default,
    /// Overdue or due today (red)
    Urgent,
    /// Upcoming due date, or a file with open TODOs (yellow)
    Warning,
    /// Ideas (blue)
    Info,
    /// Completed entries (dimmed)
    Muted,
}

impl Style {
    /// Applies the style to a rendered line.
    fn paint(self, text: &str) -> String {
        match self {
            Self::Default => text.to_string(),
            Self::Urgent => text.red().to_string(),
            Self::Warning => text.yellow().to_string(),
            Self::Info => text.blue().to_string(),
            Self::Muted => text.dimmed().to_string(),
        }
    }
}

/// One table row: ordered column/value pairs plus a style hint.
///
/// Column order is significant; the first record handed to [`render`]
/// defines the column set and ordering for the whole table.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
    style: Style,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column value.
    #[must_use]
    pub fn field(mut self, column: &str, value: impl fmt::Display) -> Self {
        self.fields.push((column.to_string(), value.to_string()));
        self
    }

    /// Sets the style hint for the whole row.
    #[must_use]
    pub const fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The style hint for the whole row.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> Vec<&str> {
        self.fields.iter().map(|(column, _)| column.as_str()).collect()
    }

    /// Cell values in column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    /// Looks up a single cell value by column name.
    pub fn value(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

/// Renders records as an aligned console table.
///
/// An empty input renders the literal `no results` placeholder instead of
/// an empty table. Every record must carry the same column set as the
/// first one; a mismatch is a programmer error and fails fast.
pub fn render(records: &[Record]) -> Result<String> {
    let Some(first) = records.first() else {
        return Ok(NO_RESULTS_PLACEHOLDER.to_string());
    };

    let columns = first.columns();
    for record in records {
        let other = record.columns();
        if other != columns {
            bail!(
                "table records disagree on columns: expected [{}], got [{}]",
                columns.join(", "),
                other.join(", ")
            );
        }
    }

    // Column widths from header and all cell values
    let mut widths: Vec<usize> = columns.iter().map(|c| c.width()).collect();
    for record in records {
        for (i, value) in record.values().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(value.width());
            }
        }
    }

    let mut out = String::new();

    let header = format_row(&columns, &widths);
    out.push_str(&header.bold().to_string());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule_refs: Vec<&str> = rule.iter().map(String::as_str).collect();
    out.push_str(&format_row(&rule_refs, &widths));
    out.push('\n');

    for record in records {
        let cells: Vec<&str> = record.values().collect();
        let line = format_row(&cells, &widths);
        out.push_str(&record.style.paint(&line));
        out.push('\n');
    }

    // Drop the trailing newline; callers println! the result
    out.pop();
    Ok(out)
}

/// Pads cells to their column widths and joins them into one line.
fn format_row(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        let width = widths.get(i).copied().unwrap_or(0);
        let padding = width.saturating_sub(cell.width());
        line.push_str(cell);
        if i + 1 < cells.len() {
            line.push_str(&" ".repeat(padding + COLUMN_SPACING));
        }
    }
    line
}
