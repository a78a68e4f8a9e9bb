//! # Scan
//!
//! The annotation scanner: a single-pass, line-oriented state machine that
//! recognizes `TODO` / `IDEA` / `DONE` marker lines, absorbs checkbox
//! subtasks nested under them, and interprets inline `{key:value}` tags.
//!
//! Licensed under the MIT License.

pub mod tags;

use std::fmt;

use chrono::NaiveDate;

use crate::constants::TAG_SEPARATOR;
use crate::table::Style;

/// Annotation status keyword.
///
/// Only these three literals start an annotation; any other leading word
/// leaves the line unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Todo,
    Idea,
    Done,
}

impl Status {
    const KEYWORDS: &'static [(&'static str, Self)] =
        &[("TODO", Self::Todo), ("IDEA", Self::Idea), ("DONE", Self::Done)];

    /// Status-level display style, applied when no tag supplied an override.
    const fn default_style(self) -> Style {
        match self {
            Self::Todo => Style::Default,
            Self::Idea => Style::Info,
            Self::Done => Style::Muted,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todo => write!(f, "TODO"),
            Self::Idea => write!(f, "IDEA"),
            Self::Done => write!(f, "DONE"),
        }
    }
}

/// A checkbox line nested under an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtask {
    pub checked: bool,
    pub description: String,
}

/// One recognized annotation with its interpreted tags and subtasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Name of the file the annotation was found in
    pub file: String,
    /// Status keyword that opened the annotation
    pub status: Status,
    /// Free text up to the first `{` or end of line
    pub description: String,
    /// Interpreted tag display strings, joined in encounter order
    pub tags: String,
    /// Derived display style (tag override beats status default)
    pub style: Style,
    /// Checkbox lines absorbed while the annotation was open
    pub subtasks: Vec<Subtask>,
}

/// A marker line split into its parts, before tag interpretation.
struct Marker<'a> {
    status: Status,
    description: &'a str,
    tag_block: Option<&'a str>,
}

/// Scans one file's text and returns its annotations in file-text order.
///
/// `today` is the reference date for due-date tags; callers capture it once
/// per invocation so repeated scans of unchanged text are identical.
pub fn scan_text(file: &str, text: &str, today: NaiveDate) -> Vec<Annotation> {
    let mut annotations = Vec::new();
    let mut active: Option<Annotation> = None;

    for line in text.lines() {
        if let Some(marker) = parse_marker(line) {
            // A new marker closes any open annotation
            if let Some(open) = active.take() {
                annotations.push(open);
            }
            active = Some(build_annotation(file, &marker, today));
        } else if let Some(mut open) = active.take() {
            if let Some(subtask) = parse_checkbox(line) {
                open.subtasks.push(subtask);
                active = Some(open);
            } else {
                // Any other line closes the annotation without being consumed
                annotations.push(open);
            }
        }
    }

    annotations.extend(active);
    annotations
}

/// Strips an optional `- ` bullet, tolerating whitespace around the dash.
fn strip_bullet(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix('-').map(str::trim_start)
}

/// Tries to read a line as an annotation start.
///
/// Without a bullet the keyword must sit at column zero. The keyword must
/// be delimited by `:`, whitespace, or a tag block; `TODOing` is prose, not
/// an annotation. The description must be non-empty.
fn parse_marker(line: &str) -> Option<Marker<'_>> {
    let body = strip_bullet(line).unwrap_or(line);

    let &(keyword, status) = Status::KEYWORDS
        .iter()
        .find(|(keyword, _)| body.starts_with(keyword))?;
    let after = &body[keyword.len()..];

    let delimited = after.is_empty()
        || after.starts_with(':')
        || after.starts_with('{')
        || after.starts_with(char::is_whitespace);
    if !delimited {
        return None;
    }

    let after = after.strip_prefix(':').unwrap_or(after);
    let rest = after.trim_start();

    let (description, tag_block) = match rest.find('{') {
        Some(idx) => (rest[..idx].trim_end(), Some(&rest[idx..])),
        None => (rest.trim_end(), None),
    };
    if description.is_empty() {
        return None;
    }

    Some(Marker {
        status,
        description,
        tag_block,
    })
}

/// Tries to read a line as a checkbox subtask: optional bullet, then
/// `[ ]` or `[x]`, then a description.
fn parse_checkbox(line: &str) -> Option<Subtask> {
    let trimmed = line.trim_start();
    let body = strip_bullet(line).unwrap_or(trimmed);

    let rest = body.strip_prefix('[')?;
    let mut chars = rest.chars();
    let checked = match chars.next()? {
        'x' => true,
        ' ' => false,
        _ => return None,
    };
    let description = chars.as_str().strip_prefix(']')?;

    Some(Subtask {
        checked,
        description: description.trim().to_string(),
    })
}

/// Extracts `{key:value}` segments from a trailing tag block.
///
/// Segments without a colon, or with an empty key or value, are skipped.
fn tag_segments(block: &str) -> Vec<(&str, &str)> {
    let mut segments = Vec::new();
    let mut rest = block;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let inner = &after[..close];
        if let Some((key, value)) = inner.split_once(':') {
            if !key.is_empty() && !value.is_empty() {
                segments.push((key, value));
            }
        }
        rest = &after[close + 1..];
    }

    segments
}

/// Builds an annotation from a parsed marker line.
///
/// Tag display strings join in encounter order; the last non-empty style
/// override from a tag wins over the status-level default.
fn build_annotation(file: &str, marker: &Marker<'_>, today: NaiveDate) -> Annotation {
    let mut displays = Vec::new();
    let mut tag_style = None;

    if let Some(block) = marker.tag_block {
        for (key, value) in tag_segments(block) {
            let (display, style) = tags::interpret(key, value, today);
            displays.push(display);
            if style.is_some() {
                tag_style = style;
            }
        }
    }

    Annotation {
        file: file.to_string(),
        status: marker.status,
        description: marker.description.to_string(),
        tags: displays.join(TAG_SEPARATOR),
        style: tag_style.unwrap_or_else(|| marker.status.default_style()),
        subtasks: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_plain_todo_line() {
        let found = scan_text("a.md", "TODO: buy milk", date(2024, 1, 10));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, Status::Todo);
        assert_eq!(found[0].description, "buy milk");
        assert_eq!(found[0].tags, "");
        assert_eq!(found[0].style, Style::Default);
        assert!(found[0].subtasks.is_empty());
    }

    #[test]
    fn test_each_keyword_maps_to_its_status() {
        let text = "TODO: one\nIDEA: two\nDONE: three";
        let found = scan_text("a.md", text, date(2024, 1, 10));
        let statuses: Vec<Status> = found.iter().map(|a| a.status).collect();
        assert_eq!(statuses, vec![Status::Todo, Status::Idea, Status::Done]);
    }

    #[test]
    fn test_bulleted_marker_and_optional_colon() {
        let found = scan_text("a.md", "- IDEA write a parser", date(2024, 1, 10));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, Status::Idea);
        assert_eq!(found[0].description, "write a parser");
    }

    #[test]
    fn test_indented_keyword_without_bullet_is_ignored() {
        let found = scan_text("a.md", "  TODO: not at column zero", date(2024, 1, 10));
        assert!(found.is_empty());
    }

    #[test]
    fn test_unrecognized_leading_word_is_ignored() {
        let text = "NOTE: nothing here\nTODOing things today\nMAYBE later";
        assert!(scan_text("a.md", text, date(2024, 1, 10)).is_empty());
    }

    #[test]
    fn test_empty_description_is_not_an_annotation() {
        assert!(scan_text("a.md", "TODO:", date(2024, 1, 10)).is_empty());
        assert!(scan_text("a.md", "TODO: {by:2024-01-01}", date(2024, 1, 10)).is_empty());
    }

    #[test]
    fn test_done_is_muted_regardless_of_tags() {
        let found = scan_text("a.md", "DONE pay rent {project:home}", date(2024, 1, 10));
        assert_eq!(found[0].status, Status::Done);
        assert_eq!(found[0].style, Style::Muted);
        assert_eq!(found[0].tags, "project:home");
    }

    #[test]
    fn test_idea_is_info_styled() {
        let found = scan_text("a.md", "IDEA: teach the dog to file taxes", date(2024, 1, 10));
        assert_eq!(found[0].style, Style::Info);
    }

    #[test]
    fn test_due_date_tag_overrides_status_style() {
        let found = scan_text(
            "a.md",
            "TODO: buy milk {by:2024-01-01}",
            date(2024, 1, 10),
        );
        assert_eq!(found[0].tags, "by 2024-01-01 (-9)");
        assert_eq!(found[0].style, Style::Urgent);
    }

    #[test]
    fn test_multiple_tags_join_in_order() {
        let found = scan_text(
            "a.md",
            "TODO: ship it {project:dog} {by:2024-01-20}",
            date(2024, 1, 10),
        );
        assert_eq!(found[0].tags, "project:dog | by 2024-01-20 (10)");
        assert_eq!(found[0].style, Style::Warning);
    }

    #[test]
    fn test_last_style_override_wins() {
        let found = scan_text(
            "a.md",
            "TODO: double booked {by:2024-01-01} {by:2024-02-01}",
            date(2024, 1, 10),
        );
        assert_eq!(found[0].style, Style::Warning);
        assert_eq!(found[0].tags, "by 2024-01-01 (-9) | by 2024-02-01 (22)");
    }

    #[test]
    fn test_checkbox_lines_become_subtasks() {
        let text = "TODO: release\n- [ ] step one\n- [x] step two\n\nTODO: unrelated";
        let found = scan_text("a.md", text, date(2024, 1, 10));
        assert_eq!(found.len(), 2);
        assert_eq!(
            found[0].subtasks,
            vec![
                Subtask {
                    checked: false,
                    description: "step one".to_string()
                },
                Subtask {
                    checked: true,
                    description: "step two".to_string()
                },
            ]
        );
        assert!(found[1].subtasks.is_empty());
    }

    #[test]
    fn test_closing_line_may_start_next_annotation() {
        let text = "TODO: first\n- [ ] sub\nDONE second";
        let found = scan_text("a.md", text, date(2024, 1, 10));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].description, "first");
        assert_eq!(found[0].subtasks.len(), 1);
        assert_eq!(found[1].status, Status::Done);
    }

    #[test]
    fn test_end_of_file_closes_open_annotation() {
        let text = "prose\nTODO: last line\n- [x] done bit";
        let found = scan_text("a.md", text, date(2024, 1, 10));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].subtasks.len(), 1);
    }

    #[test]
    fn test_checkbox_without_open_annotation_is_ignored() {
        let found = scan_text("a.md", "- [x] orphan checkbox", date(2024, 1, 10));
        assert!(found.is_empty());
    }

    #[test]
    fn test_malformed_tag_segments_are_skipped() {
        let found = scan_text(
            "a.md",
            "TODO: odd tags {noval} {:x} {k:} {ok:yes}",
            date(2024, 1, 10),
        );
        assert_eq!(found[0].tags, "ok:yes");
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let text = "TODO: a {by:2024-03-01}\n- [ ] one\nIDEA: b";
        let today = date(2024, 1, 10);
        assert_eq!(scan_text("a.md", text, today), scan_text("a.md", text, today));
    }
}
