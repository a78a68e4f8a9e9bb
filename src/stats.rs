//! # Stats
//!
//! Cheap per-file statistics, independent of the annotation grammar.
//!
//! Licensed under the MIT License.

/// Word and bare-TODO counts for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileStats {
    /// Whitespace-separated token count
    pub words: usize,
    /// Lines starting with the bare `TODO` keyword
    pub todos: usize,
}

/// Computes statistics for one file's text.
pub fn scan_contents(text: &str) -> FileStats {
    FileStats {
        words: text.split_whitespace().count(),
        todos: text.lines().filter(|line| is_bare_todo(line)).count(),
    }
}

/// A line counts as a bare TODO when it starts with the case-sensitive
/// keyword, terminated by end of line, a colon, or whitespace.
fn is_bare_todo(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("TODO") else {
        return false;
    };
    match rest.chars().next() {
        None | Some(':') => true,
        Some(c) => c.is_whitespace(),
    }
}
