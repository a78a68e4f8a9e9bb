//! # Constants
//!
//! Centralized constants for magic values used throughout notedog.
//!
//! Licensed under the MIT License.

// =============================================================================
// File System
// =============================================================================

/// Default notes directory when no path argument is given (home-relative).
pub const DEFAULT_NOTES_DIR: &str = "~/wiki";

/// File extension for note files.
pub const NOTE_FILE_EXTENSION: &str = "md";

// =============================================================================
// Annotation Syntax
// =============================================================================

/// Tag key that is interpreted as a due date.
pub const DUE_DATE_KEY: &str = "by";

/// Separator between interpreted tag display strings.
pub const TAG_SEPARATOR: &str = " | ";

/// Separator between subtask display strings in the todos table.
pub const SUBTASK_SEPARATOR: &str = "; ";

// =============================================================================
// Table Display
// =============================================================================

/// Placeholder printed instead of a table when there is nothing to show.
pub const NO_RESULTS_PLACEHOLDER: &str = "no results";

/// Number of spaces between table columns.
pub const COLUMN_SPACING: usize = 2;
