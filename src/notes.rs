//! # Notes
//!
//! File system enumeration for note files.
//!
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::constants::{DEFAULT_NOTES_DIR, NOTE_FILE_EXTENSION};

/// Resolves the effective notes root from positional path arguments.
///
/// The surface accepts multiple path tokens but only the first one is
/// meaningful; extras are ignored. With no arguments the default notes
/// directory is used. A leading `~` is expanded against the user's home.
pub fn resolve_root(paths: &[PathBuf]) -> PathBuf {
    let raw = paths
        .first()
        .map_or_else(|| PathBuf::from(DEFAULT_NOTES_DIR), Clone::clone);
    expand_home(&raw)
}

/// Expands a leading `~` or `~/` to the user's home directory.
///
/// Paths that are not valid UTF-8 or don't start with `~` pass through
/// unchanged, as does everything when no home directory can be determined.
fn expand_home(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };

    if raw == "~" {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }

    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    path.to_path_buf()
}

/// Walks all note files under the given root, recursively.
///
/// Only regular files with the markdown extension are yielded, in
/// filesystem-traversal order. A missing or unreadable root yields zero
/// results; a partial corpus beats aborting a read-only scan.
pub fn walk_notes(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == NOTE_FILE_EXTENSION)
        })
        .map(walkdir::DirEntry::into_path)
}
