//! # Test Support
//!
//! Shared helpers for integration tests: builds throwaway note trees in
//! temporary directories.
//!
//! Licensed under the MIT License.

// Each integration test binary compiles this module separately and uses
// a different subset of the helpers.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use tempfile::TempDir;

/// A temporary notes directory populated by tests.
pub struct NotesDir {
    dir: TempDir,
}

impl NotesDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp notes dir"),
        }
    }

    /// Returns the root path of the notes tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the root as the positional argument vector commands take.
    pub fn args(&self) -> Vec<PathBuf> {
        vec![self.root().to_path_buf()]
    }

    /// Writes a note file, creating parent directories as needed.
    pub fn write_note(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create note parent dir");
        }
        fs::write(&path, content).expect("Failed to write note");
        path
    }
}

/// A frozen reference instant for deterministic date math.
pub fn frozen_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 1, 10, 12, 0, 0)
        .single()
        .expect("valid frozen time")
}
