//! # notedog
//!
//! A console tool that digs through a directory of markdown notes and
//! surfaces informal `TODO` / `IDEA` / `DONE` annotations embedded in
//! free-form text.
//!
//! ## Features
//!
//! - **Plain Markdown**: notes stay ordinary `.md` files, no sidecar state
//! - **Annotation Micro-Syntax**: `TODO: buy milk {by:2026-03-01}` with
//!   nested `- [ ]` checkbox subtasks
//! - **Due Dates**: `{by:...}` tags compute days remaining and urgency color
//! - **File Listing**: per-file word counts, TODO counts, and relative age
//!
//! Licensed under the MIT License.

pub mod commands;
pub mod constants;
pub mod notes;
pub mod scan;
pub mod stats;
pub mod table;

pub use scan::{Annotation, Status, Subtask};
pub use table::{Record, Style};
