//! # Commands
//!
//! CLI command implementations for notedog.
//!
//! Licensed under the MIT License.

pub mod completions;
pub mod ls;
pub mod todos;

pub use self::{
    completions::execute as completions,
    ls::execute as ls,
    todos::execute as todos,
};
