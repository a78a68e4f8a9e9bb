//! # notedog CLI
//!
//! Command-line interface for the notedog annotation scanner.
//!
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use notedog::commands;

const GLOBAL_HELP: &str = "\
Annotation Syntax (inside markdown notes):
  TODO: buy milk {by:2026-03-01}     Task with a due date
  IDEA brew own oat milk             Idea, colon optional
  DONE pay rent                      Completed, rendered dimmed
  - [ ] open subtask                 Checkbox under the line above
  - [x] finished subtask

Tags:
  {key:value}        Shown literally in the tags column
  {by:<date>}        Due date; computes days left, red when due or overdue

Getting Started:
  nd todos                       Scan ~/wiki for annotations
  nd todos ~/notes               Scan another directory
  nd ls ~/notes                  List files with word and TODO counts

Learn more:
  nd <COMMAND> --help            Show detailed help for a command";

#[derive(Parser)]
#[command(name = "nd")]
#[command(version)]
#[command(about = "Scan markdown notes for TODO/IDEA/DONE annotations")]
#[command(
    long_about = "notedog scans a directory tree of markdown notes for informal TODO, IDEA, and \
DONE annotations written inline in free-form text, and renders them as console tables.

Annotations can carry nested checkbox subtasks and inline {key:value} metadata tags. \
A {by:<date>} tag computes the days remaining and colors the row red when the task is \
due or overdue, yellow when a due date is coming up."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all annotations found in notes
    #[command(
        long_about = "Scan every markdown file under the notes directory and show all TODO, \
IDEA, and DONE annotations as one table.\n\n\
Columns: file, status, description, tags, subtasks. Rows are colored by urgency \
(due dates) or status (ideas blue, done dimmed).",
        after_help = "Examples:\n  \
nd todos                       Scan the default notes directory (~/wiki)\n  \
nd todos ~/notes               Scan a specific directory\n\n\
Output: a table on stdout, or 'no results' when nothing matches."
    )]
    Todos {
        /// Notes directory (defaults to ~/wiki; only the first value is used)
        dirname: Vec<PathBuf>,
    },

    /// List note files with word and TODO counts
    #[command(
        long_about = "List every markdown file under the notes directory with its last-modified \
age, word count, and bare-TODO line count.\n\n\
Files containing at least one TODO line are highlighted yellow.",
        after_help = "Examples:\n  \
nd ls                          List the default notes directory (~/wiki)\n  \
nd ls ~/notes                  List a specific directory"
    )]
    Ls {
        /// Notes directory (defaults to ~/wiki; only the first value is used)
        dirname: Vec<PathBuf>,
    },

    /// Generate shell completion scripts
    #[command(
        after_help = "Examples:\n  \
nd completions zsh > ~/.zfunc/_nd\n  \
nd completions bash > ~/.local/share/bash-completion/completions/nd"
    )]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Reference instant, captured once and passed down explicitly
    let now = Local::now();

    match cli.command {
        Commands::Todos { dirname } => commands::todos(&dirname, now),

        Commands::Ls { dirname } => commands::ls(&dirname, now),

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            commands::completions(shell, &mut cmd)
        }
    }
}
