//! CLI argument definitions for the `todo` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::storage::DEFAULT_DB_PATH;

/// Todo List App using SQLite.
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, about = "Todo List App using SQLite", long_about = None)]
pub struct Cli {
    /// Output JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the SQLite database file.
    /// Can also be set via TODO_DB environment variable.
    #[arg(long = "db", global = true, env = "TODO_DB", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Log debug output to stderr (overrides TODO_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task description
        task: String,
    },

    /// List all tasks
    List,

    /// Delete a task by id
    Delete {
        /// Task id
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Update a task by id
    Update {
        /// Task id
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// New task description
        task: String,
    },

    /// Mark a task as completed
    Complete {
        /// Task id
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Mark a task as incomplete
    Incomplete {
        /// Task id
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

impl Commands {
    /// Command name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Add { .. } => "add",
            Commands::List => "list",
            Commands::Delete { .. } => "delete",
            Commands::Update { .. } => "update",
            Commands::Complete { .. } => "complete",
            Commands::Incomplete { .. } => "incomplete",
        }
    }
}
