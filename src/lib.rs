//! Taskboard - small task tracking building blocks.
//!
//! This library provides two independent components:
//! - [`registry::TaskManagementSystem`] - an in-memory registry of projects and their tasks
//! - [`storage::TodoStore`] - a todo list persisted to a single SQLite table, driven by the
//!   `todo` CLI

pub mod cli;
pub mod commands;
pub mod logging;
pub mod models;
pub mod registry;
pub mod storage;


/// Library-level error type for Taskboard operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("{0}")]
    NotFound(String),
}

/// Result type alias for Taskboard operations.
pub type Result<T> = std::result::Result<T, Error>;
