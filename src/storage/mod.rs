//! Storage layer for the todo list.
//!
//! Todo items live in a single SQLite table (`todos`). Every operation opens its
//! own connection, runs one statement and drops the connection before returning,
//! so no handle outlives a call. Mutations run in a one-statement transaction that
//! is committed only when a row was affected.

use crate::Result;
use crate::models::TodoItem;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OptionalExtension, Params, Row, params};
use std::fs;
use std::path::{Path, PathBuf};

/// Default database file name, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "todo.db";

/// Format SQLite uses for `CURRENT_TIMESTAMP` (always UTC).
pub const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        task TEXT NOT NULL,
        completed INTEGER NOT NULL DEFAULT 0,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    );
"#;

const SELECT_COLUMNS: &str = "SELECT id, task, completed, created_at FROM todos";

/// Result of a mutation keyed on a todo id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// Exactly one row was changed and committed
    Applied,
    /// No row has that id; nothing was written
    NotFound,
}

impl RowOutcome {
    pub fn is_applied(self) -> bool {
        self == RowOutcome::Applied
    }
}

/// Todo list persisted to a SQLite database file.
#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    /// Create a store backed by the database file at `path`.
    ///
    /// Nothing is opened until an operation runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Create the `todos` table if it does not exist yet.
    ///
    /// Safe to call on every run. Missing parent directories are created.
    pub fn init(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = self.connect()?;
        conn.execute_batch(SCHEMA)?;
        tracing::debug!(path = %self.path.display(), "todo schema ready");
        Ok(())
    }

    /// Insert a new, incomplete item and return its id.
    pub fn add(&self, task: &str) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute("INSERT INTO todos (task) VALUES (?1)", params![task])?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, "todo added");
        Ok(id)
    }

    /// All items, ordered by id.
    pub fn list(&self) -> Result<Vec<TodoItem>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
        let items = stmt
            .query_map([], row_to_item)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    /// Get a single item by id.
    pub fn get(&self, id: i64) -> Result<Option<TodoItem>> {
        let conn = self.connect()?;
        let item = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                row_to_item,
            )
            .optional()?;
        Ok(item)
    }

    /// Replace the text of an item.
    pub fn update(&self, id: i64, task: &str) -> Result<RowOutcome> {
        self.mutate(
            "UPDATE todos SET task = ?1 WHERE id = ?2",
            params![task, id],
        )
    }

    /// Remove an item. Its id is never handed out again.
    pub fn delete(&self, id: i64) -> Result<RowOutcome> {
        self.mutate("DELETE FROM todos WHERE id = ?1", params![id])
    }

    /// Mark an item complete (`true`) or incomplete (`false`).
    pub fn set_completed(&self, id: i64, completed: bool) -> Result<RowOutcome> {
        self.mutate(
            "UPDATE todos SET completed = ?1 WHERE id = ?2",
            params![completed, id],
        )
    }

    fn mutate<P: Params>(&self, sql: &str, params: P) -> Result<RowOutcome> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let changed = tx.execute(sql, params)?;

        if changed == 0 {
            tx.rollback()?;
            tracing::debug!(sql, "no matching todo");
            return Ok(RowOutcome::NotFound);
        }

        tx.commit()?;
        tracing::debug!(sql, changed, "todo updated");
        Ok(RowOutcome::Applied)
    }
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<TodoItem> {
    let id: i64 = row.get(0)?;
    let created_at = match row.get_ref(3)? {
        ValueRef::Null => None,
        ValueRef::Integer(secs) => DateTime::from_timestamp(secs, 0),
        ValueRef::Text(bytes) => {
            let raw = String::from_utf8_lossy(bytes);
            let parsed = parse_timestamp(&raw);
            if parsed.is_none() {
                tracing::warn!(id, created_at = %raw, "unrecognized timestamp");
            }
            parsed
        }
        other => {
            tracing::warn!(id, kind = ?other.data_type(), "unsupported timestamp type");
            None
        }
    };

    Ok(TodoItem {
        id,
        task: row.get(1)?,
        completed: row.get(2)?,
        created_at,
    })
}

/// Parse the time-value forms SQLite accepts, assuming UTC when no offset is given.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];

    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Render a timestamp the way SQLite stores it, or `None` when the row has none.
pub fn format_timestamp(ts: Option<&DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format(SQLITE_TIMESTAMP_FORMAT).to_string(),
        None => "None".to_string(),
    }
}
