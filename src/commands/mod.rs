//! Command implementations for the `todo` CLI.
//!
//! Each function runs one store operation and returns a result that can be
//! rendered as JSON or as the human-readable line the CLI prints. A missing id
//! is reported through the result, not as an error.

use crate::models::TodoItem;
use crate::storage::{TodoStore, format_timestamp};
use crate::{Error, Result};
use serde::Serialize;

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output: Serialize {
    /// Serialize to JSON string.
    fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
    }

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

#[derive(Serialize)]
pub struct AddResult {
    #[serde(flatten)]
    pub todo: TodoItem,
}

impl Output for AddResult {
    fn to_human(&self) -> String {
        format!("Task added with id: {}", self.todo.id)
    }
}

/// Add a new task and read it back with its store-assigned fields.
pub fn add(store: &TodoStore, task: &str) -> Result<AddResult> {
    let id = store.add(task)?;
    let todo = store
        .get(id)?
        .ok_or_else(|| Error::NotFound(format!("Task not found after insert: {}", id)))?;
    Ok(AddResult { todo })
}

#[derive(Serialize)]
pub struct ListResult {
    pub count: usize,
    pub todos: Vec<TodoItem>,
}

impl Output for ListResult {
    fn to_human(&self) -> String {
        if self.todos.is_empty() {
            return "No tasks found.".to_string();
        }

        self.todos
            .iter()
            .map(|item| {
                let status = if item.completed { "✓" } else { " " };
                format!(
                    "[{}] [{}] {} (Created: {})",
                    item.id,
                    status,
                    item.task,
                    format_timestamp(item.created_at.as_ref())
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List all tasks ordered by id.
pub fn list(store: &TodoStore) -> Result<ListResult> {
    let todos = store.list()?;
    Ok(ListResult {
        count: todos.len(),
        todos,
    })
}

/// Kind of change requested on a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Change {
    Deleted,
    Updated,
    Completed,
    Incomplete,
}

#[derive(Serialize)]
pub struct ChangeResult {
    pub id: i64,
    pub action: Change,
    pub found: bool,
}

impl Output for ChangeResult {
    fn to_human(&self) -> String {
        if !self.found {
            return format!("No task found with id: {}", self.id);
        }

        match self.action {
            Change::Deleted => "Task deleted.".to_string(),
            Change::Updated => "Task updated.".to_string(),
            Change::Completed => "Task marked as completed.".to_string(),
            Change::Incomplete => "Task marked as incomplete.".to_string(),
        }
    }
}

/// Delete a task by id.
pub fn delete(store: &TodoStore, id: i64) -> Result<ChangeResult> {
    let outcome = store.delete(id)?;
    Ok(ChangeResult {
        id,
        action: Change::Deleted,
        found: outcome.is_applied(),
    })
}

/// Replace the text of a task.
pub fn update(store: &TodoStore, id: i64, task: &str) -> Result<ChangeResult> {
    let outcome = store.update(id, task)?;
    Ok(ChangeResult {
        id,
        action: Change::Updated,
        found: outcome.is_applied(),
    })
}

/// Mark a task complete or incomplete.
pub fn mark_complete(store: &TodoStore, id: i64, complete: bool) -> Result<ChangeResult> {
    let outcome = store.set_completed(id, complete)?;
    Ok(ChangeResult {
        id,
        action: if complete {
            Change::Completed
        } else {
            Change::Incomplete
        },
        found: outcome.is_applied(),
    })
}
