//! Data models for Taskboard entities.
//!
//! This module defines the core data structures:
//! - `Task` - A unit of work with a title, description and status
//! - `Project` - A named, ordered collection of tasks
//! - `TodoItem` - A row of the persisted todo list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status in the workflow.
///
/// The only transition is `Pending` -> `Completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "Pending"),
            TaskStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// A unit of work owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task title
    pub title: String,

    /// Detailed description
    pub description: String,

    /// Current status
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    /// Create a new pending task.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: TaskStatus::default(),
        }
    }

    /// Mark the task as completed. Calling this again has no further effect.
    pub fn mark_complete(&mut self) {
        self.status = TaskStatus::Completed;
    }

    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }
}

/// A named collection of tasks, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name, also its key in the registry
    pub name: String,

    /// Tasks in the order they were added
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    /// Create an empty project.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// Append a task. Duplicates are allowed.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Tasks still pending, in insertion order.
    pub fn get_pending_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_pending()).collect()
    }
}

/// A todo list entry persisted by [`crate::storage::TodoStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Row id assigned by the store, never reused
    pub id: i64,

    /// Task text
    pub task: String,

    /// Completion flag
    pub completed: bool,

    /// Creation timestamp, assigned by the store. `None` if the row has no
    /// readable timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("Write docs", "Cover the CLI");
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.is_pending());
    }

    #[test]
    fn test_mark_complete_is_idempotent() {
        let mut task = Task::new("Ship", "Cut the release");
        task.mark_complete();
        assert_eq!(task.status, TaskStatus::Completed);

        task.mark_complete();
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(!task.is_pending());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(TaskStatus::Pending.to_string(), "Pending");
        assert_eq!(TaskStatus::Completed.to_string(), "Completed");
    }

    #[test]
    fn test_status_serializes_as_display_name() {
        let json = serde_json::to_string(&TaskStatus::Completed).unwrap();
        assert_eq!(json, "\"Completed\"");

        let task: Task =
            serde_json::from_str(r#"{"title":"t","description":"d"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_project_add_task_keeps_order_and_duplicates() {
        let mut project = Project::new("Dev");
        project.add_task(Task::new("A", ""));
        project.add_task(Task::new("B", ""));
        project.add_task(Task::new("A", ""));

        let titles: Vec<&str> = project.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_get_pending_tasks_preserves_order() {
        let mut project = Project::new("Dev");
        project.add_task(Task::new("first", ""));
        project.add_task(Task::new("second", ""));
        project.add_task(Task::new("third", ""));
        project.tasks[1].mark_complete();

        let pending = project.get_pending_tasks();
        let titles: Vec<&str> = pending.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "third"]);
        assert_eq!(project.tasks.len(), 3);
    }

    #[test]
    fn test_get_pending_tasks_empty_project() {
        let project = Project::new("Empty");
        assert!(project.get_pending_tasks().is_empty());
    }
}
