//! In-memory registry of projects and their tasks.
//!
//! The registry is plain process-local state with no persistence and no locking.
//! Projects are keyed by name; creating a project under an existing name replaces
//! the old project and drops its tasks.

use crate::models::{Project, Task};
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Top-level mapping from project name to project.
#[derive(Debug, Clone, Default)]
pub struct TaskManagementSystem {
    projects: BTreeMap<String, Project>,
}

impl TaskManagementSystem {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty project under `name`.
    ///
    /// An existing project with the same name is replaced, tasks included, and
    /// returned so the caller can tell an overwrite happened.
    pub fn create_project(&mut self, name: impl Into<String>) -> Option<Project> {
        let name = name.into();
        let replaced = self.projects.insert(name.clone(), Project::new(name.clone()));
        if let Some(old) = &replaced {
            tracing::warn!(
                project = %name,
                dropped_tasks = old.tasks.len(),
                "project recreated, previous tasks discarded"
            );
        } else {
            tracing::debug!(project = %name, "project created");
        }
        replaced
    }

    /// Append `task` to the named project.
    ///
    /// Fails with [`Error::NotFound`] if no project is registered under `name`;
    /// projects are never created implicitly.
    pub fn add_task_to_project(&mut self, name: &str, task: Task) -> Result<()> {
        let project = self
            .projects
            .get_mut(name)
            .ok_or_else(|| Error::NotFound(format!("Project not found: {}", name)))?;
        tracing::debug!(project = %name, title = %task.title, "task added");
        project.add_task(task);
        Ok(())
    }

    /// Pending tasks across every project.
    ///
    /// Projects are visited in name order; within a project, tasks keep their
    /// insertion order.
    pub fn get_all_pending_tasks(&self) -> Vec<&Task> {
        self.projects
            .values()
            .flat_map(|project| project.get_pending_tasks())
            .collect()
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    pub fn project_mut(&mut self, name: &str) -> Option<&mut Project> {
        self.projects.get_mut(name)
    }

    /// Iterate over all projects in name order.
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
