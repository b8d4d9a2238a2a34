//! Task store
//!
//! Owns the live task sequence and the undo buffer, and applies every
//! mutation the engine supports. Exactly one caller mutates the store at a
//! time (the embedding UI event loop), so all operations are synchronous and
//! run to completion; on any failure the store is left exactly as it was.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use super::model::{DeletedTask, Task, TaskPatch, TaskPriority};
use super::query::{self, TaskQuery, TaskView};
use super::snapshot;
use crate::{Error, Result};

/// Owning state for the task collection
///
/// Insertion order of the live sequence is the canonical order; every
/// derived view is computed from it on demand. The undo buffer is
/// append-only until [`TaskStore::undo_last`] pops its tail.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    deleted: Vec<DeletedTask>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new task with the given text
    ///
    /// Surrounding whitespace is trimmed; text that is empty after trimming
    /// is rejected. Callers that want the silent-ignore behavior of a form
    /// submission discard the error.
    pub fn add(
        &mut self,
        text: &str,
        due_date: Option<NaiveDate>,
        priority: Option<TaskPriority>,
    ) -> Result<Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidInput("Task text is required".to_string()));
        }

        let mut task = Task::new(text);
        if let Some(due_date) = due_date {
            task = task.with_due_date(due_date);
        }
        if let Some(priority) = priority {
            task = task.with_priority(priority);
        }

        debug!(id = %task.id, "task added");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Remove a task and park it in the undo buffer
    ///
    /// The caller is expected to have confirmed the deletion with the user
    /// exactly once before calling.
    pub fn remove(&mut self, id: Uuid) -> Result<Task> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return Err(Error::TaskNotFound(id));
        };

        let task = self.tasks.remove(index);
        self.deleted.push(DeletedTask {
            task: task.clone(),
            deleted_at: Utc::now(),
        });
        debug!(id = %id, "task removed");
        Ok(task)
    }

    /// Restore the most recently deleted task
    ///
    /// Pops the undo buffer's tail, appends the task back at the end of the
    /// live sequence, and returns it. Returns `None` when nothing has been
    /// deleted.
    pub fn undo_last(&mut self) -> Option<Task> {
        let entry = self.deleted.pop()?;
        debug!(id = %entry.task.id, "task restored");
        self.tasks.push(entry.task.clone());
        Some(entry.task)
    }

    /// Apply a partial update to a task
    ///
    /// Only the supplied fields change; supplied text is trimmed and must
    /// not be empty.
    pub fn update(&mut self, id: Uuid, patch: TaskPatch) -> Result<Task> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return Err(Error::TaskNotFound(id));
        };

        let text = match patch.text {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(Error::InvalidInput("Task text is required".to_string()));
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        let task = &mut self.tasks[index];
        if let Some(text) = text {
            task.text = text;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        Ok(task.clone())
    }

    /// Flip a task's completion state
    pub fn toggle(&mut self, id: Uuid) -> Result<Task> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Err(Error::TaskNotFound(id));
        };

        task.completed = !task.completed;
        Ok(task.clone())
    }

    /// Get a task by ID
    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All live tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of live tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the live sequence is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Derive the filtered and sorted view plus summary counts
    ///
    /// `now` is supplied by the caller so overdue status is reproducible.
    pub fn query(&self, criteria: &TaskQuery, now: DateTime<Utc>) -> TaskView {
        query::run(&self.tasks, criteria, now)
    }

    /// Export the live sequence as a JSON snapshot
    pub fn export(&self) -> Result<String> {
        snapshot::render(&self.tasks)
    }

    /// Append the tasks from a JSON snapshot
    ///
    /// The payload is parsed in full before anything is appended, so a
    /// malformed snapshot leaves the store untouched. Imported tasks keep
    /// their ids and fields verbatim; nothing re-keys them against the
    /// existing sequence.
    pub fn import(&mut self, text: &str) -> Result<usize> {
        let tasks = snapshot::parse(text)?;
        let count = tasks.len();
        self.tasks.extend(tasks);
        info!(count, "snapshot imported");
        Ok(count)
    }
}
