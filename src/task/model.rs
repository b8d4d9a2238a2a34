//! Task model definitions

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority level
///
/// Ordering follows severity: `High` ranks above `Medium` above `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

fn default_category() -> String {
    "general".to_string()
}

/// A task in the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: TaskPriority,
    /// Grouping label; there is no editing surface for it, so every task
    /// stays in "general" until one exists.
    #[serde(default = "default_category")]
    pub category: String,
}

impl Task {
    /// Create a new task with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
            due_date: None,
            priority: TaskPriority::default(),
            category: default_category(),
        }
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// A deleted task parked in the undo buffer
#[derive(Debug, Clone)]
pub struct DeletedTask {
    pub task: Task,
    pub deleted_at: DateTime<Utc>,
}

/// Partial update for a task
///
/// Fields left as `None` are untouched. For the due date the outer option
/// selects whether to touch the field at all and the inner one carries the
/// new value, so `Some(None)` clears the deadline.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
    pub priority: Option<TaskPriority>,
}
