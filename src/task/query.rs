//! Derived task views
//!
//! A pure function of the live sequence and the UI-selected criteria. The
//! current time is an explicit parameter so overdue status is reproducible;
//! it is derived at evaluation, never stored on the task.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::model::{Task, TaskPriority};

/// Which tasks to include in the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    All,
    Completed,
    Pending,
    Overdue,
    Priority(TaskPriority),
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self::All
    }
}

/// How to order the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskSort {
    /// Most recently created first
    Created,
    /// Highest severity first
    Priority,
    /// Earliest deadline first; tasks without one sort last
    DueDate,
    /// Case-insensitive by text
    Alphabetical,
}

impl Default for TaskSort {
    fn default() -> Self {
        Self::Created
    }
}

/// UI-selected view criteria
///
/// The filter and the search term compose with AND semantics; a task must
/// pass both to be included.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuery {
    #[serde(default)]
    pub filter: TaskFilter,
    #[serde(default)]
    pub sort: TaskSort,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Counts over the full live sequence, regardless of the active filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// The derived view: tasks passing the criteria plus summary counts
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    pub tasks: Vec<Task>,
    pub summary: TaskSummary,
}

fn trim_to_none(value: Option<&str>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.completed && task.due_date.is_some_and(|due| due < today)
}

pub(super) fn run(tasks: &[Task], criteria: &TaskQuery, now: DateTime<Utc>) -> TaskView {
    let today = now.date_naive();

    let summary = TaskSummary {
        total: tasks.len(),
        completed: tasks.iter().filter(|t| t.completed).count(),
        pending: tasks.iter().filter(|t| !t.completed).count(),
        overdue: tasks.iter().filter(|t| is_overdue(t, today)).count(),
    };

    let mut tasks: Vec<Task> = tasks.to_vec();
    match criteria.filter {
        TaskFilter::All => {}
        TaskFilter::Completed => tasks.retain(|t| t.completed),
        TaskFilter::Pending => tasks.retain(|t| !t.completed),
        TaskFilter::Overdue => tasks.retain(|t| is_overdue(t, today)),
        TaskFilter::Priority(priority) => tasks.retain(|t| t.priority == priority),
    }
    if let Some(search) = trim_to_none(criteria.search.as_deref()) {
        let needle = search.to_lowercase();
        tasks.retain(|t| t.text.to_lowercase().contains(&needle));
    }

    // Vec::sort_by is stable, so every ordering keeps ties in their prior
    // relative order.
    match criteria.sort {
        TaskSort::Created => tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        TaskSort::Priority => tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
        TaskSort::DueDate => tasks.sort_by(|a, b| match (a.due_date, b.due_date) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        TaskSort::Alphabetical => {
            tasks.sort_by(|a, b| a.text.to_lowercase().cmp(&b.text.to_lowercase()))
        }
    }

    TaskView { tasks, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn completed(mut task: Task) -> Task {
        task.completed = true;
        task
    }

    #[test]
    fn test_overdue_and_completed_filters_with_summary() {
        let tasks = vec![
            Task::new("Buy milk")
                .with_priority(TaskPriority::High)
                .with_due_date(date(2026, 8, 5)),
            completed(Task::new("Walk dog").with_priority(TaskPriority::Low)),
        ];

        let overdue = run(
            &tasks,
            &TaskQuery {
                filter: TaskFilter::Overdue,
                ..Default::default()
            },
            fixed_now(),
        );
        assert_eq!(overdue.tasks.len(), 1);
        assert_eq!(overdue.tasks[0].text, "Buy milk");

        let done = run(
            &tasks,
            &TaskQuery {
                filter: TaskFilter::Completed,
                ..Default::default()
            },
            fixed_now(),
        );
        assert_eq!(done.tasks.len(), 1);
        assert_eq!(done.tasks[0].text, "Walk dog");

        assert_eq!(
            overdue.summary,
            TaskSummary {
                total: 2,
                completed: 1,
                pending: 1,
                overdue: 1,
            }
        );
    }

    #[test]
    fn test_overdue_excludes_completed_and_undated() {
        let tasks = vec![
            // Past due date but already completed
            completed(Task::new("Old chore").with_due_date(date(2026, 8, 1))),
            // Pending but no deadline
            Task::new("Someday"),
            // Due today is not overdue, the comparison is strict
            Task::new("Due today").with_due_date(date(2026, 8, 6)),
        ];

        let view = run(
            &tasks,
            &TaskQuery {
                filter: TaskFilter::Overdue,
                ..Default::default()
            },
            fixed_now(),
        );
        assert!(view.tasks.is_empty());
        assert_eq!(view.summary.overdue, 0);
    }

    #[test]
    fn test_priority_filter() {
        let tasks = vec![
            Task::new("Urgent").with_priority(TaskPriority::High),
            Task::new("Routine"),
            Task::new("Later").with_priority(TaskPriority::Low),
        ];

        let view = run(
            &tasks,
            &TaskQuery {
                filter: TaskFilter::Priority(TaskPriority::High),
                ..Default::default()
            },
            fixed_now(),
        );
        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.tasks[0].text, "Urgent");
    }

    #[test]
    fn test_priority_sort_is_stable() {
        let tasks = vec![
            Task::new("low").with_priority(TaskPriority::Low),
            Task::new("high first").with_priority(TaskPriority::High),
            Task::new("medium").with_priority(TaskPriority::Medium),
            Task::new("high second").with_priority(TaskPriority::High),
        ];

        let view = run(
            &tasks,
            &TaskQuery {
                sort: TaskSort::Priority,
                ..Default::default()
            },
            fixed_now(),
        );
        let texts: Vec<&str> = view.tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["high first", "high second", "medium", "low"]);
    }

    #[test]
    fn test_created_sort_descending() {
        let base = fixed_now();
        let mut older = Task::new("older");
        older.created_at = base - Duration::hours(2);
        let mut newer = Task::new("newer");
        newer.created_at = base - Duration::hours(1);

        let view = run(
            &[older, newer],
            &TaskQuery::default(),
            fixed_now(),
        );
        let texts: Vec<&str> = view.tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["newer", "older"]);
    }

    #[test]
    fn test_due_date_sort_puts_undated_last() {
        let tasks = vec![
            Task::new("no deadline a"),
            Task::new("later").with_due_date(date(2026, 9, 1)),
            Task::new("no deadline b"),
            Task::new("soon").with_due_date(date(2026, 8, 10)),
        ];

        let view = run(
            &tasks,
            &TaskQuery {
                sort: TaskSort::DueDate,
                ..Default::default()
            },
            fixed_now(),
        );
        let texts: Vec<&str> = view.tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["soon", "later", "no deadline a", "no deadline b"]);
    }

    #[test]
    fn test_alphabetical_sort_ignores_case() {
        let tasks = vec![
            Task::new("banana"),
            Task::new("Apple"),
            Task::new("cherry"),
        ];

        let view = run(
            &tasks,
            &TaskQuery {
                sort: TaskSort::Alphabetical,
                ..Default::default()
            },
            fixed_now(),
        );
        let texts: Vec<&str> = view.tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_search_composes_with_filter() {
        let tasks = vec![
            Task::new("Buy milk"),
            completed(Task::new("Buy MILK again")),
            Task::new("Walk dog"),
        ];

        let view = run(
            &tasks,
            &TaskQuery {
                filter: TaskFilter::Pending,
                search: Some("milk".to_string()),
                ..Default::default()
            },
            fixed_now(),
        );
        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.tasks[0].text, "Buy milk");
    }

    #[test]
    fn test_whitespace_search_is_ignored() {
        let tasks = vec![Task::new("Buy milk"), Task::new("Walk dog")];

        let view = run(
            &tasks,
            &TaskQuery {
                search: Some("   ".to_string()),
                ..Default::default()
            },
            fixed_now(),
        );
        assert_eq!(view.tasks.len(), 2);
    }

    #[test]
    fn test_summary_counts_full_sequence_not_view() {
        let tasks = vec![
            Task::new("Buy milk"),
            completed(Task::new("Walk dog")),
            completed(Task::new("Water plants")),
        ];

        let view = run(
            &tasks,
            &TaskQuery {
                filter: TaskFilter::Pending,
                ..Default::default()
            },
            fixed_now(),
        );
        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.summary.total, 3);
        assert_eq!(view.summary.completed, 2);
        assert_eq!(view.summary.pending, 1);
    }
}
