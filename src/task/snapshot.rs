//! Snapshot serialization
//!
//! A snapshot is a pretty-printed JSON array of task records with every
//! field named explicitly, the same shape the store holds in memory, so it
//! round-trips without loss. Triggering a file download for an export and
//! reading an uploaded file for an import belong to the embedding
//! application; only the raw text crosses this boundary.

use super::model::Task;
use crate::Result;

/// Render tasks as a JSON snapshot
pub(super) fn render(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tasks)?)
}

/// Parse a JSON snapshot into tasks
pub(super) fn parse(text: &str) -> Result<Vec<Task>> {
    Ok(serde_json::from_str(text)?)
}
