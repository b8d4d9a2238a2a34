//! Error types for the task-list engine

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Snapshot format error: {0}")]
    SnapshotFormat(#[from] serde_json::Error),
}
