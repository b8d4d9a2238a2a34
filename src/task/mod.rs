//! Task module
//!
//! This module contains the task model, the owning store, the query engine,
//! and snapshot serialization.

mod model;
mod query;
mod snapshot;
mod store;

pub use model::*;
pub use query::{TaskFilter, TaskQuery, TaskSort, TaskSummary, TaskView};
pub use store::TaskStore;
