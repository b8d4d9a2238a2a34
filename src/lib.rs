//! Core library for the task-list engine
//!
//! This crate contains the task collection and everything derived from it,
//! including:
//! - Task management (add, edit, toggle, delete, undo)
//! - Query views (filter, sort, search, summary counts)
//! - Snapshot export/import
//!
//! The engine is synchronous in-memory state owned by an embedding UI shell.
//! Rendering, confirmation dialogs, voice capture, and file transfer live in
//! that shell; it calls the operations here and renders the results.

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
