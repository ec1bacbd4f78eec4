//! Error Types
//!
//! Validation and persistence failures surfaced by the task list.

use thiserror::Error;

/// Failures of the persistence adapter
#[derive(Debug, Error)]
pub enum StorageError {
    /// The browser refused to hand out `localStorage` (disabled, sandboxed iframe, ...)
    #[error("task storage is not available")]
    Unavailable,
    #[error("could not read saved tasks: {0}")]
    Read(String),
    /// Usually the storage quota
    #[error("could not save tasks: {0}")]
    Write(String),
    #[error("saved tasks are not a list of strings: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors returned by task list mutations
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Please enter a task.")]
    EmptyTask,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type TaskResult<T> = Result<T, TaskError>;
