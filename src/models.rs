//! Frontend Models
//!
//! Task data as held in memory and as rendered.

use serde::{Deserialize, Serialize};

/// A single task
///
/// `id` is assigned when the task enters the in-memory list and is not part
/// of the saved snapshot, which only carries the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub text: String,
}

/// One rendered list row, derived from a [`Task`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: u32,
    pub text: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
        }
    }
}
