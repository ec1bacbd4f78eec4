//! Task List Model
//!
//! The authoritative ordered list of tasks, plus the pure render step that
//! derives list rows from it.

use crate::config::RemovalPolicy;
use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskRow};

/// Trim user input and reject it if nothing is left
pub fn normalize_input(raw: &str) -> TaskResult<String> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyTask);
    }
    Ok(text.to_string())
}

/// Ordered tasks in insertion order; duplicates allowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u32,
}

impl Default for TaskList {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from snapshot texts, assigning ids in order
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for text in texts {
            list.push(text);
        }
        list
    }

    pub fn push(&mut self, text: impl Into<String>) -> Task {
        let task = Task {
            id: self.next_id,
            text: text.into(),
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        task
    }

    /// Remove the task behind row `id`, returning what was taken out.
    ///
    /// Under [`RemovalPolicy::MatchingText`] every task sharing the row's text
    /// goes with it.
    pub fn remove(&mut self, id: u32, policy: RemovalPolicy) -> Vec<Task> {
        let Some(target) = self.get(id).map(|t| t.text.clone()) else {
            return Vec::new();
        };

        let (removed, kept): (Vec<Task>, Vec<Task>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|task| match policy {
                RemovalPolicy::MatchingText => task.text == target,
                RemovalPolicy::SingleEntry => task.id == id,
            });
        self.tasks = kept;
        removed
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Snapshot payload, in list order
    pub fn texts(&self) -> Vec<String> {
        self.tasks.iter().map(|task| task.text.clone()).collect()
    }

    pub fn rows(&self) -> Vec<TaskRow> {
        self.tasks.iter().map(TaskRow::from).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input("  buy milk \n").unwrap(), "buy milk");
        assert!(matches!(normalize_input(""), Err(TaskError::EmptyTask)));
        assert!(matches!(normalize_input(" \t "), Err(TaskError::EmptyTask)));
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut list = TaskList::from_texts(["a", "b"]);
        let c = list.push("c");

        assert_eq!(c.id, 3);
        let ids: Vec<u32> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(list.texts(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rows_mirror_tasks() {
        let list = TaskList::from_texts(["a", "b", "a"]);
        let rows = list.rows();

        assert_eq!(rows.len(), 3);
        for (row, task) in rows.iter().zip(list.tasks()) {
            assert_eq!(row.id, task.id);
            assert_eq!(row.text, task.text);
        }
    }

    #[test]
    fn test_remove_matching_text_takes_all_duplicates() {
        let mut list = TaskList::from_texts(["milk", "eggs", "milk"]);
        let removed = list.remove(3, RemovalPolicy::MatchingText);

        assert_eq!(removed.len(), 2);
        assert_eq!(list.texts(), vec!["eggs"]);
    }

    #[test]
    fn test_remove_single_entry_keeps_duplicates() {
        let mut list = TaskList::from_texts(["milk", "eggs", "milk"]);
        let removed = list.remove(1, RemovalPolicy::SingleEntry);

        assert_eq!(removed, vec![Task { id: 1, text: "milk".into() }]);
        assert_eq!(list.texts(), vec!["eggs", "milk"]);
        assert_eq!(list.tasks()[1].id, 3);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = TaskList::from_texts(["a"]);
        assert!(list.remove(42, RemovalPolicy::MatchingText).is_empty());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut list = TaskList::from_texts(["a", "b"]);
        list.remove(2, RemovalPolicy::SingleEntry);
        assert_eq!(list.push("c").id, 3);
    }
}
