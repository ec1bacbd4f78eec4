//! Task List Controller
//!
//! Owns the model and the store. Every mutation runs validate, mutate,
//! persist; a failed save rolls the model back so the in-memory list and the
//! last written snapshot never disagree.

use crate::config::{RemovalPolicy, TaskListConfig};
use crate::error::{StorageError, TaskResult};
use crate::models::{Task, TaskRow};
use crate::storage::TaskStore;
use crate::task_list::{normalize_input, TaskList};

/// What startup found in the store
#[derive(Debug)]
pub enum LoadReport {
    /// Nothing saved yet
    Empty,
    Restored(usize),
    /// A snapshot was there but could not be used; the list starts empty
    Discarded(StorageError),
}

pub struct TaskListController<S: TaskStore> {
    list: TaskList,
    store: S,
    removal: RemovalPolicy,
}

impl<S: TaskStore> TaskListController<S> {
    /// Load the saved snapshot. Never fails: unreadable data yields an empty
    /// list and a [`LoadReport::Discarded`].
    pub fn initialize(store: S, config: &TaskListConfig) -> (Self, LoadReport) {
        let (list, report) = match store.load() {
            Ok(Some(texts)) => {
                let count = texts.len();
                (TaskList::from_texts(texts), LoadReport::Restored(count))
            }
            Ok(None) => (TaskList::new(), LoadReport::Empty),
            Err(e) => {
                log::warn!("[TASKS] Discarding saved tasks: {}", e);
                (TaskList::new(), LoadReport::Discarded(e))
            }
        };
        log::info!("[TASKS] Loaded {} tasks", list.len());

        let controller = Self {
            list,
            store,
            removal: config.removal,
        };
        (controller, report)
    }

    pub fn add_task(&mut self, raw: &str) -> TaskResult<Task> {
        let text = normalize_input(raw)?;
        let previous = self.list.clone();
        let task = self.list.push(text);

        if let Err(e) = self.persist() {
            self.list = previous;
            return Err(e.into());
        }
        log::debug!("[TASKS] Added #{} {:?}", task.id, task.text);
        Ok(task)
    }

    /// Remove the row `id` refers to, plus whatever else the removal policy
    /// sweeps up. Returns the removed tasks; an unknown id is a no-op.
    pub fn remove_task(&mut self, id: u32) -> TaskResult<Vec<Task>> {
        let previous = self.list.clone();
        let removed = self.list.remove(id, self.removal);
        if removed.is_empty() {
            return Ok(removed);
        }

        if let Err(e) = self.persist() {
            self.list = previous;
            return Err(e.into());
        }
        log::debug!("[TASKS] Removed {} task(s) via row #{}", removed.len(), id);
        Ok(removed)
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.store.save(&self.list.texts()).map_err(|e| {
            log::error!("[TASKS] Save failed: {}", e);
            e
        })
    }

    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    pub fn rows(&self) -> Vec<TaskRow> {
        self.list.rows()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
