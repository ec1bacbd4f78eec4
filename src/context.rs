//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::{self, LocalStorageStore};
use crate::controller::{LoadReport, TaskListController};
use crate::error::TaskError;
use crate::models::TaskRow;

pub type BrowserController = TaskListController<LocalStorageStore>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The one controller; every mutation goes through it
    controller: RwSignal<BrowserController>,
    /// Non-blocking notice shown above the list
    pub notice: ReadSignal<Option<String>>,
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(controller: BrowserController, report: &LoadReport) -> Self {
        let (notice, set_notice) = signal(startup_notice(report));
        Self {
            controller: RwSignal::new(controller),
            notice,
            set_notice,
        }
    }

    /// Rows to render, in list order
    pub fn rows(&self) -> Vec<TaskRow> {
        self.controller.with(|c| c.rows())
    }

    pub fn count(&self) -> usize {
        self.controller.with(|c| c.len())
    }

    /// Add a task from raw input. Returns whether it was added; failures are
    /// reported to the user with a blocking alert.
    pub fn add_task(&self, raw: &str) -> bool {
        match self.controller.try_update(|c| c.add_task(raw)) {
            Some(Ok(_)) => true,
            Some(Err(e)) => {
                report(&e);
                false
            }
            None => false,
        }
    }

    pub fn remove_task(&self, id: u32) {
        if let Some(Err(e)) = self.controller.try_update(|c| c.remove_task(id)) {
            report(&e);
        }
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}

fn report(error: &TaskError) {
    if !matches!(error, TaskError::EmptyTask) {
        log::error!("[APP] {}", error);
    }
    commands::alert(&error.to_string());
}

fn startup_notice(report: &LoadReport) -> Option<String> {
    match report {
        LoadReport::Discarded(e) => Some(format!("Saved tasks could not be restored ({}). Starting with an empty list.", e)),
        LoadReport::Empty | LoadReport::Restored(_) => None,
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
