//! Task List App
//!
//! Root component: loads the saved tasks once and lays out the page.

use leptos::prelude::*;

use crate::commands::LocalStorageStore;
use crate::components::{NewTaskForm, NoticeBar, TaskListView};
use crate::config::TaskListConfig;
use crate::context::{use_app_context, AppContext};
use crate::controller::TaskListController;

#[component]
pub fn App(config: TaskListConfig) -> impl IntoView {
    let store = LocalStorageStore::new(config.storage_key.clone());
    let (controller, report) = TaskListController::initialize(store, &config);
    log::info!("[APP] Startup: {:?}", report);

    provide_context(AppContext::new(controller, &report));
    let ctx = use_app_context();

    view! {
        <main class="task-app">
            <h1>"Todo List"</h1>

            <NewTaskForm />
            <NoticeBar />
            <TaskListView />

            <p class="task-count">{move || match ctx.count() {
                1 => "1 task".to_string(),
                n => format!("{} tasks", n),
            }}</p>
        </main>
    }
}
