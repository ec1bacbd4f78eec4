//! Task List View Component
//!
//! Renders one row per task, keyed by task id.

use leptos::prelude::*;

use crate::components::TaskRowView;
use crate::context::use_app_context;

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ul id="task-list" class="task-list">
            <For
                each=move || ctx.rows()
                key=|row| row.id
                children=|row| view! { <TaskRowView row=row /> }
            />
        </ul>
    }
}
