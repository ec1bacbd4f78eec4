//! Task Row Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::TaskRow;

/// A single `<li>` with the task text and its remove button
#[component]
pub fn TaskRowView(row: TaskRow) -> impl IntoView {
    let ctx = use_app_context();
    let id = row.id;

    view! {
        <li class="task-row">
            <span class="task-text">{row.text}</span>
            <button class="remove-btn" on:click=move |_| ctx.remove_task(id)>"Remove"</button>
        </li>
    }
}
