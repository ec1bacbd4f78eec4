//! New Task Form Component
//!
//! Text entry plus "Add Task" button. Enter in the field submits the form.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add_task(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                id="task-input"
                type="text"
                placeholder="Enter a new task"
                autocomplete="off"
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_new_text.set(input.value());
                    }
                }
            />
            <button id="add-task-btn" type="submit">"Add Task"</button>
        </form>
    }
}
