#![allow(warnings)]
//! Task List Frontend Entry Point

mod config;
mod error;
mod models;
mod task_list;
mod storage;
mod controller;
mod commands;
mod logger;
mod context;
mod components;
mod app;

use app::App;
use config::TaskListConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = load_config();
    logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config.clone() /> });
}

/// Optional `<script id="task-list-config" type="application/json">` override
fn load_config() -> TaskListConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("task-list-config"))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) => TaskListConfig::from_json(&raw).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("[APP] Ignoring bad task-list-config: {}", e).into());
            TaskListConfig::default()
        }),
        None => TaskListConfig::default(),
    }
}
