//! UI Components
//!
//! Leptos components for the task list page.

mod new_task_form;
mod task_row;
mod task_list_view;
mod notice_bar;

pub use new_task_form::NewTaskForm;
pub use task_row::TaskRowView;
pub use task_list_view::TaskListView;
pub use notice_bar::NoticeBar;
