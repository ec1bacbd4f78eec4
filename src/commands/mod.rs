//! Browser Bindings
//!
//! Thin wrappers over the web APIs the task list talks to.

mod storage;
mod dialog;

pub use storage::*;
pub use dialog::*;
