//! Local Storage Store
//!
//! [`TaskStore`] backed by the page's `localStorage`.

use wasm_bindgen::{JsCast, JsValue};

use crate::error::StorageError;
use crate::storage::{decode_snapshot, encode_snapshot, TaskStore};

/// Looks `localStorage` up on every call, so it holds nothing but the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Read(js_error(&e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl TaskStore for LocalStorageStore {
    fn load(&self) -> Result<Option<Vec<String>>, StorageError> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(js_error(&e)))?;
        match raw {
            Some(raw) => decode_snapshot(&raw),
            None => Ok(None),
        }
    }

    fn save(&self, texts: &[String]) -> Result<(), StorageError> {
        let encoded = encode_snapshot(texts)?;
        self.storage()?
            .set_item(&self.key, &encoded)
            .map_err(|e| StorageError::Write(js_error(&e)))
    }
}

/// DOMException message if there is one, debug form otherwise
fn js_error(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", value))
}
