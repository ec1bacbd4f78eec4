//! Task Persistence
//!
//! The store seam the controller writes through, the snapshot codec, and an
//! in-memory store. The browser-backed store lives in `commands::storage`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StorageError;

/// Whole-list snapshot persistence
pub trait TaskStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<Vec<String>>, StorageError>;

    fn save(&self, texts: &[String]) -> Result<(), StorageError>;
}

/// Serialize a snapshot as a JSON array of strings
pub fn encode_snapshot(texts: &[String]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(texts)?)
}

/// Parse a stored snapshot. A JSON `null` counts as "nothing saved".
pub fn decode_snapshot(raw: &str) -> Result<Option<Vec<String>>, StorageError> {
    Ok(serde_json::from_str::<Option<Vec<String>>>(raw)?)
}

#[derive(Debug, Default)]
struct MemoryState {
    raw: Option<String>,
    writes: usize,
    fail_writes: bool,
}

/// In-memory store; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-serialized value, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::new();
        store.state.borrow_mut().raw = Some(raw.into());
        store
    }

    pub fn raw(&self) -> Option<String> {
        self.state.borrow().raw.clone()
    }

    /// Number of successful saves
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    /// Make every following save fail the way a full quota does
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl TaskStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<String>>, StorageError> {
        match self.state.borrow().raw.as_deref() {
            Some(raw) => decode_snapshot(raw),
            None => Ok(None),
        }
    }

    fn save(&self, texts: &[String]) -> Result<(), StorageError> {
        let encoded = encode_snapshot(texts)?;
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        state.raw = Some(encoded);
        state.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_matches_plain_json_array() {
        let texts = vec!["buy milk".to_string(), "say \"hi\"".to_string()];
        let raw = encode_snapshot(&texts).unwrap();
        assert_eq!(raw, r#"["buy milk","say \"hi\""]"#);
    }

    #[test]
    fn test_decode_null_is_absent() {
        assert_eq!(decode_snapshot("null").unwrap(), None);
        assert_eq!(decode_snapshot("[]").unwrap(), Some(vec![]));
    }

    #[test]
    fn test_decode_rejects_non_string_arrays() {
        assert!(matches!(decode_snapshot("{\"a\":1}"), Err(StorageError::Corrupt(_))));
        assert!(matches!(decode_snapshot("[1,2]"), Err(StorageError::Corrupt(_))));
        assert!(matches!(decode_snapshot("not json"), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_memory_store_shares_slot_between_clones() {
        let store = MemoryStore::new();
        let other = store.clone();
        assert_eq!(store.load().unwrap(), None);

        other.save(&["a".to_string()]).unwrap();
        assert_eq!(store.load().unwrap(), Some(vec!["a".to_string()]));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_memory_store_failing_writes_keep_old_value() {
        let store = MemoryStore::with_raw(r#"["a"]"#);
        store.set_fail_writes(true);

        assert!(matches!(store.save(&[]), Err(StorageError::Write(_))));
        assert_eq!(store.raw().as_deref(), Some(r#"["a"]"#));
        assert_eq!(store.writes(), 0);
    }
}
