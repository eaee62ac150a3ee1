//! In-memory score store.

use rustc_hash::FxHashMap;

use super::ScoreStore;
use crate::core::StoreError;

/// Score store backed by a hash map. Never fails.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, i64>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one entry.
    pub fn with_value(key: impl Into<String>, value: i64) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value);
        store
    }

    /// Raw lookup without a default.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }
}

impl ScoreStore for MemoryStore {
    fn get_int(&self, key: &str, default: i64) -> Result<i64, StoreError> {
        Ok(self.get(key).unwrap_or(default))
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
