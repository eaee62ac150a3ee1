//! Persistent integer store for the best score.
//!
//! The board only ever needs two calls: read the best score at startup and
//! write it back at game over. Any durable key/value backend can implement
//! [`ScoreStore`]; two ship with the crate:
//!
//! - [`MemoryStore`]: in-process map, for tests and headless runs
//! - [`FileStore`]: bincode-encoded map on disk, rewritten on every set

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::core::StoreError;

/// Key/value store of integers.
pub trait ScoreStore {
    /// Value under `key`, or `default` if the key was never written.
    fn get_int(&self, key: &str, default: i64) -> Result<i64, StoreError>;

    /// Write `value` under `key`.
    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StoreError>;
}

impl<T: ScoreStore + ?Sized> ScoreStore for &mut T {
    fn get_int(&self, key: &str, default: i64) -> Result<i64, StoreError> {
        (**self).get_int(key, default)
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        (**self).set_int(key, value)
    }
}

impl<T: ScoreStore + ?Sized> ScoreStore for Box<T> {
    fn get_int(&self, key: &str, default: i64) -> Result<i64, StoreError> {
        (**self).get_int(key, default)
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        (**self).set_int(key, value)
    }
}
