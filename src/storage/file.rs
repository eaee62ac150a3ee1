//! File-backed score store.
//!
//! The whole map is bincode-encoded into a single file. The file is read
//! once on open and rewritten after every successful `set_int`. A missing
//! file is an empty store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::ScoreStore;
use crate::core::StoreError;

/// Score store persisted to a file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    values: FxHashMap<String, i64>,
}

impl FileStore {
    /// Open the store at `path`, loading any existing contents.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(bytes) => bincode::deserialize(&bytes)?,
            Err(err) if err.kind() == ErrorKind::NotFound => FxHashMap::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, values })
    }

    /// Where the store lives on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let bytes = bincode::serialize(&self.values)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl ScoreStore for FileStore {
    fn get_int(&self, key: &str, default: i64) -> Result<i64, StoreError> {
        Ok(self.values.get(key).copied().unwrap_or(default))
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        let previous = self.values.insert(key.to_string(), value);
        if let Err(err) = self.flush() {
            // Keep memory consistent with what is on disk
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}
