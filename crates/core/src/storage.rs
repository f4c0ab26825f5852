//! Durable Slots
//!
//! A slot is a tiny key-value store that survives the session: the cart writes its item list
//! into one after every change and reads it back once when it opens.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use mockall::automock;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised by a durable slot.
#[derive(Debug, Error)]
pub enum SlotError {
    /// The key contains characters that can't be stored safely.
    #[error("invalid slot key: {0:?}")]
    InvalidKey(String),

    /// The backing storage failed.
    #[error("slot io error: {0}")]
    Io(#[from] io::Error),
}

/// Local key-value persistence.
#[automock]
pub trait Slot {
    /// Read the value stored under `key`, or `None` if nothing has been written.
    ///
    /// # Errors
    ///
    /// Returns a [`SlotError`] if the backing storage can't be read.
    fn read(&self, key: &str) -> Result<Option<String>, SlotError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`SlotError`] if the backing storage can't be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), SlotError>;

    /// Forget the value stored under `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`SlotError`] if the backing storage can't be modified.
    fn remove(&mut self, key: &str) -> Result<(), SlotError>;
}

/// In-process slot. Nothing outlives the value itself.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    values: FxHashMap<String, String>,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-populated with a single value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = FxHashMap::default();
        values.insert(key.into(), value.into());

        Self { values }
    }
}

impl Slot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SlotError> {
        self.values.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SlotError> {
        self.values.remove(key);

        Ok(())
    }
}

/// Slot backed by one JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Create a slot rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SlotError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(SlotError::InvalidKey(key.to_string()));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Slot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(SlotError::Io(error)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SlotError> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.dir)?;

        // Write then rename so a crash mid-write never leaves a truncated value behind.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(staging, path)?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SlotError> {
        let path = self.path_for(key)?;

        match fs::remove_file(path) {
            Err(error) if error.kind() != io::ErrorKind::NotFound => Err(SlotError::Io(error)),
            _ => Ok(()),
        }
    }
}
