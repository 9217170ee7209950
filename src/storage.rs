//! Persistence adapter for focusboard
//!
//! Both engines persist a JSON blob under a string key through the
//! [`KeyValueStore`] port. Loads never fail: a missing or corrupt blob reads
//! as absent. Saves are best-effort: failures are logged and swallowed.
//!
//! # Directory Structure
//!
//! ```text
//! <data-dir>/
//!   config.toml                  # Optional configuration
//!   tasks.json                   # Task collection (array)
//!   pomodoroSettings.json        # Pomodoro durations and totals
//!   *.json.lock                  # fs2 lock files guarding writes
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::lock::{self, DEFAULT_LOCK_TIMEOUT_MS};

/// Key holding the task collection
pub const TASKS_KEY: &str = "tasks";

/// Key holding Pomodoro settings and totals
pub const POMODORO_SETTINGS_KEY: &str = "pomodoroSettings";

/// Environment override for the data directory
pub const DATA_DIR_ENV: &str = "FOCUSBOARD_DATA_DIR";

/// Key-value persistence port shared by the task store and the Pomodoro engine
pub trait KeyValueStore {
    /// Previously saved value, or `None` when never saved or unreadable
    fn load(&self, key: &str) -> Option<Value>;

    /// Best-effort save; never fails the caller
    fn save(&self, key: &str, value: &Value);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn load(&self, key: &str) -> Option<Value> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &Value) {
        (**self).save(key, value)
    }
}

/// Load `key` and decode it as `T`; schema mismatches read as absent.
pub fn load_typed<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let value = store.load(key)?;
    match serde_json::from_value(value) {
        Ok(data) => Some(data),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding persisted value with unexpected shape");
            None
        }
    }
}

/// Encode `data` and save it under `key`.
pub fn save_typed<T: Serialize>(store: &impl KeyValueStore, key: &str, data: &T) {
    match serde_json::to_value(data) {
        Ok(value) => store.save(key, &value),
        Err(err) => tracing::warn!(key, error = %err, "failed to encode value for persistence"),
    }
}

/// Resolve the data directory: explicit flag, then environment, then platform default.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "focusboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            Error::OperationFailed(format!(
                "could not determine a data directory; pass --data-dir or set {DATA_DIR_ENV}"
            ))
        })
}

/// File-backed store: one pretty-printed JSON file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }

    /// Read and parse the blob for `key`; `Ok(None)` when it was never written
    pub fn read_value(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Error::Io(err)),
        };
        let value: Value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    /// Write the blob for `key` atomically under its lock
    pub fn write_value(&self, key: &str, value: &Value) -> Result<()> {
        let path = self.path_for(key)?;
        let json = serde_json::to_string_pretty(value)?;
        lock::write_atomic_locked(&path, json.as_bytes(), DEFAULT_LOCK_TIMEOUT_MS)
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Option<Value> {
        match self.read_value(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "treating unreadable persisted data as absent");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &Value) {
        if let Err(err) = self.write_value(key, value) {
            tracing::warn!(key, error = %err, "failed to persist state; continuing in memory");
        }
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!("invalid storage key '{key}'")))
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, Value>>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the write counter
    pub fn insert(&self, key: &str, value: Value) {
        self.entries.borrow_mut().insert(key.to_string(), value);
    }

    /// Current raw value for `key`
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }

    /// Make subsequent saves fail (and be swallowed), like a full quota
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful saves
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<Value> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &Value) {
        if self.fail_writes.get() {
            tracing::warn!(key, "in-memory store rejected write");
            return;
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.clone());
        self.writes.set(self.writes.get() + 1);
    }
}
