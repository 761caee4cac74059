//! Key-value persistence behind an explicit repository interface.
//!
//! The browser build of the product keeps this state in local storage; here
//! the same key layout sits behind the `Storage` trait so the backing store
//! can be swapped without touching the services that use it.

pub mod templates;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::QcError;

/// Key holding the current session's identity document.
pub const USER_KEY: &str = "autoqc_user";
/// Key holding the registered-user array.
pub const USERS_KEY: &str = "autoqc_users";

/// Key holding a user's saved template list.
pub fn templates_key(user_id: &str) -> String {
    format!("autoqc_templates_{}", user_id)
}

pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, QcError>;
    fn set(&self, key: &str, value: &str) -> Result<(), QcError>;
    fn remove(&self, key: &str) -> Result<(), QcError>;
}

/// In-process store, used by tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, QcError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| QcError::Runtime("Lock Poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), QcError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| QcError::Runtime("Lock Poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), QcError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| QcError::Runtime("Lock Poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Durable store keeping one JSON document per key under a root directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, QcError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), QcError> {
        std::fs::create_dir_all(&self.root)
            .and_then(|_| std::fs::write(self.path_for(key), value))
            .map_err(|e| QcError::Storage(format!("Unable to persist '{}': {}", key, e)))
    }

    fn remove(&self, key: &str) -> Result<(), QcError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
