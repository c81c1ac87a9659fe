//! Device storage
//!
//! JSON-file persistence under the app's data directory: the logged-in
//! session (token + user) and a small key-value store that backs selection
//! persistence across app restarts.

use cesta_engine::{SelectionStore, StoreError};
use serde::{Deserialize, Serialize};
use shared::models::UserInfo;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A logged-in session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
    pub logged_in_at: i64,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserInfo) -> Self {
        Self {
            token: token.into(),
            user,
            logged_in_at: shared::util::now_millis(),
        }
    }
}

/// Session persistence
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    /// Create session storage rooted at `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let path = base_path.into().join("session.json");
        Self { path }
    }

    /// Ensure the parent directory exists
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Save the session
    pub fn save(&self, session: &Session) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)
    }

    /// Load the session
    ///
    /// A missing, unreadable or corrupt file yields `None`; the user simply
    /// logs in again.
    pub fn load(&self) -> Option<Session> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Check whether a session exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the session
    pub fn clear(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Get the path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Single-file key-value store
///
/// Holds a string-to-string map as one JSON file. `set` re-reads the file
/// before writing, so independent handles on the same path observe each
/// other's writes; the UI event loop serializes calls, so there is no
/// interleaving to guard against.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<HashMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let json = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&json) {
            Ok(map) => Ok(map),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Resetting corrupt store file");
                Ok(HashMap::new())
            }
        }
    }
}

impl SelectionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&map)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
