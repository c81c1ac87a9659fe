//! Selection Sets
//!
//! A toggle-set of entity ids (products or supermarkets) that persists
//! every mutation through an injected key-value store. The set itself does
//! no I/O: implementations of [`SelectionStore`] do, which keeps the state
//! machine deterministic and lets tests substitute [`MemoryStore`].
//!
//! Persisted form is a JSON array of ids in sorted order, so the payload
//! for a given selection is stable across runs.

use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// Storage error for selection persistence
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying storage failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value persistence capability injected into [`SelectionSet`]
pub trait SelectionStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// HashMap-backed store for tests and previews
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A persistent multi-select over entity ids
///
/// Lives for the duration of the owning screen; the persisted copy under
/// `key` survives it. A store failure is logged and does not poison the
/// in-memory selection - the user keeps toggling, the next successful
/// persist catches the store up.
#[derive(Debug)]
pub struct SelectionSet<S: SelectionStore> {
    key: String,
    ids: BTreeSet<String>,
    store: S,
}

impl<S: SelectionStore> SelectionSet<S> {
    /// Create an empty selection persisting under `key`.
    pub fn new(key: impl Into<String>, store: S) -> Self {
        Self {
            key: key.into(),
            ids: BTreeSet::new(),
            store,
        }
    }

    /// Restore the selection persisted under `key`.
    ///
    /// A missing or corrupt payload yields an empty selection rather than
    /// an error; stale device data must never block the screen.
    pub fn restore(key: impl Into<String>, store: S) -> Self {
        let key = key.into();
        let ids = match store.get(&key) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<String>>(&payload) {
                Ok(ids) => ids.into_iter().collect(),
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "Discarding corrupt selection payload");
                    BTreeSet::new()
                }
            },
            Ok(None) => BTreeSet::new(),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Failed to read persisted selection");
                BTreeSet::new()
            }
        };
        Self { key, ids, store }
    }

    /// Add `id` if absent, remove it if present. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        let selected = if self.ids.contains(id) {
            self.ids.remove(id);
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.persist();
        selected
    }

    /// Replace the selection with the given ids, deduplicated.
    pub fn select_all<I, T>(&mut self, ids: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self.persist();
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.persist();
    }

    /// Current selection, in stable id order.
    pub fn snapshot(&self) -> &BTreeSet<String> {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The storage key this selection persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Give the store back, e.g. to restore a later selection from it.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.ids) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "Failed to encode selection");
                return;
            }
        };
        if let Err(err) = self.store.set(&self.key, &payload) {
            tracing::warn!(key = %self.key, error = %err, "Failed to persist selection");
        }
    }
}

// ==================== Tests ====================
