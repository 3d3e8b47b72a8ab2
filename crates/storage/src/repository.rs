use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use studio_core::model::ProgressSet;

/// The single key the progress blob lives under, mirroring the original
/// browser build's `localStorage` entry.
pub const PROGRESS_STORAGE_KEY: &str = "ict_learning_studio_progress";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the persisted progress set.
///
/// `load` returns `None` both when nothing was ever stored and when the
/// stored blob is malformed; a malformed blob is a recoverable condition
/// (logged, never surfaced), so callers substitute defaults either way.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the persisted progress set, if a readable one exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for backend failures, never for a
    /// malformed blob.
    async fn load(&self) -> Result<Option<ProgressSet>, StorageError>;

    /// Persist the full progress set, overwriting prior state.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the set cannot be stored.
    async fn save(&self, set: &ProgressSet) -> Result<(), StorageError>;
}

/// Decode a persisted blob, degrading malformed data to "nothing stored".
pub(crate) fn decode_blob(raw: &str) -> Option<ProgressSet> {
    let set = match serde_json::from_str::<ProgressSet>(raw) {
        Ok(set) => set,
        Err(err) => {
            tracing::warn!(%err, "persisted progress is unreadable; starting fresh");
            return None;
        }
    };
    if let Err(err) = set.validate() {
        tracing::warn!(%err, "persisted progress failed validation; starting fresh");
        return None;
    }
    Some(set)
}

/// In-memory repository for tests and prototyping.
///
/// Stores the serialized blob rather than the typed value so tests exercise
/// the same encode/decode path as the SQLite adapter, including the
/// malformed-blob fallback.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    blob: Arc<Mutex<Option<String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with a raw blob, valid or not.
    #[must_use]
    pub fn with_raw(blob: impl Into<String>) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(blob.into()))),
        }
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load(&self) -> Result<Option<ProgressSet>, StorageError> {
        let guard = self
            .blob
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.as_deref().and_then(decode_blob))
    }

    async fn save(&self, set: &ProgressSet) -> Result<(), StorageError> {
        let raw = serde_json::to_string(set)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let mut guard = self
            .blob
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(raw);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            progress: Arc::new(InMemoryRepository::new()),
        }
    }
}
