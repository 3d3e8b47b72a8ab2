use std::sync::Arc;

use storage::repository::Storage;

use crate::assistant_service::AssistantService;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;

/// Assembles app-facing services over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    assistant: Arc<AssistantService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage))
    }

    /// Build services over an already constructed backend (in-memory in
    /// tests, SQLite in the desktop binary).
    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        let progress = Arc::new(ProgressService::new(Arc::clone(&storage.progress)));
        let assistant = Arc::new(AssistantService::from_env());
        Self {
            progress,
            assistant,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn assistant(&self) -> Arc<AssistantService> {
        Arc::clone(&self.assistant)
    }
}
