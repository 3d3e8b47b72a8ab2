use std::sync::Arc;

use tokio::sync::Mutex;

use storage::repository::ProgressRepository;
use studio_core::model::{
    ModuleId, ProgressOverview, ProgressSet, ProgressUpdate, SyllabusModule, score_answers,
};

use crate::error::ProgressServiceError;

/// The progress store: loads, merges, and persists per-module progress and
/// derives dashboard statistics.
///
/// Every update is a read-modify-write over the whole persisted blob, so the
/// `write_lock` serializes logically concurrent callers within this process.
/// Cross-process writers remain last-writer-wins, matching the original
/// single-active-session contract.
pub struct ProgressService {
    repo: Arc<dyn ProgressRepository>,
    write_lock: Mutex<()>,
}

impl ProgressService {
    #[must_use]
    pub fn new(repo: Arc<dyn ProgressRepository>) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    /// Load the persisted progress set, substituting defaults when nothing
    /// readable is stored.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures. A malformed blob
    /// is not a failure; it degrades to defaults inside the repository.
    pub async fn load(&self) -> Result<ProgressSet, ProgressServiceError> {
        let set = self.repo.load().await?;
        Ok(set.unwrap_or_default())
    }

    /// Persist the full progress set, overwriting prior state.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn save(&self, set: &ProgressSet) -> Result<(), ProgressServiceError> {
        self.repo.save(set).await?;
        Ok(())
    }

    /// Merge a partial update into one module's record and persist the
    /// result. Returns the updated set.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on invalid scores or storage failures.
    pub async fn update(
        &self,
        module: ModuleId,
        update: ProgressUpdate,
    ) -> Result<ProgressSet, ProgressServiceError> {
        let _guard = self.write_lock.lock().await;
        self.update_unlocked(module, update).await
    }

    /// Mark the module's lesson step as viewed.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn record_lesson_viewed(
        &self,
        module: ModuleId,
    ) -> Result<(), ProgressServiceError> {
        self.update(module, ProgressUpdate::lesson_viewed()).await?;
        Ok(())
    }

    /// Mark that the learner has triggered at least one practice run.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn record_practice_attempt(
        &self,
        module: ModuleId,
    ) -> Result<(), ProgressServiceError> {
        self.update(module, ProgressUpdate::practice_attempted())
            .await?;
        Ok(())
    }

    /// Score a full answer sheet against the module's assessment and record
    /// the submission. Returns the correct count.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Assessment` for an incomplete answer
    /// sheet (nothing is persisted in that case), or storage failures.
    pub async fn submit_assessment(
        &self,
        module: ModuleId,
        answers: &[Option<usize>],
    ) -> Result<u8, ProgressServiceError> {
        let questions = &SyllabusModule::get(module).assessment;
        let score = score_answers(questions, answers)?;
        self.update(module, ProgressUpdate::assessment_submitted(score))
            .await?;
        Ok(score)
    }

    /// Add elapsed wall-clock seconds to the module's accumulated time.
    ///
    /// The read and the write happen under the same lock so two in-process
    /// accumulations cannot drop each other.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn add_time_spent(
        &self,
        module: ModuleId,
        elapsed_seconds: u64,
    ) -> Result<(), ProgressServiceError> {
        let _guard = self.write_lock.lock().await;
        let set = self.repo.load().await?.unwrap_or_default();
        let total = set
            .record(module)
            .time_spent_seconds()
            .saturating_add(elapsed_seconds);
        self.update_unlocked(module, ProgressUpdate::time_spent_total(total))
            .await?;
        Ok(())
    }

    /// Derived statistics for the dashboard overview.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn overview(&self) -> Result<ProgressOverview, ProgressServiceError> {
        Ok(self.load().await?.overview())
    }

    async fn update_unlocked(
        &self,
        module: ModuleId,
        update: ProgressUpdate,
    ) -> Result<ProgressSet, ProgressServiceError> {
        let mut set = self.repo.load().await?.unwrap_or_default();
        set.apply(module, update)?;
        self.repo.save(&set).await?;
        Ok(set)
    }
}
