use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ModuleId;

/// Every module's assessment has exactly this many questions.
pub const QUESTIONS_PER_MODULE: u8 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("score {score} is out of range 0..={max}", max = QUESTIONS_PER_MODULE)]
    ScoreOutOfRange { score: u8 },
}

/// Completion, score, and time-tracking state for one module.
///
/// Field names follow the persisted JSON layout, which must round-trip
/// exactly (`lessonViewed`, `practiceAttempted`, `assessmentSubmitted`,
/// `score`, `timeSpentSeconds`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModuleProgress {
    lesson_viewed: bool,
    practice_attempted: bool,
    assessment_submitted: bool,
    score: Option<u8>,
    time_spent_seconds: u64,
}

impl ModuleProgress {
    #[must_use]
    pub fn lesson_viewed(&self) -> bool {
        self.lesson_viewed
    }

    #[must_use]
    pub fn practice_attempted(&self) -> bool {
        self.practice_attempted
    }

    #[must_use]
    pub fn assessment_submitted(&self) -> bool {
        self.assessment_submitted
    }

    /// Correctly answered questions from the most recent submission, if any.
    #[must_use]
    pub fn score(&self) -> Option<u8> {
        self.score
    }

    #[must_use]
    pub fn time_spent_seconds(&self) -> u64 {
        self.time_spent_seconds
    }

    /// A module is complete once lesson, practice, and assessment have each
    /// been engaged at least once. The score does not matter.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.lesson_viewed && self.practice_attempted && self.assessment_submitted
    }

    /// Merge a partial update into this record. Absent fields stay unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::ScoreOutOfRange` if the update carries a score
    /// above `QUESTIONS_PER_MODULE`.
    pub fn apply(&mut self, update: ProgressUpdate) -> Result<(), ProgressError> {
        if let Some(score) = update.score {
            if score > QUESTIONS_PER_MODULE {
                return Err(ProgressError::ScoreOutOfRange { score });
            }
        }

        if let Some(viewed) = update.lesson_viewed {
            self.lesson_viewed = viewed;
        }
        if let Some(attempted) = update.practice_attempted {
            self.practice_attempted = attempted;
        }
        if let Some(submitted) = update.assessment_submitted {
            self.assessment_submitted = submitted;
        }
        if let Some(score) = update.score {
            self.score = Some(score);
        }
        if let Some(total) = update.time_spent_seconds {
            self.time_spent_seconds = total;
        }

        Ok(())
    }

    fn validate(&self) -> Result<(), ProgressError> {
        if let Some(score) = self.score {
            if score > QUESTIONS_PER_MODULE {
                return Err(ProgressError::ScoreOutOfRange { score });
            }
        }
        Ok(())
    }
}

/// Partial-field merge payload for one module's record.
///
/// `None` means "leave unchanged". `time_spent_seconds` carries the new
/// absolute total; callers accumulate (read the current total, add the
/// elapsed delta) before issuing the update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub lesson_viewed: Option<bool>,
    pub practice_attempted: Option<bool>,
    pub assessment_submitted: Option<bool>,
    pub score: Option<u8>,
    pub time_spent_seconds: Option<u64>,
}

impl ProgressUpdate {
    /// Marks the lesson step as viewed.
    #[must_use]
    pub fn lesson_viewed() -> Self {
        Self {
            lesson_viewed: Some(true),
            ..Self::default()
        }
    }

    /// Marks at least one practice run as attempted.
    #[must_use]
    pub fn practice_attempted() -> Self {
        Self {
            practice_attempted: Some(true),
            ..Self::default()
        }
    }

    /// Records an assessment submission with the given correct count.
    #[must_use]
    pub fn assessment_submitted(score: u8) -> Self {
        Self {
            assessment_submitted: Some(true),
            score: Some(score),
            ..Self::default()
        }
    }

    /// Sets the accumulated time to a new absolute total.
    #[must_use]
    pub fn time_spent_total(seconds: u64) -> Self {
        Self {
            time_spent_seconds: Some(seconds),
            ..Self::default()
        }
    }
}

/// The full mapping of modules to progress records; the unit of persistence.
///
/// Always carries exactly one record per module. The JSON layout is keyed by
/// the fixed module identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgressSet {
    #[serde(rename = "HTML_CSS")]
    html_css: ModuleProgress,
    #[serde(rename = "PYTHON")]
    python: ModuleProgress,
    #[serde(rename = "JAVASCRIPT")]
    javascript: ModuleProgress,
}

/// Derived statistics over a full progress set, for the dashboard overview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressOverview {
    pub completed_modules: usize,
    pub module_count: usize,
    pub average_score_percent: f64,
    pub total_time_seconds: u64,
}

impl ProgressSet {
    #[must_use]
    pub fn record(&self, module: ModuleId) -> &ModuleProgress {
        match module {
            ModuleId::HtmlCss => &self.html_css,
            ModuleId::Python => &self.python,
            ModuleId::Javascript => &self.javascript,
        }
    }

    fn record_mut(&mut self, module: ModuleId) -> &mut ModuleProgress {
        match module {
            ModuleId::HtmlCss => &mut self.html_css,
            ModuleId::Python => &mut self.python,
            ModuleId::Javascript => &mut self.javascript,
        }
    }

    /// Iterate records in syllabus order.
    pub fn records(&self) -> impl Iterator<Item = (ModuleId, &ModuleProgress)> {
        ModuleId::ALL.into_iter().map(|id| (id, self.record(id)))
    }

    /// Merge a partial update into one module's record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::ScoreOutOfRange` for an invalid score.
    pub fn apply(&mut self, module: ModuleId, update: ProgressUpdate) -> Result<(), ProgressError> {
        self.record_mut(module).apply(update)
    }

    /// Check rehydrated state against the score-range invariant.
    ///
    /// Storage treats a violation as a malformed blob and falls back to
    /// defaults rather than surfacing the error.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::ScoreOutOfRange` for any out-of-range score.
    pub fn validate(&self) -> Result<(), ProgressError> {
        for (_, record) in self.records() {
            record.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.records()
            .filter(|(_, record)| record.is_complete())
            .count()
    }

    #[must_use]
    pub fn total_time_seconds(&self) -> u64 {
        self.records()
            .map(|(_, record)| record.time_spent_seconds())
            .sum()
    }

    /// Average score as a percentage in `[0, 100]`.
    ///
    /// Each submitted score is converted to a percentage of the fixed
    /// question count, then the percentages are simple-averaged. Modules
    /// without a submission are excluded; if none has one the result is 0.
    #[must_use]
    pub fn average_score_percent(&self) -> f64 {
        let percentages: Vec<f64> = self
            .records()
            .filter_map(|(_, record)| record.score())
            .map(|score| f64::from(score) / f64::from(QUESTIONS_PER_MODULE) * 100.0)
            .collect();

        if percentages.is_empty() {
            return 0.0;
        }
        percentages.iter().sum::<f64>() / percentages.len() as f64
    }

    #[must_use]
    pub fn overview(&self) -> ProgressOverview {
        ProgressOverview {
            completed_modules: self.completed_count(),
            module_count: ModuleId::ALL.len(),
            average_score_percent: self.average_score_percent(),
            total_time_seconds: self.total_time_seconds(),
        }
    }
}

/// Render a duration as `"{h}h {m}m {s}s"` with floor division and no carry
/// suppression (`0h 0m 5s` is valid output).
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{h}h {m}m {s}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_false_and_zero() {
        let set = ProgressSet::default();
        for (_, record) in set.records() {
            assert!(!record.lesson_viewed());
            assert!(!record.practice_attempted());
            assert!(!record.assessment_submitted());
            assert_eq!(record.score(), None);
            assert_eq!(record.time_spent_seconds(), 0);
        }
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut set = ProgressSet::default();
        set.apply(ModuleId::Python, ProgressUpdate::lesson_viewed())
            .unwrap();

        let record = set.record(ModuleId::Python);
        assert!(record.lesson_viewed());
        assert!(!record.practice_attempted());
        assert!(!record.assessment_submitted());
        assert_eq!(record.score(), None);
        assert_eq!(record.time_spent_seconds(), 0);

        // Other modules untouched.
        assert!(!set.record(ModuleId::HtmlCss).lesson_viewed());
        assert!(!set.record(ModuleId::Javascript).lesson_viewed());
    }

    #[test]
    fn time_updates_carry_absolute_totals() {
        let mut set = ProgressSet::default();
        let current = set.record(ModuleId::HtmlCss).time_spent_seconds();
        set.apply(
            ModuleId::HtmlCss,
            ProgressUpdate::time_spent_total(current + 30),
        )
        .unwrap();
        let current = set.record(ModuleId::HtmlCss).time_spent_seconds();
        set.apply(
            ModuleId::HtmlCss,
            ProgressUpdate::time_spent_total(current + 45),
        )
        .unwrap();

        assert_eq!(set.record(ModuleId::HtmlCss).time_spent_seconds(), 75);
    }

    #[test]
    fn completion_ignores_score() {
        let mut record = ModuleProgress::default();
        assert!(!record.is_complete());

        record.apply(ProgressUpdate::lesson_viewed()).unwrap();
        record.apply(ProgressUpdate::practice_attempted()).unwrap();
        assert!(!record.is_complete());

        // Submitting completes the module even with zero correct answers.
        record.apply(ProgressUpdate::assessment_submitted(0)).unwrap();
        assert!(record.is_complete());
    }

    #[test]
    fn score_above_question_count_is_rejected() {
        let mut record = ModuleProgress::default();
        let err = record
            .apply(ProgressUpdate::assessment_submitted(6))
            .unwrap_err();
        assert_eq!(err, ProgressError::ScoreOutOfRange { score: 6 });
        // Nothing was merged.
        assert!(!record.assessment_submitted());
    }

    #[test]
    fn new_submission_overwrites_score() {
        let mut record = ModuleProgress::default();
        record.apply(ProgressUpdate::assessment_submitted(2)).unwrap();
        record.apply(ProgressUpdate::assessment_submitted(5)).unwrap();
        assert_eq!(record.score(), Some(5));
    }

    #[test]
    fn average_score_ignores_unsubmitted_modules() {
        let mut set = ProgressSet::default();
        set.apply(ModuleId::HtmlCss, ProgressUpdate::assessment_submitted(5))
            .unwrap();
        set.apply(ModuleId::Python, ProgressUpdate::assessment_submitted(2))
            .unwrap();
        // Javascript stays unsubmitted: (100 + 40) / 2.
        assert!((set.average_score_percent() - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn average_score_is_zero_without_submissions() {
        let set = ProgressSet::default();
        assert_eq!(set.average_score_percent(), 0.0);
    }

    #[test]
    fn total_time_sums_all_modules() {
        let mut set = ProgressSet::default();
        set.apply(ModuleId::HtmlCss, ProgressUpdate::time_spent_total(10))
            .unwrap();
        set.apply(ModuleId::Javascript, ProgressUpdate::time_spent_total(32))
            .unwrap();
        assert_eq!(set.total_time_seconds(), 42);
    }

    #[test]
    fn format_duration_uses_floor_division() {
        assert_eq!(format_duration(3725), "1h 2m 5s");
        assert_eq!(format_duration(45), "0h 0m 45s");
        assert_eq!(format_duration(0), "0h 0m 0s");
    }

    #[test]
    fn json_layout_round_trips() {
        let mut set = ProgressSet::default();
        set.apply(ModuleId::Python, ProgressUpdate::lesson_viewed())
            .unwrap();
        set.apply(ModuleId::Python, ProgressUpdate::assessment_submitted(4))
            .unwrap();
        set.apply(ModuleId::Python, ProgressUpdate::time_spent_total(90))
            .unwrap();

        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"HTML_CSS\""));
        assert!(json.contains("\"PYTHON\""));
        assert!(json.contains("\"JAVASCRIPT\""));
        assert!(json.contains("\"lessonViewed\""));
        assert!(json.contains("\"timeSpentSeconds\""));

        let restored: ProgressSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, set);
    }

    #[test]
    fn unsubmitted_score_serializes_as_null() {
        let json = serde_json::to_string(&ProgressSet::default()).unwrap();
        assert!(json.contains("\"score\":null"));
    }

    #[test]
    fn validate_catches_out_of_range_persisted_score() {
        let json = r#"{
            "HTML_CSS": {"lessonViewed":false,"practiceAttempted":false,"assessmentSubmitted":true,"score":9,"timeSpentSeconds":0},
            "PYTHON": {"lessonViewed":false,"practiceAttempted":false,"assessmentSubmitted":false,"score":null,"timeSpentSeconds":0},
            "JAVASCRIPT": {"lessonViewed":false,"practiceAttempted":false,"assessmentSubmitted":false,"score":null,"timeSpentSeconds":0}
        }"#;
        let set: ProgressSet = serde_json::from_str(json).unwrap();
        assert!(set.validate().is_err());
    }

    #[test]
    fn extra_keys_fail_deserialization() {
        let json = r#"{
            "HTML_CSS": {"lessonViewed":false,"practiceAttempted":false,"assessmentSubmitted":false,"score":null,"timeSpentSeconds":0},
            "PYTHON": {"lessonViewed":false,"practiceAttempted":false,"assessmentSubmitted":false,"score":null,"timeSpentSeconds":0},
            "JAVASCRIPT": {"lessonViewed":false,"practiceAttempted":false,"assessmentSubmitted":false,"score":null,"timeSpentSeconds":0},
            "SCRATCH": {"lessonViewed":false,"practiceAttempted":false,"assessmentSubmitted":false,"score":null,"timeSpentSeconds":0}
        }"#;
        assert!(serde_json::from_str::<ProgressSet>(json).is_err());
    }
}
