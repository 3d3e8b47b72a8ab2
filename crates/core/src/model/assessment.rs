use thiserror::Error;

/// A multiple-choice question with exactly one correct option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mcq {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct_index: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    /// The learner left question `index` (zero-based) unanswered. Rejected
    /// at the presentation boundary; the progress store never sees it.
    #[error("question {index} has not been answered")]
    Unanswered { index: usize },

    #[error("expected {expected} answers, got {got}")]
    AnswerCountMismatch { expected: usize, got: usize },
}

/// Count correctly answered questions.
///
/// # Errors
///
/// Returns `AssessmentError::AnswerCountMismatch` if the answer slice does
/// not line up with the question list, or `AssessmentError::Unanswered` if
/// any entry is `None`.
pub fn score_answers(
    questions: &[Mcq],
    answers: &[Option<usize>],
) -> Result<u8, AssessmentError> {
    if answers.len() != questions.len() {
        return Err(AssessmentError::AnswerCountMismatch {
            expected: questions.len(),
            got: answers.len(),
        });
    }

    let mut correct = 0_u8;
    for (index, (question, answer)) in questions.iter().zip(answers).enumerate() {
        let chosen = answer.ok_or(AssessmentError::Unanswered { index })?;
        if chosen == question.correct_index {
            correct = correct.saturating_add(1);
        }
    }

    Ok(correct)
}
