//! Quiz grading.
//!
//! Pure comparison of submitted choices against stored answers. Persisting
//! the resulting score onto the owning chapter is the caller's job.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::QuizQuestion;

/// Outcome of grading one quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeSummary {
    /// Questions answered correctly.
    pub correct: usize,
    /// Total questions in the attempt.
    pub total: usize,
    /// round(correct / total * 100); 0 when there were no questions.
    pub percentage: u8,
}

/// Grade submitted choices against stored answers.
///
/// `submitted` must have one entry per question; `None` marks an unanswered
/// question and never counts as correct. Answers compare case-insensitively.
/// A length mismatch is a caller bug and is rejected rather than truncated
/// or padded.
pub fn grade(
    questions: &[QuizQuestion],
    submitted: &[Option<String>],
) -> Result<GradeSummary, CoreError> {
    if questions.len() != submitted.len() {
        return Err(CoreError::SubmissionLengthMismatch {
            questions: questions.len(),
            submitted: submitted.len(),
        });
    }

    let correct = questions
        .iter()
        .zip(submitted)
        .filter(|(q, choice)| {
            choice
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == q.answer.to_lowercase())
        })
        .count();

    let total = questions.len();
    let percentage = if total == 0 {
        0
    } else {
        (correct as f64 / total as f64 * 100.0).round() as u8
    };

    Ok(GradeSummary {
        correct,
        total,
        percentage,
    })
}
