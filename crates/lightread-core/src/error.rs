//! Core error types.
//!
//! Segmentation and synthesis never fail — degenerate input yields empty
//! output that callers surface as "no chapters found" / "no questions could
//! be generated". The only typed failure is a grading contract violation.

use thiserror::Error;

/// Errors from the core pipeline.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The caller submitted a choice list whose length does not match the
    /// question list. Never silently truncated or padded.
    #[error("submitted {submitted} choice(s) for {questions} question(s)")]
    SubmissionLengthMismatch { questions: usize, submitted: usize },
}
