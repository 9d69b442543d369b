//! Core data model types for lightread.
//!
//! Plain serializable records: a book, its chapters, and the quiz questions
//! synthesized from a chapter. The reading-progress fields on [`Chapter`]
//! belong to the session layer; the segmenter and synthesizer never touch
//! them.

use serde::{Deserialize, Serialize};

/// One chapter of an ingested book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// Heading line as found in the text, or a positional "Chapter N" label.
    pub title: String,
    /// Chapter body, trimmed. Never empty in segmenter output.
    pub text: String,
    /// Reading progress, 0–100. Mutated by the session layer only.
    #[serde(default)]
    pub progress: u8,
    /// Whether a quiz for this chapter has been submitted.
    #[serde(default)]
    pub quiz_taken: bool,
    /// Last quiz score, 0–100.
    #[serde(default)]
    pub score: u8,
}

impl Chapter {
    /// A freshly segmented chapter with no reading progress yet.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            progress: 0,
            quiz_taken: false,
            score: 0,
        }
    }
}

/// An ingested book: ordered chapters plus a cursor for the reading view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Book title, usually the member's declared title or the file name.
    pub title: String,
    /// Chapters in document order.
    pub chapters: Vec<Chapter>,
    /// Currently open chapter. Valid whenever `chapters` is non-empty;
    /// reset to 0 whenever it would fall out of range.
    #[serde(default)]
    pub current_index: usize,
}

impl Book {
    pub fn new(title: impl Into<String>, chapters: Vec<Chapter>) -> Self {
        Self {
            title: title.into(),
            chapters,
            current_index: 0,
        }
    }

    /// Make `index` the current chapter, resetting to 0 if out of range.
    pub fn select(&mut self, index: usize) {
        self.current_index = if index < self.chapters.len() { index } else { 0 };
    }

    /// The currently open chapter, if the book has any.
    pub fn current_chapter(&self) -> Option<&Chapter> {
        self.chapters.get(self.current_index)
    }

    /// Rounded mean of per-chapter progress; 0 for an empty book.
    pub fn overall_progress(&self) -> u8 {
        if self.chapters.is_empty() {
            return 0;
        }
        let sum: u32 = self.chapters.iter().map(|c| u32::from(c.progress)).sum();
        (f64::from(sum) / self.chapters.len() as f64).round() as u8
    }

    /// True once every chapter has been read to 100%.
    pub fn all_done(&self) -> bool {
        !self.chapters.is_empty() && self.chapters.iter().all(|c| c.progress >= 100)
    }
}

/// A cloze multiple-choice question synthesized from one sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Source sentence with the answer blanked out.
    pub prompt: String,
    /// Exactly four choices in presentation order; contains `answer`.
    pub choices: Vec<String>,
    /// The blanked word.
    pub answer: String,
}
