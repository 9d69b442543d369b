//! Local session state with JSON persistence.
//!
//! The single document the CLI operates on: member profile, the loaded book
//! with its per-chapter progress, and the pending quiz attempt. The core
//! stays pure; every mutation of chapter progress and scores happens here.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use lightread_core::model::{Book, Chapter, QuizQuestion};
use lightread_core::scoring::GradeSummary;

use crate::member::Member;

/// A quiz generated but not yet submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveQuiz {
    /// Chapter the quiz was generated from.
    pub chapter_index: usize,
    pub questions: Vec<QuizQuestion>,
}

/// Everything lightread persists between invocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub member: Option<Member>,
    #[serde(default)]
    pub book: Option<Book>,
    /// Pending attempt between `quiz` and `submit`. Re-running `quiz`
    /// regenerates from scratch; nothing here survives re-entry.
    #[serde(default)]
    pub active_quiz: Option<ActiveQuiz>,
}

impl SessionState {
    /// Load state from `path`. A missing file is a fresh default; a corrupt
    /// file is discarded with a warning rather than treated as fatal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read state file {}", path.display()))?;
        match serde_json::from_str(&content) {
            Ok(state) => Ok(state),
            Err(e) => {
                tracing::warn!("discarding corrupt state file {}: {e}", path.display());
                Ok(Self::default())
            }
        }
    }

    /// Save state to `path` as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize state")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write state file {}", path.display()))?;
        Ok(())
    }

    /// Set reading progress on one chapter, clamped to 100.
    pub fn set_progress(&mut self, index: usize, percent: u8) -> Result<()> {
        let chapter = self.chapter_mut(index)?;
        chapter.progress = percent.min(100);
        Ok(())
    }

    /// Record a graded attempt on its chapter and clear the pending quiz.
    pub fn record_quiz_result(&mut self, index: usize, summary: &GradeSummary) -> Result<()> {
        let chapter = self.chapter_mut(index)?;
        chapter.quiz_taken = true;
        chapter.score = summary.percentage;
        self.active_quiz = None;
        Ok(())
    }

    fn chapter_mut(&mut self, index: usize) -> Result<&mut Chapter> {
        let book = self.book.as_mut().context("no book loaded")?;
        let count = book.chapters.len();
        book.chapters
            .get_mut(index)
            .with_context(|| format!("no chapter {index} (book has {count})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_book() -> SessionState {
        let chapters = vec![
            Chapter::new("Chapter 1", "a body long enough to matter here"),
            Chapter::new("Chapter 2", "another body long enough to matter"),
        ];
        SessionState {
            book: Some(Book::new("Test Book", chapters)),
            ..SessionState::default()
        }
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut state = state_with_book();
        state.set_progress(1, 80).unwrap();
        state.save(&path).unwrap();

        let loaded = SessionState::load(&path).unwrap();
        let book = loaded.book.unwrap();
        assert_eq!(book.chapters.len(), 2);
        assert_eq!(book.chapters[1].progress, 80);
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let state = SessionState::load(&dir.path().join("absent.json")).unwrap();
        assert!(state.member.is_none());
        assert!(state.book.is_none());
    }

    #[test]
    fn corrupt_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json at all").unwrap();

        let state = SessionState::load(&path).unwrap();
        assert!(state.book.is_none());
    }

    #[test]
    fn progress_is_clamped() {
        let mut state = state_with_book();
        state.set_progress(0, 250).unwrap();
        assert_eq!(state.book.as_ref().unwrap().chapters[0].progress, 100);
    }

    #[test]
    fn progress_on_missing_chapter_fails() {
        let mut state = state_with_book();
        assert!(state.set_progress(9, 10).is_err());
        assert!(SessionState::default().set_progress(0, 10).is_err());
    }

    #[test]
    fn quiz_result_marks_chapter_and_clears_attempt() {
        let mut state = state_with_book();
        state.active_quiz = Some(ActiveQuiz {
            chapter_index: 0,
            questions: vec![],
        });

        let summary = GradeSummary {
            correct: 3,
            total: 4,
            percentage: 75,
        };
        state.record_quiz_result(0, &summary).unwrap();

        let chapter = &state.book.as_ref().unwrap().chapters[0];
        assert!(chapter.quiz_taken);
        assert_eq!(chapter.score, 75);
        assert!(state.active_quiz.is_none());
    }
}
