//! The `lightread load` command.

use std::path::Path;

use anyhow::{bail, Context, Result};

use lightread_core::model::Book;
use lightread_core::segmenter;
use lightread_session::state::SessionState;

use crate::config;

pub fn execute(state_path: &Path, config_path: &Path, file: &Path) -> Result<()> {
    let config = config::load_config(config_path)?;

    let text = std::fs::read_to_string(file)
        .with_context(|| format!("unable to read book file {}", file.display()))?;
    if text.trim().chars().count() < config.min_book_len {
        bail!("file is empty or too small; supply a text file with book content");
    }

    let mut state = SessionState::load(state_path)?;
    let title = state
        .member
        .as_ref()
        .filter(|m| !m.book_title.is_empty())
        .map(|m| m.book_title.clone())
        .unwrap_or_else(|| {
            file.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Uploaded Book".into())
        });

    let chapters = segmenter::segment_with(&text, &config.segmenter);
    if chapters.is_empty() {
        bail!("no chapters found in {}", file.display());
    }

    let count = chapters.len();
    state.book = Some(Book::new(title.clone(), chapters));
    state.active_quiz = None;
    state.save(state_path)?;

    println!("Loaded \"{title}\" — {count} chapter(s) detected.");

    Ok(())
}
