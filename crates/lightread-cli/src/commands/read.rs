//! The `lightread read` command.

use std::path::Path;

use anyhow::{bail, Context, Result};

use lightread_session::state::SessionState;

pub fn execute(state_path: &Path, chapter: usize) -> Result<()> {
    let mut state = SessionState::load(state_path)?;
    let book = state
        .book
        .as_mut()
        .context("no book loaded; run `lightread load <file>` first")?;

    if chapter == 0 || chapter > book.chapters.len() {
        bail!("no chapter {chapter} (book has {})", book.chapters.len());
    }
    book.select(chapter - 1);

    let current = book.current_chapter().context("book has no chapters")?;
    println!("{}\n", current.title);
    println!("{}", current.text);
    println!(
        "\n[{}% read — update with `lightread progress {chapter} <percent>`]",
        current.progress
    );

    state.save(state_path)?;
    Ok(())
}
