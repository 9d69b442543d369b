//! The `lightread progress` command.

use std::path::Path;

use anyhow::{bail, Result};

use lightread_session::state::SessionState;

pub fn execute(state_path: &Path, chapter: usize, percent: u8) -> Result<()> {
    if chapter == 0 {
        bail!("chapter numbers start at 1");
    }

    let mut state = SessionState::load(state_path)?;
    state.set_progress(chapter - 1, percent)?;
    state.save(state_path)?;

    println!("Chapter {chapter} progress set to {}%.", percent.min(100));

    Ok(())
}
