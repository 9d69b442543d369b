//! The `lightread complete` command.

use std::path::Path;

use anyhow::{Context, Result};

use lightread_session::completion::completion_notice;
use lightread_session::state::SessionState;

pub fn execute(state_path: &Path, note: &str) -> Result<()> {
    let state = SessionState::load(state_path)?;
    let member = state
        .member
        .as_ref()
        .context("create a member profile first (`lightread join`)")?;
    let book = state
        .book
        .as_ref()
        .context("load and finish a book first (`lightread load <file>`)")?;

    let notice = completion_notice(member, book, note)?;
    println!("{notice}");
    println!("\nShare this notice with your club admin.");

    Ok(())
}
