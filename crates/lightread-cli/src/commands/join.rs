//! The `lightread join` command.

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;

use lightread_session::member::Member;
use lightread_session::state::SessionState;

pub fn execute(
    state_path: &Path,
    name: String,
    phone: String,
    book_title: String,
    day: String,
    start_date: NaiveDate,
) -> Result<()> {
    let mut state = SessionState::load(state_path)?;

    // keep an existing id across profile updates
    let id = state
        .member
        .as_ref()
        .map(|m| m.id.clone())
        .unwrap_or_else(Member::generate_id);

    state.member = Some(Member {
        id: id.clone(),
        name: name.clone(),
        phone,
        book_title,
        day,
        start_date,
    });
    state.save(state_path)?;

    println!("Welcome, {name}! Your member ID is {id}.");
    println!("Now load your book with: lightread load <file>");

    Ok(())
}
