//! The `lightread status` command.

use std::path::Path;

use anyhow::Result;

use lightread_session::state::SessionState;

pub fn execute(state_path: &Path) -> Result<()> {
    let state = SessionState::load(state_path)?;

    match &state.member {
        Some(member) => {
            println!("Member: {} ({})", member.name, member.id);
            println!("Book title: {}", member.book_title);
            println!("Meets: {} from {}", member.day, member.start_date);
        }
        None => println!("No member profile yet. Run `lightread join` to get started."),
    }

    match &state.book {
        Some(book) => {
            println!(
                "Loaded book: {} — {} chapter(s), {}% overall",
                book.title,
                book.chapters.len(),
                book.overall_progress()
            );
            let taken = book.chapters.iter().filter(|c| c.quiz_taken).count();
            println!("Quizzes taken: {taken}/{}", book.chapters.len());
        }
        None => println!("No book loaded."),
    }

    Ok(())
}
