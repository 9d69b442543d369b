//! The `lightread chapters` command.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use lightread_session::state::SessionState;

pub fn execute(state_path: &Path) -> Result<()> {
    let state = SessionState::load(state_path)?;
    let book = state
        .book
        .as_ref()
        .context("no book loaded; run `lightread load <file>` first")?;

    let mut table = Table::new();
    table.set_header(vec!["#", "Title", "Progress", "Quiz"]);

    for (i, chapter) in book.chapters.iter().enumerate() {
        let marker = if i == book.current_index { "*" } else { "" };
        let quiz = if chapter.quiz_taken {
            format!("{}%", chapter.score)
        } else {
            "-".to_string()
        };
        table.add_row(vec![
            Cell::new(format!("{}{marker}", i + 1)),
            Cell::new(&chapter.title),
            Cell::new(format!("{}%", chapter.progress)),
            Cell::new(quiz),
        ]);
    }

    println!("{}", book.title);
    println!("{table}");
    println!("Overall progress: {}%", book.overall_progress());

    Ok(())
}
