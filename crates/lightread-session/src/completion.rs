//! Completion notice.
//!
//! The final handoff a member shares with the club admin once every chapter
//! is read. It carries only the member id, name, book title, and the
//! member's note — never any book text.

use anyhow::{bail, Result};

use lightread_core::model::Book;

use crate::member::Member;

/// Build the completion notice for a finished book.
///
/// Refuses while any chapter is below 100% progress.
pub fn completion_notice(member: &Member, book: &Book, note: &str) -> Result<String> {
    if !book.all_done() {
        bail!(
            "not every chapter is finished yet (overall progress {}%)",
            book.overall_progress()
        );
    }

    let mut lines = vec![
        "lightread — Completion Notice".to_string(),
        format!("Member ID: {}", member.id),
        format!("Name: {}", member.name),
        format!("Book: {}", book.title),
    ];
    let note = note.trim();
    if !note.is_empty() {
        lines.push(format!("Note: {note}"));
    }
    Ok(lines.join("\n"))
}
