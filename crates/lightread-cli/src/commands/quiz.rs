//! The `lightread quiz` command.

use std::path::Path;

use anyhow::{bail, Context, Result};

use lightread_core::synthesizer;
use lightread_session::state::{ActiveQuiz, SessionState};

use crate::config;

const LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn execute(
    state_path: &Path,
    config_path: &Path,
    chapter: usize,
    max_questions: Option<usize>,
) -> Result<()> {
    let config = config::load_config(config_path)?;

    let mut state = SessionState::load(state_path)?;
    let book = state
        .book
        .as_ref()
        .context("no book loaded; run `lightread load <file>` first")?;

    if chapter == 0 || chapter > book.chapters.len() {
        bail!("no chapter {chapter} (book has {})", book.chapters.len());
    }
    let index = chapter - 1;
    let title = book.chapters[index].title.clone();
    let text = book.chapters[index].text.clone();

    let mut options = config.quiz.clone();
    if let Some(max) = max_questions {
        options.max_questions = max;
    }
    let questions = synthesizer::synthesize_with(&text, &options, &mut rand::thread_rng());

    if questions.is_empty() {
        println!("No questions could be generated for {title}.");
        println!("Longer sentences and a richer vocabulary give better quizzes.");
        return Ok(());
    }

    println!("Quiz — {title}\n");
    for (i, question) in questions.iter().enumerate() {
        println!("{}. {}", i + 1, question.prompt);
        for (letter, choice) in LETTERS.iter().zip(&question.choices) {
            println!("   {letter}) {choice}");
        }
        println!();
    }
    println!("Answer with: lightread submit --answers A,B,-,C");

    state.active_quiz = Some(ActiveQuiz {
        chapter_index: index,
        questions,
    });
    state.save(state_path)?;

    Ok(())
}
