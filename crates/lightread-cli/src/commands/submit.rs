//! The `lightread submit` command.

use std::path::Path;

use anyhow::{bail, Context, Result};

use lightread_core::model::QuizQuestion;
use lightread_core::scoring;
use lightread_session::state::SessionState;

pub fn execute(state_path: &Path, answers: &str) -> Result<()> {
    let mut state = SessionState::load(state_path)?;
    let quiz = state
        .active_quiz
        .clone()
        .context("no pending quiz; run `lightread quiz <chapter>` first")?;

    let submitted = parse_answers(answers, &quiz.questions)?;
    let summary = scoring::grade(&quiz.questions, &submitted)?;

    state.record_quiz_result(quiz.chapter_index, &summary)?;
    state.save(state_path)?;

    println!(
        "You scored {}/{} ({}%).",
        summary.correct, summary.total, summary.percentage
    );

    Ok(())
}

/// Map comma-separated choice letters ("A,C,-,B") onto the stored choice
/// strings; "-" or an empty slot marks a question as unanswered.
fn parse_answers(raw: &str, questions: &[QuizQuestion]) -> Result<Vec<Option<String>>> {
    let letters: Vec<&str> = raw.split(',').map(str::trim).collect();
    if letters.len() != questions.len() {
        bail!(
            "expected {} answer(s), got {}",
            questions.len(),
            letters.len()
        );
    }

    letters
        .iter()
        .zip(questions)
        .map(|(letter, question)| {
            if letter.is_empty() || *letter == "-" {
                return Ok(None);
            }
            let index = match letter.to_ascii_uppercase().as_str() {
                "A" => 0,
                "B" => 1,
                "C" => 2,
                "D" => 3,
                other => bail!("choice must be A-D or '-', got {other:?}"),
            };
            let choice = question
                .choices
                .get(index)
                .with_context(|| format!("question has no choice {letter}"))?;
            Ok(Some(choice.clone()))
        })
        .collect()
}
