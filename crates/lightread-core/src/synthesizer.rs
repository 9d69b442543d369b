//! Cloze quiz synthesis.
//!
//! Turns a chapter body into fill-in-the-blank multiple-choice questions by
//! blanking one word per qualifying sentence and drawing distractors from
//! the chapter's own vocabulary. A heuristic generator for quick
//! comprehension checks, not NLP: terse or list-like chapters legitimately
//! yield zero questions.

use std::collections::HashSet;
use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use serde::Deserialize;

use crate::model::QuizQuestion;

/// Every question carries exactly this many choices.
pub const CHOICES_PER_QUESTION: usize = 4;

/// Marker substituted for the answer inside the prompt.
pub const BLANK: &str = "_____";

/// Token used to pad the choice list when the chapter vocabulary cannot
/// supply three distinct distractors. Degraded but valid output.
pub const PLACEHOLDER: &str = "______";

const DISTRACTOR_COUNT: usize = CHOICES_PER_QUESTION - 1;
const DISTRACTOR_RETRIES: usize = 50;
/// Answers must be strictly longer than this.
const MIN_ANSWER_LEN: usize = 4;

/// Alphabetic tokens (accented letters and apostrophes included) of length
/// three or more.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-zÀ-ÖØ-öø-ÿ']{3,}\b").unwrap());

static SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]*").unwrap());

/// Tuning knobs for [`synthesize_with`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuizOptions {
    /// Upper bound on questions per quiz.
    pub max_questions: usize,
    /// Sentences at or under this length are skipped.
    pub min_sentence_len: usize,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            max_questions: 20,
            min_sentence_len: 40,
        }
    }
}

/// Synthesize up to `max_questions` questions using the process RNG.
pub fn synthesize(chapter_text: &str, max_questions: usize) -> Vec<QuizQuestion> {
    let options = QuizOptions {
        max_questions,
        ..QuizOptions::default()
    };
    synthesize_with(chapter_text, &options, &mut rand::thread_rng())
}

/// Synthesize questions with explicit options and RNG.
///
/// The RNG drives answer selection, distractor sampling, and choice order;
/// seeding it makes the whole synthesis deterministic. Questions come back
/// in document order, one per consumed sentence, capped at
/// `options.max_questions`.
pub fn synthesize_with<R: Rng>(
    chapter_text: &str,
    options: &QuizOptions,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let sentences: Vec<String> = split_sentences(chapter_text)
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| s.chars().count() > options.min_sentence_len)
        .collect();
    let word_pool = tokenize(chapter_text);

    let mut questions = Vec::new();
    let mut consumed: HashSet<String> = HashSet::new();

    for sentence in sentences {
        if questions.len() >= options.max_questions {
            break;
        }
        if consumed.contains(&sentence) {
            continue;
        }
        let words = tokenize(&sentence);
        if words.is_empty() {
            continue;
        }
        let candidates: Vec<&String> = words
            .iter()
            .filter(|w| w.chars().count() > MIN_ANSWER_LEN)
            .collect();
        let Some(&answer) = candidates.choose(rng) else {
            // nothing distinctive enough to blank out
            continue;
        };
        let answer = answer.clone();

        let distractors = draw_distractors(&word_pool, &answer, rng);
        let mut choices = Vec::with_capacity(CHOICES_PER_QUESTION);
        choices.push(answer.clone());
        choices.extend(distractors);
        choices.shuffle(rng);

        let prompt = blank_first_occurrence(&sentence, &answer);

        consumed.insert(sentence);
        questions.push(QuizQuestion {
            prompt,
            choices,
            answer,
        });
    }

    questions
}

/// Split on terminal punctuation: a run of non-terminators plus any trailing
/// `.`/`!`/`?`. Text with no terminators at all is one sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let found: Vec<&str> = SENTENCE_RE.find_iter(text).map(|m| m.as_str()).collect();
    if found.is_empty() {
        vec![text]
    } else {
        found
    }
}

fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Sample three distractors from the chapter word pool, rejecting
/// case-insensitive duplicates of the answer and of one another. Shortfall
/// within the retry budget is padded with [`PLACEHOLDER`].
fn draw_distractors<R: Rng>(pool: &[String], answer: &str, rng: &mut R) -> Vec<String> {
    let answer_lower = answer.to_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    let mut distractors = Vec::with_capacity(DISTRACTOR_COUNT);

    let mut tries = 0;
    while distractors.len() < DISTRACTOR_COUNT && tries < DISTRACTOR_RETRIES {
        tries += 1;
        let Some(word) = pool.choose(rng) else {
            break;
        };
        let lower = word.to_lowercase();
        if lower != answer_lower && !seen.contains(&lower) {
            seen.insert(lower);
            distractors.push(word.clone());
        }
    }

    if distractors.len() < DISTRACTOR_COUNT {
        tracing::warn!(
            found = distractors.len(),
            "vocabulary too small for distinct distractors, padding with placeholder"
        );
        while distractors.len() < DISTRACTOR_COUNT {
            distractors.push(PLACEHOLDER.to_string());
        }
    }

    distractors
}

/// Replace the first whole-word, case-insensitive occurrence of `answer`
/// with [`BLANK`]. Whole-word matching never clips inside a longer word.
fn blank_first_occurrence(sentence: &str, answer: &str) -> String {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(answer));
    match Regex::new(&pattern) {
        Ok(re) => re.replace(sentence, BLANK).into_owned(),
        Err(_) => sentence.replacen(answer, BLANK, 1),
    }
}
