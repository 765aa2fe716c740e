//! Answer validation, scoring, and question rendering.
//!
//! Everything here is free of hidden state; the only side effect is
//! `render_question` writing to the sink it is handed.

use std::io::{self, Write};

use super::{ChoiceId, Question};

/// Parses an answer exactly as given. Callers trim before calling.
#[must_use]
pub fn parse_choice(input: &str) -> Option<ChoiceId> {
    input.parse().ok()
}

/// Returns true iff `input` is exactly one of `A`-`D` or `a`-`d`.
#[must_use]
pub fn validate_choice(input: &str) -> bool {
    parse_choice(input).is_some()
}

#[must_use]
pub fn is_correct(choice: ChoiceId, question: &Question) -> bool {
    choice == question.correct
}

/// Counts correct answers, pairing answers and questions by position.
///
/// Anything beyond the shorter of the two sequences is ignored.
#[must_use]
pub fn compute_score(answers: &[ChoiceId], questions: &[Question]) -> u32 {
    let correct = answers
        .iter()
        .zip(questions)
        .filter(|(answer, question)| is_correct(**answer, question))
        .count();
    u32::try_from(correct).unwrap_or(u32::MAX)
}

/// Integer percentage of `score` out of `total`, rounding halves up.
///
/// A `total` of zero yields 0.
#[must_use]
pub fn compute_percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score);
    let total = u64::from(total);
    let rounded = (score * 200 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Writes the question header followed by one line per option.
///
/// `index` is 0-based; the header shows it 1-based.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_question<W: Write>(
    out: &mut W,
    question: &Question,
    index: usize,
    total: usize,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Q{}/{total}: {}", index + 1, question.prompt)?;
    for option in &question.options {
        writeln!(out, "{}: {}", option.id, option.text)?;
    }
    Ok(())
}
