//! Interactive quiz loop.
//!
//! The runner renders each question, reads answer lines until one is valid,
//! scores it, and prints a framed summary at the end. It owns its input and
//! output handles and releases them when `run` returns, on success or error.

use std::io::{self, BufRead, Read, Write};

use crate::constants::{
    EXPLAIN_MARKER, LABEL_FINAL_SCORE, MAX_ANSWER_LINE_BYTES, MSG_CORRECT, MSG_RETRY,
    MSG_WELCOME, MSG_WRONG, PROMPT_ANSWER, SUMMARY_RULE_CHAR, SUMMARY_RULE_WIDTH,
};
use crate::error::QuizError;
use crate::quiz::logic::{compute_percentage, compute_score, is_correct, parse_choice, render_question};
use crate::quiz::{ChoiceId, Question};
use crate::state::QuizSession;

/// Outcome of a completed quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
    /// Accepted answers in question order.
    pub answers: Vec<ChoiceId>,
}

/// Drives one quiz over a fixed, ordered question list.
pub struct QuizRunner<'q, R, W> {
    questions: &'q [Question],
    input: R,
    output: W,
    max_retries: Option<u32>,
}

impl<'q, R: BufRead, W: Write> QuizRunner<'q, R, W> {
    pub fn new(questions: &'q [Question], input: R, output: W) -> Self {
        Self {
            questions,
            input,
            output,
            max_retries: None,
        }
    }

    /// Bound the number of invalid answers tolerated per question.
    /// `None` keeps re-prompting forever.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: Option<u32>) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Runs the quiz to completion.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, when input ends before every question has an
    /// answer, or when the retry bound is exceeded.
    pub fn run(mut self) -> Result<QuizReport, QuizError> {
        let questions = self.questions;
        let total = questions.len();
        let mut session = QuizSession::new(total);

        writeln!(self.output, "{MSG_WELCOME}")?;
        session.begin();

        while let Some(index) = session.state().question_index() {
            let question = &questions[index];
            render_question(&mut self.output, question, index, total)?;

            session.await_answer();
            let choice = self.read_choice(index)?;

            let correct = is_correct(choice, question);
            let score = session.record(choice, correct);
            if correct {
                writeln!(self.output, "{MSG_CORRECT}{score}")?;
            } else {
                writeln!(self.output, "{MSG_WRONG}{}", question.correct)?;
            }
            writeln!(self.output, "{EXPLAIN_MARKER}{}", question.explanation)?;
            writeln!(self.output)?;

            session.advance();
        }

        let score = compute_score(session.answers(), questions);
        let percentage = compute_percentage(score, u32::try_from(total).unwrap_or(u32::MAX));
        self.write_summary(score, total, percentage)?;
        self.output.flush()?;

        log::info!("quiz finished: {score}/{total} ({percentage}%)");
        Ok(QuizReport {
            score,
            total,
            percentage,
            answers: session.answers().to_vec(),
        })
    }

    /// Prompt until a valid choice arrives for question `index` (0-based).
    ///
    /// Lines that are not valid UTF-8 or not one of A-D count as invalid
    /// answers; only end of input and stream errors are fatal.
    fn read_choice(&mut self, index: usize) -> Result<ChoiceId, QuizError> {
        let question = index + 1;
        let mut invalid = 0u32;
        let mut line = Vec::new();

        loop {
            write!(self.output, "{PROMPT_ANSWER}")?;
            self.output.flush()?;

            if self.read_answer_line(&mut line)? == 0 {
                log::warn!("input closed at question {question}");
                return Err(QuizError::InputClosed { question });
            }

            let answer = String::from_utf8_lossy(&line).trim().to_uppercase();
            if let Some(choice) = parse_choice(&answer) {
                return Ok(choice);
            }

            invalid += 1;
            log::debug!("question {question}: rejected answer {answer:?} ({invalid} so far)");
            if self.max_retries.is_some_and(|max| invalid > max) {
                return Err(QuizError::RetriesExhausted {
                    question,
                    attempts: invalid,
                });
            }
            writeln!(self.output, "{MSG_RETRY}")?;
        }
    }

    /// Read one line into `buf`, keeping at most `MAX_ANSWER_LINE_BYTES`.
    /// The rest of an over-long line is skipped. Returns 0 only at end of input.
    fn read_answer_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        buf.clear();
        let read = (&mut self.input)
            .take(MAX_ANSWER_LINE_BYTES as u64)
            .read_until(b'\n', buf)?;
        if read == MAX_ANSWER_LINE_BYTES && buf.last() != Some(&b'\n') {
            self.skip_rest_of_line()?;
        }
        Ok(read)
    }

    fn skip_rest_of_line(&mut self) -> io::Result<()> {
        loop {
            let available = self.input.fill_buf()?;
            if available.is_empty() {
                return Ok(());
            }
            if let Some(pos) = available.iter().position(|&b| b == b'\n') {
                self.input.consume(pos + 1);
                return Ok(());
            }
            let len = available.len();
            self.input.consume(len);
        }
    }

    fn write_summary(&mut self, score: u32, total: usize, percentage: u32) -> Result<(), QuizError> {
        let rule = SUMMARY_RULE_CHAR.to_string().repeat(SUMMARY_RULE_WIDTH);
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "{LABEL_FINAL_SCORE}{score}/{total} ({percentage}%)")?;
        writeln!(self.output, "{rule}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::bank;
    use std::io::Cursor;

    fn run_with(questions: &[Question], input: &str) -> (Result<QuizReport, QuizError>, String) {
        let mut out = Vec::new();
        let result = QuizRunner::new(questions, Cursor::new(input.to_string()), &mut out).run();
        (result, String::from_utf8(out).unwrap())
    }

    fn answer_key(questions: &[Question]) -> String {
        questions
            .iter()
            .map(|q| format!("{}\n", q.correct))
            .collect()
    }

    #[test]
    fn test_perfect_run() {
        let questions = bank::geography();
        let (result, out) = run_with(questions, &answer_key(questions));
        let report = result.unwrap();

        assert_eq!(report.score, 10);
        assert_eq!(report.total, 10);
        assert_eq!(report.percentage, 100);
        assert!(out.starts_with(MSG_WELCOME));
        assert!(out.contains("Q1/10: What is the capital of Australia?"));
        assert!(out.contains("C: Canberra"));
        assert!(out.contains("✓ Correct answer! Bravo! Your score is 10"));
        assert!(out.contains("Final Score: 10/10 (100%)"));
        assert!(!out.contains(MSG_RETRY));
    }

    #[test]
    fn test_lowercase_and_padded_answers_accepted() {
        let questions = &bank::geography()[..2];
        let (result, _) = run_with(questions, "  c \n\ta\n");
        assert_eq!(result.unwrap().score, 2);
    }

    #[test]
    fn test_single_invalid_token_retries_once() {
        let questions = &bank::geography()[..3];
        let (result, out) = run_with(questions, "C\nE\nA\nA\n");
        let report = result.unwrap();

        assert_eq!(out.matches(MSG_RETRY).count(), 1);
        assert_eq!(out.matches(PROMPT_ANSWER).count(), 4);
        assert_eq!(report.score, 3);
        assert_eq!(report.answers, vec![ChoiceId::C, ChoiceId::A, ChoiceId::A]);
    }

    #[test]
    fn test_wrong_answer_feedback() {
        let questions = &bank::geography()[..1];
        let (result, out) = run_with(questions, "A\n");
        let report = result.unwrap();

        assert_eq!(report.score, 0);
        assert_eq!(report.percentage, 0);
        assert!(out.contains("✗ Wrong! Correct answer: C"));
        assert!(out.contains("💡 Canberra was chosen as a compromise between Sydney and Melbourne."));
        assert!(out.contains("Final Score: 0/1 (0%)"));
    }

    #[test]
    fn test_partial_score_percentage() {
        let questions = &bank::geography()[..3];
        // C (right), B (wrong), D (wrong)
        let (result, out) = run_with(questions, "C\nB\nD\n");
        assert_eq!(result.unwrap().percentage, 33);
        assert!(out.contains("Final Score: 1/3 (33%)"));
    }

    #[test]
    fn test_summary_framed_by_rules() {
        let questions = &bank::geography()[..1];
        let (_, out) = run_with(questions, "C\n");
        let rule = "=".repeat(40);
        let tail: Vec<&str> = out.lines().rev().take(3).collect();
        assert_eq!(tail, vec![rule.as_str(), "Final Score: 1/1 (100%)", rule.as_str()]);
    }

    #[test]
    fn test_input_closed_is_fatal() {
        let questions = bank::geography();
        let (result, out) = run_with(questions, "C\nA\n");
        assert!(matches!(result, Err(QuizError::InputClosed { question: 3 })));
        assert!(!out.contains(LABEL_FINAL_SCORE));
    }

    #[test]
    fn test_input_closed_during_retries() {
        let questions = bank::geography();
        let (result, _) = run_with(questions, "x\ny\n");
        assert!(matches!(result, Err(QuizError::InputClosed { question: 1 })));
    }

    #[test]
    fn test_retry_bound() {
        let questions = bank::geography();
        let mut out = Vec::new();
        let result = QuizRunner::new(questions, Cursor::new("E\nF\nC\n"), &mut out)
            .with_max_retries(Some(1))
            .run();
        assert!(matches!(
            result,
            Err(QuizError::RetriesExhausted {
                question: 1,
                attempts: 2
            })
        ));
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches(MSG_RETRY).count(), 1);
    }

    #[test]
    fn test_retry_bound_not_hit() {
        let questions = &bank::geography()[..1];
        let mut out = Vec::new();
        let report = QuizRunner::new(questions, Cursor::new("E\nC\n"), &mut out)
            .with_max_retries(Some(1))
            .run()
            .unwrap();
        assert_eq!(report.score, 1);
    }

    #[test]
    fn test_invalid_utf8_line_retries() {
        let questions = &bank::geography()[..1];
        let mut out = Vec::new();
        let input: &[u8] = &[0xFF, 0xFE, b'\n', b'C', b'\n'];
        let report = QuizRunner::new(questions, Cursor::new(input), &mut out)
            .run()
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches(MSG_RETRY).count(), 1);
        assert_eq!(report.score, 1);
    }

    #[test]
    fn test_invalid_utf8_counts_toward_retry_bound() {
        let questions = &bank::geography()[..1];
        let mut out = Vec::new();
        let input: &[u8] = &[0xE9, b'\n', b'C', b'\n'];
        let result = QuizRunner::new(questions, Cursor::new(input), &mut out)
            .with_max_retries(Some(0))
            .run();
        assert!(matches!(
            result,
            Err(QuizError::RetriesExhausted {
                question: 1,
                attempts: 1
            })
        ));
    }

    #[test]
    fn test_overlong_line_is_one_invalid_answer() {
        let questions = &bank::geography()[..2];
        let input = format!("{}\nC\nA\n", "C".repeat(MAX_ANSWER_LINE_BYTES * 3));
        let (result, out) = run_with(questions, &input);
        let report = result.unwrap();
        assert_eq!(out.matches(MSG_RETRY).count(), 1);
        assert_eq!(report.answers, vec![ChoiceId::C, ChoiceId::A]);
    }

    #[test]
    fn test_report_score_matches_answers() {
        let questions = bank::geography();
        // Right on 1, 3, 4; wrong elsewhere.
        let input = "C\nB\nA\nB\nA\nA\nA\nA\nA\nA\n";
        let (result, out) = run_with(questions, input);
        let report = result.unwrap();
        assert_eq!(report.score, 3);
        assert_eq!(report.score, compute_score(&report.answers, questions));
        assert!(out.contains("✓ Correct answer! Bravo! Your score is 3"));
        assert!(out.contains("Final Score: 3/10 (30%)"));
    }

    #[test]
    fn test_empty_question_list() {
        let (result, out) = run_with(&[], "");
        let report = result.unwrap();
        assert_eq!(report.total, 0);
        assert_eq!(report.percentage, 0);
        assert!(out.contains("Final Score: 0/0 (0%)"));
    }
}
