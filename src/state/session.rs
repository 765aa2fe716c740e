//! Quiz session state types.

use crate::quiz::ChoiceId;

/// Quiz run state machine.
///
/// Question indices are 0-based. A run moves through
/// `AskingQuestion(i) → ValidatingAnswer(i) → Scoring(i)` once per question
/// and ends in `Finished` after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Created but no question shown yet.
    #[default]
    NotStarted,
    /// Question is being rendered.
    AskingQuestion(usize),
    /// Waiting for a valid answer line.
    ValidatingAnswer(usize),
    /// A valid answer was accepted and scored.
    Scoring(usize),
    /// All questions processed.
    Finished,
}

impl SessionState {
    /// Index of the question in play, if any.
    #[must_use]
    pub const fn question_index(self) -> Option<usize> {
        match self {
            Self::AskingQuestion(i) | Self::ValidatingAnswer(i) | Self::Scoring(i) => Some(i),
            Self::NotStarted | Self::Finished => None,
        }
    }
}

/// Running tally of one quiz execution.
///
/// Owned by the run loop and dropped with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    state: SessionState,
    score: u32,
    total: usize,
    answers: Vec<ChoiceId>,
}

impl QuizSession {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            state: SessionState::NotStarted,
            score: 0,
            total,
            answers: Vec::with_capacity(total),
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Accepted answers in question order.
    #[must_use]
    pub fn answers(&self) -> &[ChoiceId] {
        &self.answers
    }

    /// `NotStarted → AskingQuestion(0)`, or straight to `Finished` for an
    /// empty quiz.
    pub fn begin(&mut self) {
        debug_assert_eq!(self.state, SessionState::NotStarted);
        self.state = if self.total == 0 {
            SessionState::Finished
        } else {
            SessionState::AskingQuestion(0)
        };
    }

    /// `AskingQuestion(i) → ValidatingAnswer(i)`.
    pub fn await_answer(&mut self) {
        debug_assert!(
            matches!(self.state, SessionState::AskingQuestion(_)),
            "await_answer from {:?}",
            self.state
        );
        if let SessionState::AskingQuestion(i) = self.state {
            self.state = SessionState::ValidatingAnswer(i);
        }
    }

    /// `ValidatingAnswer(i) → Scoring(i)`, recording the answer and bumping
    /// the score when it was correct. Returns the updated score.
    pub fn record(&mut self, choice: ChoiceId, correct: bool) -> u32 {
        debug_assert!(
            matches!(self.state, SessionState::ValidatingAnswer(_)),
            "record from {:?}",
            self.state
        );
        if let SessionState::ValidatingAnswer(i) = self.state {
            self.answers.push(choice);
            if correct {
                self.score += 1;
            }
            self.state = SessionState::Scoring(i);
        }
        self.score
    }

    /// `Scoring(i) → AskingQuestion(i + 1)`, or `Finished` after the last.
    pub fn advance(&mut self) {
        debug_assert!(
            matches!(self.state, SessionState::Scoring(_)),
            "advance from {:?}",
            self.state
        );
        if let SessionState::Scoring(i) = self.state {
            let next = i + 1;
            self.state = if next < self.total {
                SessionState::AskingQuestion(next)
            } else {
                SessionState::Finished
            };
        }
    }
}
