//! Question model and the pure quiz logic built on top of it.

pub mod bank;
pub mod loader;
pub mod logic;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidChoice, QuestionError, QuestionSetError};

/// Label of one of the four options of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChoiceId {
    A,
    B,
    C,
    D,
}

impl ChoiceId {
    /// All labels in display order.
    pub const ALL: [ChoiceId; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Uppercase letter for this label.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for ChoiceId {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            "C" | "c" => Ok(Self::C),
            "D" | "d" => Ok(Self::D),
            _ => Err(InvalidChoice(s.to_string())),
        }
    }
}

/// One labeled answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: ChoiceId,
    pub text: String,
}

impl QuizOption {
    pub fn new(id: ChoiceId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// A single multiple-choice quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: [QuizOption; 4],
    pub correct: ChoiceId,
    /// Shown after every answer, right or wrong.
    #[serde(alias = "explain")]
    pub explanation: String,
}

impl Question {
    /// Builds a question whose options are labeled A-D in order.
    pub fn new(
        prompt: impl Into<String>,
        texts: [&str; 4],
        correct: ChoiceId,
        explanation: impl Into<String>,
    ) -> Self {
        let [a, b, c, d] = texts;
        Self {
            prompt: prompt.into(),
            options: [
                QuizOption::new(ChoiceId::A, a),
                QuizOption::new(ChoiceId::B, b),
                QuizOption::new(ChoiceId::C, c),
                QuizOption::new(ChoiceId::D, d),
            ],
            correct,
            explanation: explanation.into(),
        }
    }

    /// Checks the structural invariants of a question.
    ///
    /// Four option slots with no repeated label means every label is present,
    /// so `correct` always names an existing option once this passes.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        let mut seen = [false; 4];
        for option in &self.options {
            let slot = &mut seen[option.id as usize];
            if *slot {
                return Err(QuestionError::DuplicateOption(option.id));
            }
            *slot = true;
            if option.text.trim().is_empty() {
                return Err(QuestionError::EmptyOptionText(option.id));
            }
        }
        if self.explanation.trim().is_empty() {
            return Err(QuestionError::EmptyExplanation);
        }
        Ok(())
    }
}

/// Validates every question of a set and rejects repeated prompts.
///
/// # Errors
///
/// Returns the first problem found, numbered from 1.
pub fn validate_questions(questions: &[Question]) -> Result<(), QuestionSetError> {
    if questions.is_empty() {
        return Err(QuestionSetError::Empty);
    }
    let mut prompts: HashMap<&str, usize> = HashMap::with_capacity(questions.len());
    for (idx, question) in questions.iter().enumerate() {
        let number = idx + 1;
        question
            .validate()
            .map_err(|source| QuestionSetError::Invalid { number, source })?;
        if let Some(&first) = prompts.get(question.prompt.as_str()) {
            return Err(QuestionSetError::DuplicatePrompt { number, first });
        }
        prompts.insert(question.prompt.as_str(), number);
    }
    Ok(())
}
