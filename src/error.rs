//! Error types shared across the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::quiz::ChoiceId;

/// Returned when a string is not exactly one of `A`-`D` (either case).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid choice {0:?}: expected one of A, B, C, D")]
pub struct InvalidChoice(pub String);

/// A single question violates one of its structural invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("explanation is empty")]
    EmptyExplanation,
    #[error("option {0} has no text")]
    EmptyOptionText(ChoiceId),
    #[error("option {0} appears more than once")]
    DuplicateOption(ChoiceId),
}

/// A question set as a whole is unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionSetError {
    #[error("question set is empty")]
    Empty,
    /// `number` is 1-based.
    #[error("question {number}: {source}")]
    Invalid {
        number: usize,
        #[source]
        source: QuestionError,
    },
    #[error("question {number} repeats the prompt of question {first}")]
    DuplicatePrompt { number: usize, first: usize },
}

/// Failure to load a question file from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unsupported question file type: .{0} (expected .toml or .json)")]
    UnsupportedFormat(String),
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QuestionSetError),
}

/// Failure to read the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Fatal termination of a quiz run.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// `question` is 1-based.
    #[error("input closed while waiting for an answer to question {question}")]
    InputClosed { question: usize },
    #[error("no valid answer to question {question} after {attempts} attempt(s)")]
    RetriesExhausted { question: usize, attempts: u32 },
}
