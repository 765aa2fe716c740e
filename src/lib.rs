//! Terminal multiple-choice geography quiz.
//!
//! [`quiz::logic`] holds the pure validation and scoring functions,
//! [`runner::QuizRunner`] drives an interactive run over any line-based
//! input and output.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod quiz;
pub mod runner;
pub mod state;

pub use error::{ConfigError, InvalidChoice, LoadError, QuestionError, QuestionSetError, QuizError};
pub use quiz::{ChoiceId, Question, QuizOption};
pub use runner::{QuizReport, QuizRunner};
