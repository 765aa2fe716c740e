//! Application-wide constants and configuration values.
//!
//! This module defines all static configuration values used throughout geoquiz,
//! including file names, defaults, and the text printed during a quiz run.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Path Configuration ===

/// Name of the configuration subdirectory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "geoquiz";
/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "GEOQUIZ_CONFIG";

// === Logging ===

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// === Question File Formats ===

pub const EXT_TOML: &str = "toml";
pub const EXT_JSON: &str = "json";

// === Quiz Output ===

/// Banner printed once before the first question.
pub const MSG_WELCOME: &str = "Hello! Welcome to my Geography Quiz! You can only put A, B, C, D";
/// Prompt written (without newline) before every answer read.
pub const PROMPT_ANSWER: &str = "Your answer: ";
/// Longest answer line kept in memory; the rest of a longer line is skipped.
pub const MAX_ANSWER_LINE_BYTES: usize = 1024;
/// Printed after an answer that is not one of A-D.
pub const MSG_RETRY: &str = "Try again: A, B, C, D?";
/// Prefix for a correct answer, followed by the running score.
pub const MSG_CORRECT: &str = "✓ Correct answer! Bravo! Your score is ";
/// Prefix for a wrong answer, followed by the correct letter.
pub const MSG_WRONG: &str = "✗ Wrong! Correct answer: ";
/// Prefix for the explanation line.
pub const EXPLAIN_MARKER: &str = "💡 ";
/// Width of the separator framing the final summary.
pub const SUMMARY_RULE_WIDTH: usize = 40;
/// Character used for the summary separator.
pub const SUMMARY_RULE_CHAR: char = '=';
/// Label preceding the final score.
pub const LABEL_FINAL_SCORE: &str = "Final Score: ";

// === Messages: CLI Output ===

pub const CLI_MSG_CHECK_OK: &str = "Question file OK: ";
pub const CLI_MSG_CHECK_COUNT_SUFFIX: &str = " question(s)";
