//! Loading question sets from TOML or JSON files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{validate_questions, Question};
use crate::constants;
use crate::error::LoadError;

/// On-disk layout: a single top-level `questions` array.
#[derive(Debug, Deserialize)]
struct QuestionFile {
    questions: Vec<Question>,
}

/// Supported question file formats, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Determine the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for anything but `.toml` or `.json`.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            constants::EXT_TOML => Ok(Self::Toml),
            constants::EXT_JSON => Ok(Self::Json),
            _ => Err(LoadError::UnsupportedFormat(extension)),
        }
    }
}

/// Parse and validate question file content.
///
/// # Errors
///
/// Returns a parse error for malformed content or `Invalid` when the
/// questions break a structural invariant.
pub fn parse_questions(content: &str, format: Format) -> Result<Vec<Question>, LoadError> {
    let file: QuestionFile = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    validate_questions(&file.questions)?;
    Ok(file.questions)
}

/// Read a question file from disk.
///
/// # Errors
///
/// Fails if the file cannot be read, has an unsupported extension, or does
/// not hold a valid question set.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, LoadError> {
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = parse_questions(&content, format)?;
    log::debug!(
        "loaded {} question(s) from {}",
        questions.len(),
        path.display()
    );
    Ok(questions)
}
