//! Command handlers invoked from `main`.

use std::borrow::Cow;
use std::io;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::cli::args::Args;
use crate::config::Config;
use crate::constants;
use crate::error::LoadError;
use crate::quiz::loader::load_questions;
use crate::quiz::{bank, Question};
use crate::runner::{QuizReport, QuizRunner};

/// Pick the question set: the command-line file wins over the config file,
/// and the built-in set is used when neither names one.
///
/// # Errors
///
/// Fails if the chosen file cannot be loaded.
pub fn resolve_questions(
    from_args: Option<&Path>,
    from_config: Option<&Path>,
) -> Result<Cow<'static, [Question]>, LoadError> {
    match from_args.or(from_config) {
        Some(path) => {
            log::info!("using questions from {}", path.display());
            load_questions(path).map(Cow::Owned)
        }
        None => {
            log::debug!("using built-in question set");
            Ok(Cow::Borrowed(bank::geography()))
        }
    }
}

/// Run the interactive quiz on stdin/stdout.
///
/// # Errors
///
/// Fails if the question set cannot be loaded or the run aborts.
pub fn run_quiz(args: &Args, config: &Config) -> Result<QuizReport> {
    let questions = resolve_questions(args.questions.as_deref(), config.questions.as_deref())
        .wrap_err("Failed to load questions")?;
    let max_retries = args.max_retries.or(config.max_retries);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let report = QuizRunner::new(&questions, stdin, stdout)
        .with_max_retries(max_retries)
        .run()
        .wrap_err("Quiz aborted")?;
    Ok(report)
}

/// Validate a question file and report how many questions it holds.
///
/// # Errors
///
/// Fails if the file cannot be loaded or is invalid.
pub fn check(file: &Path) -> Result<()> {
    let questions =
        load_questions(file).wrap_err_with(|| format!("Invalid question file: {}", file.display()))?;
    println!(
        "{}{} ({}{})",
        constants::CLI_MSG_CHECK_OK,
        file.display(),
        questions.len(),
        constants::CLI_MSG_CHECK_COUNT_SUFFIX
    );
    Ok(())
}
