//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::constants;

/// Geoquiz - multiple-choice geography quiz for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Question file (.toml or .json) to use instead of the built-in set
    #[arg(short, long, value_name = "FILE")]
    pub questions: Option<PathBuf>,

    /// Abort after this many invalid answers to one question
    #[arg(long, value_name = "N")]
    pub max_retries: Option<u32>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "FILE", env = constants::CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a question file without running the quiz
    Check {
        /// Path to a .toml or .json question file
        file: PathBuf,
    },
}
