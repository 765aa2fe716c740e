use clap::Parser;
use color_eyre::Result;

use geoquiz::cli::args::{Args, Commands};
use geoquiz::cli::commands;
use geoquiz::config::Config;
use geoquiz::constants;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(constants::DEFAULT_LOG_FILTER),
    )
    .init();

    let args = Args::parse();
    log::debug!("{} v{} starting", constants::APP_NAME, constants::APP_VERSION);

    match &args.command {
        Some(Commands::Check { file }) => commands::check(file),
        None => {
            let config = Config::load(args.config.as_deref())?;
            commands::run_quiz(&args, &config)?;
            Ok(())
        }
    }
}
