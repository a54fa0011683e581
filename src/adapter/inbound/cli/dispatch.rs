//! Routes parsed commands to their handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::debug;

use crate::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand, LaunchArgs};
use crate::adapter::inbound::cli::{check, config, launch, paths, push};
use crate::error::Result;
use crate::infrastructure::config::settings::Settings;

/// Run the parsed command line.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    if let Some(Commands::Config(ConfigCommand::Init(args))) = &cli.command {
        config::execute_init(&args.path, args.force)?;
        return Ok(ExitCode::SUCCESS);
    }

    let (settings, source) = load_settings(cli.settings.as_ref())?;
    settings.logging.init(cli.verbose);
    match &source {
        Some(path) => debug!(path = %path.display(), "loaded settings"),
        None => debug!("no settings file, using defaults"),
    }

    match cli.command {
        None => launch::execute(&settings, &LaunchArgs::default()).await,
        Some(Commands::Launch(args)) => launch::execute(&settings, &args).await,
        Some(Commands::Check(args)) => {
            check::execute(&settings, &args)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Push(args)) => push::execute(&settings, &args).await,
        Some(Commands::Config(ConfigCommand::Show)) => {
            config::execute_show(&settings, source.as_ref());
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Config(ConfigCommand::Init(_))) => Ok(ExitCode::SUCCESS),
    }
}

/// An explicit `--settings` file must exist; otherwise the first candidate wins.
fn load_settings(explicit: Option<&PathBuf>) -> Result<(Settings, Option<PathBuf>)> {
    match explicit {
        Some(path) => Ok((Settings::load(path)?, Some(path.clone()))),
        None => Settings::discover(&paths::settings_candidates()),
    }
}
