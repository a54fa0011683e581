//! Command-line interface definitions.
//!
//! Defines the CLI structure for tradelaunch using `clap`. Running the
//! binary without a subcommand is the same as `tradelaunch launch`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Credential-resolving launcher for the options trading program
#[derive(Parser, Debug)]
#[command(name = "tradelaunch")]
#[command(version, about)]
pub struct Cli {
    /// Launcher settings file [default: ./tradelaunch.toml, then ~/.tradelaunch/config.toml]
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve credentials and run the trading program (default)
    Launch(LaunchArgs),

    /// Show where credentials would come from, without prompting or launching
    Check(CheckArgs),

    /// Stage, commit and push a directory with git
    Push(PushArgs),

    /// Manage launcher settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `tradelaunch config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented settings file.
    Init(ConfigInitArgs),
    /// Display the effective settings with defaults applied.
    Show,
}

/// Arguments for the `launch` subcommand.
#[derive(Parser, Debug, Default)]
pub struct LaunchArgs {
    /// Trade config file passed to the trading program [default: from settings]
    pub config: Option<PathBuf>,

    /// Fail instead of prompting for missing credentials
    #[arg(long)]
    pub no_prompt: bool,

    /// Exit as soon as the trading program does
    #[arg(long)]
    pub no_pause: bool,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Trade config file to inspect [default: from settings]
    pub config: Option<PathBuf>,

    /// Report as if running without a terminal
    #[arg(long)]
    pub no_prompt: bool,
}

/// Arguments for the `push` subcommand.
#[derive(Parser, Debug)]
pub struct PushArgs {
    /// Commit message [default: from settings]
    #[arg(short, long)]
    pub message: Option<String>,

    /// Repository directory [default: current directory]
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the settings file.
    #[arg(default_value = paths::LOCAL_SETTINGS)]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "tradelaunch");
    }

    #[test]
    fn test_cli_has_version() {
        assert!(Cli::command().get_version().is_some());
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["tradelaunch"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_launch_with_config() {
        let cli = Cli::try_parse_from(["tradelaunch", "launch", "trade_config.json"]).unwrap();
        match cli.command {
            Some(Commands::Launch(args)) => {
                assert_eq!(args.config, Some(PathBuf::from("trade_config.json")));
                assert!(!args.no_prompt);
                assert!(!args.no_pause);
            }
            other => panic!("expected launch, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_launch_flags() {
        let cli =
            Cli::try_parse_from(["tradelaunch", "launch", "--no-prompt", "--no-pause"]).unwrap();
        match cli.command {
            Some(Commands::Launch(args)) => {
                assert!(args.config.is_none());
                assert!(args.no_prompt);
                assert!(args.no_pause);
            }
            other => panic!("expected launch, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_push_message() {
        let cli = Cli::try_parse_from(["tradelaunch", "push", "-m", "nightly sync"]).unwrap();
        match cli.command {
            Some(Commands::Push(args)) => {
                assert_eq!(args.message.as_deref(), Some("nightly sync"));
                assert!(args.dir.is_none());
            }
            other => panic!("expected push, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_init_default_path() {
        let cli = Cli::try_parse_from(["tradelaunch", "config", "init"]).unwrap();
        match cli.command {
            Some(Commands::Config(ConfigCommand::Init(args))) => {
                assert_eq!(args.path, PathBuf::from("tradelaunch.toml"));
                assert!(!args.force);
            }
            other => panic!("expected config init, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tradelaunch",
            "check",
            "--settings",
            "alt.toml",
            "-vv",
            "--color",
            "never",
        ])
        .unwrap();
        assert_eq!(cli.settings, Some(PathBuf::from("alt.toml")));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, ColorChoice::Never));
    }
}
