use std::process::ExitCode;

use clap::Parser;
use tradelaunch::adapter::inbound::cli::command::{Cli, ColorChoice};
use tradelaunch::adapter::inbound::cli::output::{self, OutputConfig};
use tradelaunch::adapter::inbound::cli::{diagnostic, dispatch};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));
    match cli.color {
        ColorChoice::Auto => {}
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }

    match dispatch::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            if output::is_json() {
                output::error(&e.to_string());
            } else {
                eprintln!("{:?}", diagnostic::report(&e));
            }
            ExitCode::FAILURE
        }
    }
}
