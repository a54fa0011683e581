//! Handler for the `launch` command.

use std::path::Path;
use std::process::ExitCode;

use crate::adapter::inbound::cli::command::LaunchArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::environment::ProcessEnvironment;
use crate::adapter::outbound::process::TokioProcessRunner;
use crate::adapter::outbound::terminal;
use crate::application::launch::{LaunchReport, Launcher};
use crate::application::record::ConfigSelection;
use crate::error::Result;
use crate::infrastructure::config::settings::Settings;

/// Execute the launch command.
///
/// The returned code is the trading program's own. Launcher output goes to
/// stderr; stdout belongs to the trading program. The report is printed
/// before the operator is asked to press Enter.
pub async fn execute(settings: &Settings, args: &LaunchArgs) -> Result<ExitCode> {
    let plan = settings.launch_plan(!args.no_pause);
    let selection = selection(settings, args.config.as_deref());
    let terminal = terminal::select(!args.no_prompt);
    let launcher = Launcher::new(&plan, &ProcessEnvironment, &*terminal, &TokioProcessRunner);

    output::use_stderr();
    output::action("Launching", &plan.program.script.display().to_string());
    let report = launcher.launch_with(&selection, print_report).await?;

    Ok(ExitCode::from(report.exit.exit_code()))
}

/// Explicit when given on the command line, otherwise the configured default.
pub(crate) fn selection(settings: &Settings, config: Option<&Path>) -> ConfigSelection {
    match config {
        Some(path) => ConfigSelection::Explicit(path.to_string_lossy().into_owned()),
        None => ConfigSelection::Implicit(settings.credentials.config_path.clone()),
    }
}

fn print_report(report: &LaunchReport) {
    if let Some(path) = &report.record_path {
        output::field("Trade config", path.display());
    }
    output::field("API key", report.key_source);
    output::field("API secret", report.secret_source);
    output::field("Command", output::muted(&report.command_line));

    if report.exit.success() {
        output::success("Trading program finished");
    } else {
        output::warning(&format!("Trading program stopped with {}", report.exit));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_config_is_explicit() {
        let settings = Settings::default();
        assert_eq!(
            selection(&settings, Some(Path::new("live.json"))),
            ConfigSelection::Explicit("live.json".to_string())
        );
    }

    #[test]
    fn settings_default_is_implicit() {
        let settings = Settings::default();
        assert_eq!(
            selection(&settings, None),
            ConfigSelection::Implicit("trade_config.json".to_string())
        );
    }
}
