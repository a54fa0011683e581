//! Handler for the `push` command.

use std::process::ExitCode;

use crate::adapter::inbound::cli::command::PushArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::process::TokioProcessRunner;
use crate::application::push;
use crate::error::Result;
use crate::infrastructure::config::settings::Settings;

/// Execute the push command. Exits with the status of the last git command.
pub async fn execute(settings: &Settings, args: &PushArgs) -> Result<ExitCode> {
    let plan = settings.push.plan(args.message.clone(), args.dir.clone());
    let target = plan
        .dir
        .as_ref()
        .map_or_else(|| ".".to_string(), |dir| dir.display().to_string());

    output::action("Pushing", &target);
    let report = push::push(&TokioProcessRunner, &plan).await?;

    for step in &report.steps {
        if step.exit.success() {
            output::success(&step.command_line);
        } else {
            output::warning(&format!("{} ({})", step.command_line, step.exit));
        }
    }

    Ok(ExitCode::from(report.exit.exit_code()))
}
