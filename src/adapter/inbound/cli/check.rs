//! Handler for the `check` command.

use crate::adapter::inbound::cli::command::CheckArgs;
use crate::adapter::inbound::cli::launch::selection;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::environment::ProcessEnvironment;
use crate::adapter::outbound::process::TokioProcessRunner;
use crate::adapter::outbound::terminal;
use crate::application::launch::{LaunchPreview, Launcher};
use crate::domain::CredentialSource;
use crate::error::{CredentialError, Result};
use crate::infrastructure::config::settings::Settings;

/// Report where each credential would come from. Never prompts or spawns.
pub fn execute(settings: &Settings, args: &CheckArgs) -> Result<()> {
    let plan = settings.launch_plan(false);
    let terminal = terminal::select(!args.no_prompt);
    let launcher = Launcher::new(&plan, &ProcessEnvironment, &*terminal, &TokioProcessRunner);

    let preview = launcher.preview(&selection(settings, args.config.as_deref()))?;
    print_preview(&preview);

    if preview.blocked() {
        let variable = preview
            .sources
            .iter()
            .find(|(_, _, source)| *source == CredentialSource::Prompt)
            .map(|(_, variable, _)| variable.clone())
            .unwrap_or_default();
        output::hint(&format!(
            "set {variable} in the environment or .env, or run from a terminal"
        ));
        return Err(CredentialError::Missing { variable }.into());
    }

    output::success("Ready to launch");
    Ok(())
}

fn print_preview(preview: &LaunchPreview) {
    output::section("Launch Check");
    match &preview.record_path {
        Some(path) => output::field("Trade config", path.display()),
        None => output::field("Trade config", output::muted("(none)")),
    }
    for (slot, variable, source) in &preview.sources {
        output::field(slot.label(), format!("{source} ({variable})"));
    }
    output::field("Interactive", if preview.interactive { "yes" } else { "no" });
    output::field("Command", output::muted(preview.invocation.command_line()));
}
