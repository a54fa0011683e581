//! Handler for the `config` command group.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Settings;

/// Default settings template with documentation.
const SETTINGS_TEMPLATE: &str = include_str!("../../../../tradelaunch.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "settings",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, SETTINGS_TEMPLATE)?;
    output::section("Settings Initialized");
    output::success("Created settings file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} to point at your trading script", path.display()));
    output::note("2. Put BYBIT_API_KEY and BYBIT_API_SECRET in .env, or keep them in trade_config.json");
    output::note("3. Run: tradelaunch check");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(settings: &Settings, source: Option<&PathBuf>) {
    output::section("Effective Settings");
    match source {
        Some(path) => output::field("Loaded from", path.display()),
        None => output::field("Loaded from", output::muted("(defaults)")),
    }
    output::field("Pause on exit", settings.pause_on_exit);

    output::section("Program");
    let interpreter = settings.program.interpreter.trim();
    output::field(
        "Interpreter",
        if interpreter.is_empty() {
            output::muted("(run directly)")
        } else {
            interpreter.to_string()
        },
    );
    output::field("Script", settings.program.script.display());
    if let Some(dir) = &settings.program.working_dir {
        output::field("Working dir", dir.display());
    }

    output::section("Credentials");
    output::field("Trade config", &settings.credentials.config_path);
    output::field("Key variable", &settings.credentials.key_var);
    output::field("Secret variable", &settings.credentials.secret_var);

    output::section("Push");
    output::field("Git", &settings.push.git);
    output::field("Message", &settings.push.commit_message);
    output::field("Stage all", settings.push.stage_all);
    if let Some(remote) = &settings.push.remote {
        output::field("Remote", remote);
    }
    if let Some(branch) = &settings.push.branch {
        output::field("Branch", branch);
    }

    output::section("Logging");
    output::field("Level", &settings.logging.level);
    output::field("Format", &settings.logging.format);
}
