//! Launcher settings loading and validation.
//!
//! Provides the main [`Settings`] struct that aggregates every section of the
//! launcher's TOML file. All fields have defaults, so an empty file (or no
//! file at all) is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use tradelaunch::infrastructure::config::settings::Settings;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::load("tradelaunch.toml")?;
//!     settings.logging.init(0);
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::credentials::CredentialsConfig;
use super::logging::LoggingConfig;
use super::program::ProgramConfig;
use super::push::PushConfig;
use crate::application::launch::LaunchPlan;
use crate::error::{ConfigError, Result};

const fn default_true() -> bool {
    true
}

/// Main launcher configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Trading program to start.
    #[serde(default)]
    pub program: ProgramConfig,

    /// Trade config location and credential variable names.
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Push helper defaults.
    #[serde(default)]
    pub push: PushConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Wait for Enter after the trading program exits.
    ///
    /// Only applies when stdin is a terminal. Defaults to true.
    #[serde(default = "default_true")]
    pub pause_on_exit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            program: ProgramConfig::default(),
            credentials: CredentialsConfig::default(),
            push: PushConfig::default(),
            logging: LoggingConfig::default(),
            pause_on_exit: default_true(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml(&content)
    }

    /// Load the first existing candidate, or defaults when none exists.
    ///
    /// Returns the path that was loaded alongside the settings.
    pub fn discover(candidates: &[PathBuf]) -> Result<(Self, Option<PathBuf>)> {
        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => Ok((Self::load(path)?, Some(path.clone()))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Launch plan for these settings.
    #[must_use]
    pub fn launch_plan(&self, pause_on_exit: bool) -> LaunchPlan {
        LaunchPlan {
            program: self.program.program(),
            vars: self.credentials.vars(),
            pause_on_exit: self.pause_on_exit && pause_on_exit,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.program.script.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "script" }.into());
        }
        if self.credentials.config_path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "config_path",
            }
            .into());
        }
        for (field, name) in [
            ("key_var", &self.credentials.key_var),
            ("secret_var", &self.credentials.secret_var),
        ] {
            if name.is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
            if name.contains('=') || name.contains('\0') {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "not a valid environment variable name".to_string(),
                }
                .into());
            }
        }
        if self.credentials.key_var == self.credentials.secret_var {
            return Err(ConfigError::InvalidValue {
                field: "secret_var",
                reason: "must differ from key_var".to_string(),
            }
            .into());
        }
        if self.push.git.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "git" }.into());
        }
        if self.push.branch.is_some() && self.push.remote.is_none() {
            return Err(ConfigError::InvalidValue {
                field: "branch",
                reason: "a branch needs a remote".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::parse_toml("").unwrap();
        let plan = settings.launch_plan(true);

        assert_eq!(plan.program.interpreter.as_deref(), Some("python3"));
        assert_eq!(plan.program.script, PathBuf::from("optionstrader.py"));
        assert_eq!(plan.vars.key, "BYBIT_API_KEY");
        assert_eq!(plan.vars.secret, "BYBIT_API_SECRET");
        assert!(plan.pause_on_exit);
        assert_eq!(settings.credentials.config_path, "trade_config.json");
        assert_eq!(settings.push.commit_message, "Automated commit");
    }

    #[test]
    fn sections_override_defaults() {
        let settings = Settings::parse_toml(
            r#"
pause_on_exit = false

[program]
interpreter = ""
script = "/opt/trader/optionstrader"
working_dir = "/opt/trader"

[credentials]
config_path = "demo.json"
key_var = "DEMO_KEY"
secret_var = "DEMO_SECRET"

[push]
commit_message = "nightly"
remote = "origin"
branch = "main"
"#,
        )
        .unwrap();

        let plan = settings.launch_plan(true);
        assert!(plan.program.interpreter.is_none());
        assert_eq!(plan.program.working_dir, Some(PathBuf::from("/opt/trader")));
        assert_eq!(plan.vars.key, "DEMO_KEY");
        assert!(!plan.pause_on_exit);

        let push = settings.push.plan(None, None);
        assert_eq!(push.message, "nightly");
        assert_eq!(push.branch.as_deref(), Some("main"));
    }

    #[test]
    fn cli_flag_can_only_disable_pause() {
        let settings = Settings::default();
        assert!(!settings.launch_plan(false).pause_on_exit);
    }

    #[test]
    fn rejects_identical_variable_names() {
        let result = Settings::parse_toml(
            r#"
[credentials]
key_var = "API"
secret_var = "API"
"#,
        );
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "secret_var",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_empty_variable_name() {
        let result = Settings::parse_toml("[credentials]\nkey_var = \"\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "key_var" }))
        ));
    }

    #[test]
    fn rejects_branch_without_remote() {
        let result = Settings::parse_toml("[push]\nbranch = \"main\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "branch", .. }))
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Settings::parse_toml("[logging]\nformat = \"xml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Settings::parse_toml("[program\nscript = 1");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn discover_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (settings, path) = Settings::discover(&[dir.path().join("missing.toml")]).unwrap();
        assert!(path.is_none());
        assert!(settings.pause_on_exit);
    }

    #[test]
    fn discover_takes_first_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("second.toml");
        std::fs::write(&second, "pause_on_exit = false\n").unwrap();

        let (settings, path) =
            Settings::discover(&[dir.path().join("first.toml"), second.clone()]).unwrap();
        assert_eq!(path, Some(second));
        assert!(!settings.pause_on_exit);
    }
}
