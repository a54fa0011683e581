//! The external trading program the launcher starts.

use std::path::{Path, PathBuf};

use super::invocation::Invocation;

/// How to start the trading program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingProgram {
    /// Interpreter to run the script with. `None` runs the script directly.
    pub interpreter: Option<String>,
    /// Path to the trading script.
    pub script: PathBuf,
    /// Directory the child runs in. `None` inherits the launcher's.
    pub working_dir: Option<PathBuf>,
}

impl TradingProgram {
    /// Directory holding the script, used as a lookup fallback for the
    /// trade config file.
    #[must_use]
    pub fn script_dir(&self) -> Option<PathBuf> {
        let script = match &self.working_dir {
            Some(dir) if self.script.is_relative() => dir.join(&self.script),
            _ => self.script.clone(),
        };
        script
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    /// Build the invocation, passing `config_arg` as the script's only argument.
    #[must_use]
    pub fn invocation(&self, config_arg: Option<&str>) -> Invocation {
        let script = self.script.to_string_lossy().into_owned();
        let mut invocation = match &self.interpreter {
            Some(interpreter) => Invocation::new(interpreter.as_str()).arg(script),
            None => Invocation::new(script),
        };
        if let Some(arg) = config_arg {
            invocation = invocation.arg(arg);
        }
        if let Some(dir) = &self.working_dir {
            invocation = invocation.current_dir(dir);
        }
        invocation
    }
}

impl Default for TradingProgram {
    fn default() -> Self {
        Self {
            interpreter: Some("python3".to_string()),
            script: PathBuf::from("optionstrader.py"),
            working_dir: None,
        }
    }
}
