//! `[program]`: how to start the trading program.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::TradingProgram;

/// Trading program configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramConfig {
    /// Interpreter for the script. Empty runs the script directly.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
    #[serde(default = "default_script")]
    pub script: PathBuf,
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_script() -> PathBuf {
    PathBuf::from("optionstrader.py")
}

impl ProgramConfig {
    /// Domain view of this section.
    #[must_use]
    pub fn program(&self) -> TradingProgram {
        let interpreter = self.interpreter.trim();
        TradingProgram {
            interpreter: (!interpreter.is_empty()).then(|| interpreter.to_string()),
            script: self.script.clone(),
            working_dir: self.working_dir.clone(),
        }
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            script: default_script(),
            working_dir: None,
        }
    }
}
