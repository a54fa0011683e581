//! Canonical test configurations.
//!
//! Single source of truth for launch plans and trade config fixtures used
//! across tests.

use std::fs;
use std::path::{Path, PathBuf};

use crate::application::launch::LaunchPlan;
use crate::domain::{CredentialVars, TradingProgram};

/// Launch plan with the default program and variables, pausing on exit.
pub fn launch_plan() -> LaunchPlan {
    LaunchPlan {
        program: TradingProgram::default(),
        vars: CredentialVars::default(),
        pause_on_exit: true,
    }
}

/// Launch plan whose trading script lives in `dir`.
pub fn launch_plan_in(dir: &Path) -> LaunchPlan {
    LaunchPlan {
        program: TradingProgram {
            script: dir.join("optionstrader.py"),
            ..TradingProgram::default()
        },
        ..launch_plan()
    }
}

/// Write a trade config file named `name` into `dir`.
pub fn trade_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write trade config");
    path
}
