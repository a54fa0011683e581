//! Push helper: stage, commit and push a working directory with `git`.
//!
//! Unrelated to launching; it shares only the process runner.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::domain::{ChildExit, Invocation};
use crate::error::{ConfigError, Result};
use crate::port::outbound::ProcessRunner;

/// What to push and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushPlan {
    /// `git` executable.
    pub git: String,
    /// Repository directory. `None` uses the current directory.
    pub dir: Option<PathBuf>,
    /// Run `git add -A` before committing.
    pub stage_all: bool,
    pub message: String,
    pub remote: Option<String>,
    pub branch: Option<String>,
}

impl PushPlan {
    fn validate(&self) -> Result<()> {
        if self.message.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "commit_message",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if self.branch.is_some() && self.remote.is_none() {
            return Err(ConfigError::InvalidValue {
                field: "branch",
                reason: "a branch needs a remote".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn git(&self) -> Invocation {
        let invocation = Invocation::new(self.git.as_str());
        match &self.dir {
            Some(dir) => invocation.current_dir(dir),
            None => invocation,
        }
    }

    /// The git commands, in the order they run.
    #[must_use]
    pub fn steps(&self) -> Vec<Invocation> {
        let mut steps = Vec::with_capacity(3);
        if self.stage_all {
            steps.push(self.git().args(["add", "-A"]));
        }
        steps.push(self.git().args(["commit", "-m", self.message.as_str()]));

        let mut push = self.git().arg("push");
        if let Some(remote) = &self.remote {
            push = push.arg(remote.as_str());
            if let Some(branch) = &self.branch {
                push = push.arg(branch.as_str());
            }
        }
        steps.push(push);
        steps
    }
}

/// One git command and how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushStep {
    pub command_line: String,
    pub exit: ChildExit,
}

/// Outcome of a push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushReport {
    /// Commands that ran, the last one possibly failed.
    pub steps: Vec<PushStep>,
    /// Status of the last command that ran.
    pub exit: ChildExit,
}

/// Run the plan's git commands, stopping at the first failure.
pub async fn push(runner: &dyn ProcessRunner, plan: &PushPlan) -> Result<PushReport> {
    plan.validate()?;

    let mut steps = Vec::new();
    let mut exit = ChildExit::Code(0);
    for invocation in plan.steps() {
        let command_line = invocation.command_line();
        info!(command = %command_line, "running");
        exit = runner.run(&invocation).await?;
        steps.push(PushStep {
            command_line: command_line.clone(),
            exit,
        });
        if !exit.success() {
            warn!(command = %command_line, %exit, "git command failed, stopping");
            break;
        }
    }

    Ok(PushReport { steps, exit })
}
