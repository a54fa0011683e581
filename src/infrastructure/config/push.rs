//! `[push]`: defaults for the push helper.

use std::path::PathBuf;

use serde::Deserialize;

use crate::application::push::PushPlan;

const fn default_true() -> bool {
    true
}

/// Push helper configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PushConfig {
    #[serde(default = "default_git")]
    pub git: String,
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
    /// Stage every change (`git add -A`) before committing.
    #[serde(default = "default_true")]
    pub stage_all: bool,
    #[serde(default)]
    pub remote: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

fn default_git() -> String {
    "git".to_string()
}

fn default_commit_message() -> String {
    "Automated commit".to_string()
}

impl PushConfig {
    /// Build a plan, letting the command line override the message and directory.
    #[must_use]
    pub fn plan(&self, message: Option<String>, dir: Option<PathBuf>) -> PushPlan {
        PushPlan {
            git: self.git.clone(),
            dir,
            stage_all: self.stage_all,
            message: message.unwrap_or_else(|| self.commit_message.clone()),
            remote: self.remote.clone(),
            branch: self.branch.clone(),
        }
    }
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            git: default_git(),
            commit_message: default_commit_message(),
            stage_all: default_true(),
            remote: None,
            branch: None,
        }
    }
}
