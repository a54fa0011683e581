//! `[credentials]`: trade config location and credential variable names.

use serde::Deserialize;

use crate::domain::CredentialVars;

/// Credential configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsConfig {
    /// Default trade config file, used when none is given on the command line.
    #[serde(default = "default_config_path")]
    pub config_path: String,
    /// Variable the trading program reads its API key from.
    #[serde(default = "default_key_var")]
    pub key_var: String,
    /// Variable the trading program reads its API secret from.
    #[serde(default = "default_secret_var")]
    pub secret_var: String,
}

fn default_config_path() -> String {
    "trade_config.json".to_string()
}

fn default_key_var() -> String {
    CredentialVars::default().key
}

fn default_secret_var() -> String {
    CredentialVars::default().secret
}

impl CredentialsConfig {
    #[must_use]
    pub fn vars(&self) -> CredentialVars {
        CredentialVars {
            key: self.key_var.clone(),
            secret: self.secret_var.clone(),
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            config_path: default_config_path(),
            key_var: default_key_var(),
            secret_var: default_secret_var(),
        }
    }
}
