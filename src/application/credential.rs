//! Credential resolution.
//!
//! Priority, per slot:
//! 1. a loaded trade config wins outright, even over a set environment variable;
//! 2. otherwise a non-empty environment value is kept as-is;
//! 3. otherwise the operator is prompted.

use tracing::debug;

use crate::domain::{
    ConfigRecord, CredentialPair, CredentialSlot, CredentialSource, CredentialVars,
    ResolvedCredentials, Secret,
};
use crate::error::Result;
use crate::port::outbound::{EnvironmentReader, Terminal};

/// Resolves the credential pair for one launch.
pub struct CredentialResolver<'a> {
    vars: &'a CredentialVars,
    env: &'a dyn EnvironmentReader,
    terminal: &'a dyn Terminal,
}

impl<'a> CredentialResolver<'a> {
    pub fn new(
        vars: &'a CredentialVars,
        env: &'a dyn EnvironmentReader,
        terminal: &'a dyn Terminal,
    ) -> Self {
        Self {
            vars,
            env,
            terminal,
        }
    }

    /// Resolve both credentials, prompting for whatever is missing.
    pub fn resolve(&self, record: Option<&ConfigRecord>) -> Result<ResolvedCredentials> {
        if let Some(record) = record {
            debug!("credentials taken from trade config");
            return Ok(ResolvedCredentials {
                pair: record.credentials.clone(),
                key_source: CredentialSource::Record,
                secret_source: CredentialSource::Record,
            });
        }

        let mut pair = CredentialPair::default();
        let mut sources = [CredentialSource::Environment; 2];
        for (index, slot) in CredentialSlot::ALL.into_iter().enumerate() {
            let variable = self.vars.name(slot);
            let (value, source) = match self.env.non_empty(variable) {
                Some(value) => (Secret::new(value), CredentialSource::Environment),
                None => (
                    self.terminal.read_secret(slot, variable)?,
                    CredentialSource::Prompt,
                ),
            };
            debug!(variable, %source, "resolved credential");
            pair.set(slot, value);
            sources[index] = source;
        }

        Ok(ResolvedCredentials {
            pair,
            key_source: sources[0],
            secret_source: sources[1],
        })
    }

    /// Where each credential would come from, without prompting.
    #[must_use]
    pub fn plan(&self, record: Option<&ConfigRecord>) -> [CredentialSource; 2] {
        CredentialSlot::ALL.map(|slot| {
            if record.is_some() {
                CredentialSource::Record
            } else if self.env.non_empty(self.vars.name(slot)).is_some() {
                CredentialSource::Environment
            } else {
                CredentialSource::Prompt
            }
        })
    }
}
