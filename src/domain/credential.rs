//! Credential types: the key/secret pair handed to the trading program.
//!
//! Values are wrapped in [`Secret`] so that neither `Debug` nor `Display`
//! can leak them into logs or operator output.

use std::ffi::{OsStr, OsString};
use std::fmt;

/// An opaque credential value.
///
/// Formatting always prints a placeholder; use [`Secret::expose`] only at
/// the point where the value is handed to the child process. Values need not
/// be valid Unicode, so an inherited variable passes through byte for byte.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(OsString);

impl Secret {
    /// Wrap a credential value.
    pub fn new(value: impl Into<OsString>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw value.
    #[must_use]
    pub fn expose(&self) -> &OsStr {
        &self.0
    }

    /// True when the value is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({self})")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<empty>")
        } else {
            f.write_str("REDACTED")
        }
    }
}

/// One of the two credential slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialSlot {
    ApiKey,
    ApiSecret,
}

impl CredentialSlot {
    /// Both slots, in resolution order.
    pub const ALL: [CredentialSlot; 2] = [CredentialSlot::ApiKey, CredentialSlot::ApiSecret];

    /// Field name in the trade config file.
    #[must_use]
    pub const fn record_field(self) -> &'static str {
        match self {
            Self::ApiKey => "api_key",
            Self::ApiSecret => "api_secret",
        }
    }

    /// Human-readable label used in prompts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ApiKey => "API key",
            Self::ApiSecret => "API secret",
        }
    }
}

/// Environment variable names the trading program reads its credentials from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialVars {
    pub key: String,
    pub secret: String,
}

impl CredentialVars {
    /// Variable name for a slot.
    #[must_use]
    pub fn name(&self, slot: CredentialSlot) -> &str {
        match slot {
            CredentialSlot::ApiKey => &self.key,
            CredentialSlot::ApiSecret => &self.secret,
        }
    }
}

impl Default for CredentialVars {
    fn default() -> Self {
        Self {
            key: "BYBIT_API_KEY".to_string(),
            secret: "BYBIT_API_SECRET".to_string(),
        }
    }
}

/// Where a resolved credential came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Read from the trade config file.
    Record,
    /// Already present in the launcher's environment.
    Environment,
    /// Typed by the operator at a prompt.
    Prompt,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Record => "config file",
            Self::Environment => "environment",
            Self::Prompt => "prompt",
        };
        f.write_str(name)
    }
}

/// The API key and secret for one launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialPair {
    pub api_key: Secret,
    pub api_secret: Secret,
}

impl CredentialPair {
    /// Value for a slot.
    #[must_use]
    pub fn get(&self, slot: CredentialSlot) -> &Secret {
        match slot {
            CredentialSlot::ApiKey => &self.api_key,
            CredentialSlot::ApiSecret => &self.api_secret,
        }
    }

    /// Replace the value for a slot.
    pub fn set(&mut self, slot: CredentialSlot, value: Secret) {
        match slot {
            CredentialSlot::ApiKey => self.api_key = value,
            CredentialSlot::ApiSecret => self.api_secret = value,
        }
    }
}

/// A credential pair together with the source of each value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredentials {
    pub pair: CredentialPair,
    pub key_source: CredentialSource,
    pub secret_source: CredentialSource,
}

impl ResolvedCredentials {
    /// Source for a slot.
    #[must_use]
    pub fn source(&self, slot: CredentialSlot) -> CredentialSource {
        match slot {
            CredentialSlot::ApiKey => self.key_source,
            CredentialSlot::ApiSecret => self.secret_source,
        }
    }

    /// Number of values that were typed at a prompt.
    #[must_use]
    pub fn prompted(&self) -> usize {
        CredentialSlot::ALL
            .iter()
            .filter(|slot| self.source(**slot) == CredentialSource::Prompt)
            .count()
    }
}
