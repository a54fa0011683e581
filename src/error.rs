use std::path::PathBuf;

use thiserror::Error;

/// Launcher settings errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read settings file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Why a trade config file could not be turned into a record.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("{0}")]
    Read(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON object at the top level")]
    NotAnObject,

    #[error("field `{field}` must be a string")]
    InvalidField { field: &'static str },
}

/// Credential resolution errors.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("failed to load trade config {}: {source}", path.display())]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: RecordError,
    },

    #[error("{variable} is not set and interactive prompting is disabled")]
    Missing { variable: String },

    #[error("failed to read {variable} from the terminal: {reason}")]
    Prompt { variable: String, reason: String },
}

/// Child process errors. A non-zero exit is not one of these.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed while waiting for `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when the failure came from loading the trade config file.
    #[must_use]
    pub fn is_config_load(&self) -> bool {
        matches!(self, Error::Credential(CredentialError::ConfigLoad { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_load_message_names_the_file() {
        let err: Error = CredentialError::ConfigLoad {
            path: PathBuf::from("trade_config.json"),
            source: RecordError::NotAnObject,
        }
        .into();

        assert!(err.is_config_load());
        assert_eq!(
            err.to_string(),
            "failed to load trade config trade_config.json: expected a JSON object at the top level"
        );
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let err = CredentialError::Missing {
            variable: "BYBIT_API_SECRET".to_string(),
        };
        assert!(err.to_string().starts_with("BYBIT_API_SECRET is not set"));
    }
}
