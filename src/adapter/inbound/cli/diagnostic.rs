//! Miette-based error diagnostics for CLI error presentation.
//!
//! Turns crate errors into rich reports: a malformed trade config is shown
//! with the offending line highlighted, other failures get a help line.

use std::fs;
use std::path::Path;

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, CredentialError, Error, ProcessError, RecordError};

/// Trade config parse error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(
    code(tradelaunch::trade_config),
    help("fix the JSON or pass a different file; the launch was aborted")
)]
pub struct TradeConfigError {
    /// Human-readable error message.
    pub message: String,

    /// Content of the trade config file.
    #[source_code]
    pub src: NamedSource<String>,

    /// Where the parser gave up.
    #[label("here")]
    pub span: SourceSpan,
}

/// Any other failure, with a suggestion.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(tradelaunch::error))]
pub struct LaunchError {
    /// Human-readable error message.
    pub message: String,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl LaunchError {
    /// Create a new error without help text.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Build a report for `err`.
#[must_use]
pub fn report(err: &Error) -> Report {
    if let Error::Credential(CredentialError::ConfigLoad {
        path,
        source: RecordError::Parse(parse),
    }) = err
    {
        if let Some(diagnostic) = trade_config_error(err, path, parse) {
            return Report::new(diagnostic);
        }
    }

    let diagnostic = LaunchError::new(err.to_string());
    let diagnostic = match help(err) {
        Some(help) => diagnostic.with_help(help),
        None => diagnostic,
    };
    Report::new(diagnostic)
}

fn trade_config_error(
    err: &Error,
    path: &Path,
    parse: &serde_json::Error,
) -> Option<TradeConfigError> {
    let content = fs::read_to_string(path).ok()?;
    let offset = byte_offset(&content, parse.line(), parse.column());
    let len = usize::from(offset < content.len());
    Some(TradeConfigError {
        message: err.to_string(),
        src: NamedSource::new(path.display().to_string(), content),
        span: (offset, len).into(),
    })
}

/// Byte offset of a 1-based line/column position, clamped to the content.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(content.len())
}

fn help(err: &Error) -> Option<String> {
    match err {
        Error::Credential(CredentialError::ConfigLoad { .. }) => Some(
            "the trade config must be a readable JSON object; the launch was aborted".to_string(),
        ),
        Error::Credential(CredentialError::Missing { variable }) => Some(format!(
            "set {variable} in the environment or .env, or run from a terminal without --no-prompt"
        )),
        Error::Process(ProcessError::Spawn { .. }) => {
            Some("check [program] interpreter and script in the settings file".to_string())
        }
        Error::Config(ConfigError::ReadFile { .. } | ConfigError::Parse(_)) => {
            Some("run `tradelaunch config init` to write a fresh settings file".to_string())
        }
        _ => None,
    }
}
