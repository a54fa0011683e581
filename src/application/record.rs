//! Locating and loading the trade config file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ConfigRecord;
use crate::error::{CredentialError, RecordError, Result};

/// Which trade config the operator asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSelection {
    /// Passed on the command line. Must load.
    Explicit(String),
    /// The configured default. Absence selects the interactive path.
    Implicit(String),
}

impl ConfigSelection {
    /// The path as spelled by the operator or the settings file.
    #[must_use]
    pub fn argument(&self) -> &str {
        match self {
            Self::Explicit(arg) | Self::Implicit(arg) => arg,
        }
    }
}

/// A trade config that was found and parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRecord {
    /// Argument handed to the trading program.
    pub argument: String,
    /// File that was actually read.
    pub path: PathBuf,
    pub record: ConfigRecord,
}

/// Where a trade config file was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// File the launcher reads.
    pub path: PathBuf,
    /// True when the child, started in its own working directory, opens this
    /// same file from the argument as spelled.
    pub as_spelled: bool,
}

/// Find the file for `argument`.
///
/// A relative path is resolved against `child_dir` (the trading program's
/// working directory, `None` meaning the launcher's own), then next to the
/// trading script.
#[must_use]
pub fn locate(argument: &str, child_dir: Option<&Path>, script_dir: Option<&Path>) -> Option<Located> {
    let spelled = PathBuf::from(argument);
    if spelled.is_absolute() {
        return spelled.exists().then_some(Located {
            path: spelled,
            as_spelled: true,
        });
    }

    let seen_by_child = match child_dir {
        Some(dir) => dir.join(&spelled),
        None => spelled.clone(),
    };
    if seen_by_child.exists() {
        return Some(Located {
            path: seen_by_child,
            as_spelled: true,
        });
    }

    script_dir
        .map(|dir| dir.join(&spelled))
        .filter(|candidate| candidate.exists())
        .map(|path| Located {
            path,
            as_spelled: false,
        })
}

/// Load the selected trade config.
///
/// Returns `Ok(None)` only for an implicit selection whose file does not exist.
/// Any file that exists but cannot be read or parsed is a
/// [`CredentialError::ConfigLoad`]; there is no fallback to prompting.
///
/// The argument for the child names the file that was read: the spelling is
/// kept when the child resolves it to that file, otherwise the absolute path
/// is passed.
pub fn load(
    selection: &ConfigSelection,
    child_dir: Option<&Path>,
    script_dir: Option<&Path>,
) -> Result<Option<LoadedRecord>> {
    let argument = selection.argument();
    let located = match (locate(argument, child_dir, script_dir), selection) {
        (Some(located), _) => located,
        (None, ConfigSelection::Implicit(_)) => {
            debug!(path = argument, "no default trade config, using interactive credentials");
            return Ok(None);
        }
        (None, ConfigSelection::Explicit(_)) => {
            let path = match child_dir {
                Some(dir) => dir.join(argument),
                None => PathBuf::from(argument),
            };
            return Err(config_load(
                path,
                RecordError::Read(io::Error::new(io::ErrorKind::NotFound, "file not found")),
            ));
        }
    };
    let path = located.path;

    let content = fs::read_to_string(&path).map_err(|e| config_load(path.clone(), e.into()))?;
    let record = ConfigRecord::parse_json(&content).map_err(|e| config_load(path.clone(), e))?;
    debug!(path = %path.display(), "loaded trade config");

    let argument = if located.as_spelled {
        argument.to_string()
    } else {
        fs::canonicalize(&path)
            .unwrap_or_else(|_| path.clone())
            .to_string_lossy()
            .into_owned()
    };

    Ok(Some(LoadedRecord {
        argument,
        path,
        record,
    }))
}

fn config_load(path: PathBuf, source: RecordError) -> crate::error::Error {
    CredentialError::ConfigLoad { path, source }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit;

    #[test]
    fn implicit_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("trade_config.json");
        let selection = ConfigSelection::Implicit(missing.to_string_lossy().into_owned());

        assert!(load(&selection, None, None).unwrap().is_none());
    }

    #[test]
    fn explicit_missing_file_is_a_config_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let selection = ConfigSelection::Explicit(missing.to_string_lossy().into_owned());

        let err = load(&selection, None, None).unwrap_err();
        assert!(err.is_config_load());
    }

    #[test]
    fn implicit_malformed_file_is_still_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = testkit::config::trade_config(dir.path(), "trade_config.json", "{not json");
        let selection = ConfigSelection::Implicit(path.to_string_lossy().into_owned());

        let err = load(&selection, None, None).unwrap_err();
        assert!(err.is_config_load());
    }

    #[test]
    fn relative_path_falls_back_to_script_dir() {
        let dir = tempfile::tempdir().unwrap();
        testkit::config::trade_config(
            dir.path(),
            "tradelaunch-fallback-test.json",
            r#"{"api_key":"K","api_secret":"S"}"#,
        );
        let selection = ConfigSelection::Explicit("tradelaunch-fallback-test.json".to_string());

        let loaded = load(&selection, None, Some(dir.path())).unwrap().unwrap();
        let path = dir.path().join("tradelaunch-fallback-test.json");
        assert_eq!(
            loaded.argument,
            fs::canonicalize(&path).unwrap().to_string_lossy()
        );
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.record.credentials.api_key.expose(), "K");
    }

    #[test]
    fn absolute_path_has_no_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        testkit::config::trade_config(other.path(), "cfg.json", "{}");
        let absolute = dir.path().join("cfg.json");

        assert!(locate(&absolute.to_string_lossy(), Some(other.path()), Some(other.path())).is_none());
    }

    #[test]
    fn relative_path_is_resolved_in_child_working_dir() {
        let launcher_dir = tempfile::tempdir().unwrap();
        let child_dir = tempfile::tempdir().unwrap();
        testkit::config::trade_config(child_dir.path(), "cfg.json", r#"{"api_key":"K2"}"#);
        testkit::config::trade_config(launcher_dir.path(), "cfg.json", r#"{"api_key":"K1"}"#);
        let selection = ConfigSelection::Implicit("cfg.json".to_string());

        let loaded = load(&selection, Some(child_dir.path()), Some(launcher_dir.path()))
            .unwrap()
            .unwrap();
        assert_eq!(loaded.path, child_dir.path().join("cfg.json"));
        assert_eq!(loaded.argument, "cfg.json");
        assert_eq!(loaded.record.credentials.api_key.expose(), "K2");
    }

    #[test]
    fn explicit_missing_file_reports_child_side_path() {
        let child_dir = tempfile::tempdir().unwrap();
        let selection = ConfigSelection::Explicit("live.json".to_string());

        match load(&selection, Some(child_dir.path()), None) {
            Err(crate::error::Error::Credential(CredentialError::ConfigLoad { path, .. })) => {
                assert_eq!(path, child_dir.path().join("live.json"));
            }
            other => panic!("expected config load error, got {other:?}"),
        }
    }
}
