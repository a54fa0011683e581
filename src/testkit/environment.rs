//! In-memory environment.

use std::collections::HashMap;
use std::ffi::OsString;

use crate::port::outbound::EnvironmentReader;

/// Environment backed by a map. Nothing leaks in from the real process.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, OsString>,
}

impl MapEnvironment {
    /// Empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<OsString>) -> Self {
        self.vars.insert(name.to_string(), value.into());
        self
    }
}

impl EnvironmentReader for MapEnvironment {
    fn var(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).cloned()
    }
}
