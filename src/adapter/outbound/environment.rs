//! The launcher's own process environment.

use std::ffi::OsString;

use crate::port::outbound::EnvironmentReader;

/// Reads `std::env`. Never writes to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentReader for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}
