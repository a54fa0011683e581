//! Environment port: read-only view of the launcher's environment.

use std::ffi::OsString;

/// Read access to environment variables.
///
/// The launcher only ever reads through this port. Values for the child are
/// carried on the [`Invocation`](crate::domain::Invocation) instead of being
/// written back into the process environment.
pub trait EnvironmentReader: Send + Sync {
    /// Value of `name`, or `None` when unset. Non-Unicode values are returned as is.
    fn var(&self, name: &str) -> Option<OsString>;

    /// Value of `name` when it is set and non-empty.
    fn non_empty(&self, name: &str) -> Option<OsString> {
        self.var(name).filter(|value| !value.is_empty())
    }
}
