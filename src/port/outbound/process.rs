//! Process port: start a child and wait for it.

use async_trait::async_trait;

use crate::domain::{ChildExit, Invocation};
use crate::error::Result;

/// Runs child processes to completion.
///
/// The child inherits the launcher's stdio and environment, with
/// [`Invocation::env`] layered on top. Implementations must never retry.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Start `invocation` and block until it exits.
    async fn run(&self, invocation: &Invocation) -> Result<ChildExit>;
}
