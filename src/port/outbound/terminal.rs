//! Terminal port: operator interaction during a launch.

use async_trait::async_trait;

use crate::domain::{CredentialSlot, Secret};
use crate::error::Result;

/// Operator-facing terminal.
///
/// Headless implementations refuse to prompt, returning
/// [`CredentialError::Missing`](crate::error::CredentialError::Missing), and
/// make [`pause`](Terminal::pause) a no-op.
#[async_trait]
pub trait Terminal: Send + Sync {
    /// True when an operator can answer prompts.
    fn is_interactive(&self) -> bool;

    /// Ask the operator for a credential. Input is not echoed.
    ///
    /// Called before the child starts; the read may block the current thread.
    fn read_secret(&self, slot: CredentialSlot, variable: &str) -> Result<Secret>;

    /// Wait for the operator to acknowledge `message`.
    ///
    /// Ends on Enter or on Ctrl-C, and must not block the async runtime.
    async fn pause(&self, message: &str) -> Result<()>;
}
