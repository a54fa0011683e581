//! Terminal adapters: masked prompts on a console, refusal when headless.

use std::future::Future;
use std::io::{self, IsTerminal, Write};
use std::thread;

use async_trait::async_trait;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Password;
use tokio::signal;
use tokio::sync::oneshot;
use tracing::debug;

use crate::domain::{CredentialSlot, Secret};
use crate::error::{CredentialError, Result};
use crate::port::outbound::Terminal;

/// Interactive console. Secrets are read without echo.
///
/// Prompts block the calling thread; they run before the child starts and
/// before the launcher takes over Ctrl-C.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleTerminal;

#[async_trait]
impl Terminal for ConsoleTerminal {
    fn is_interactive(&self) -> bool {
        true
    }

    fn read_secret(&self, slot: CredentialSlot, variable: &str) -> Result<Secret> {
        let value = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} ({variable})", slot.label()))
            .interact()
            .map_err(|e| CredentialError::Prompt {
                variable: variable.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Secret::new(value))
    }

    async fn pause(&self, message: &str) -> Result<()> {
        let mut stderr = io::stderr();
        write!(stderr, "{message}")?;
        stderr.flush()?;
        let read_line = || {
            let mut line = String::new();
            io::stdin().read_line(&mut line).map(|_| ())
        };
        wait_for_enter(read_line, signal::ctrl_c()).await
    }
}

/// Wait until `read_line` returns or `interrupt` fires.
///
/// The read runs on a detached thread, so a pending stdin read neither holds
/// a runtime worker nor keeps the process alive once the launcher returns.
/// An interrupt that fails to register is ignored and only the read counts.
async fn wait_for_enter<R, I>(read_line: R, interrupt: I) -> Result<()>
where
    R: FnOnce() -> io::Result<()> + Send + 'static,
    I: Future<Output = io::Result<()>>,
{
    let (tx, rx) = oneshot::channel();
    thread::spawn(move || {
        let _ = tx.send(read_line());
    });

    tokio::select! {
        read = rx => match read {
            Ok(result) => Ok(result?),
            Err(_) => Ok(()),
        },
        Ok(()) = interrupt => {
            debug!("pause interrupted");
            Ok(())
        }
    }
}

/// No operator available: prompts fail, pauses do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessTerminal;

#[async_trait]
impl Terminal for HeadlessTerminal {
    fn is_interactive(&self) -> bool {
        false
    }

    fn read_secret(&self, _slot: CredentialSlot, variable: &str) -> Result<Secret> {
        Err(CredentialError::Missing {
            variable: variable.to_string(),
        }
        .into())
    }

    async fn pause(&self, _message: &str) -> Result<()> {
        Ok(())
    }
}

/// Pick the terminal for this run.
///
/// Prompting needs both an explicit go-ahead and a stdin attached to a terminal.
#[must_use]
pub fn select(allow_prompt: bool) -> Box<dyn Terminal> {
    if allow_prompt && io::stdin().is_terminal() {
        Box::new(ConsoleTerminal)
    } else {
        Box::new(HeadlessTerminal)
    }
}
