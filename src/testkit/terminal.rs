//! Scripted terminal for prompt and pause assertions.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{CredentialSlot, Secret};
use crate::error::{CredentialError, Result};
use crate::port::outbound::Terminal;

/// A terminal that answers prompts from a queue and counts pauses.
///
/// When built with [`ScriptedTerminal::headless`] every prompt fails with
/// [`CredentialError::Missing`], like the real headless terminal.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    interactive: bool,
    answers: Mutex<VecDeque<String>>,
    prompted: Mutex<Vec<String>>,
    pauses: AtomicUsize,
}

impl ScriptedTerminal {
    /// Interactive terminal that answers prompts in order.
    pub fn answering<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            interactive: true,
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Interactive terminal with no answers; any prompt is an error.
    pub fn silent() -> Self {
        Self::answering(Vec::<String>::new())
    }

    /// Non-interactive terminal.
    pub fn headless() -> Self {
        Self::default()
    }

    /// Variables the launcher prompted for, in order.
    pub fn prompted(&self) -> Vec<String> {
        self.prompted.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// Number of pauses requested.
    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Terminal for ScriptedTerminal {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn read_secret(&self, _slot: CredentialSlot, variable: &str) -> Result<Secret> {
        if !self.interactive {
            return Err(CredentialError::Missing {
                variable: variable.to_string(),
            }
            .into());
        }
        if let Ok(mut prompted) = self.prompted.lock() {
            prompted.push(variable.to_string());
        }
        let answer = self.answers.lock().ok().and_then(|mut a| a.pop_front());
        answer.map(Secret::new).ok_or_else(|| {
            CredentialError::Prompt {
                variable: variable.to_string(),
                reason: "no scripted answer left".to_string(),
            }
            .into()
        })
    }

    async fn pause(&self, _message: &str) -> Result<()> {
        if self.interactive {
            self.pauses.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}
