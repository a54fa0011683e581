//! Recording process runner.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{ChildExit, Invocation};
use crate::error::{ProcessError, Result};
use crate::port::outbound::ProcessRunner;

/// Records every invocation and replies with scripted exit statuses.
///
/// Exits are popped in order; once the queue is empty every run exits with
/// code 0. [`RecordingRunner::unspawnable`] makes every run fail to start.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    exits: Mutex<VecDeque<ChildExit>>,
    calls: Mutex<Vec<Invocation>>,
    unspawnable: bool,
}

impl RecordingRunner {
    /// Runner whose children all exit with code 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner replying with `exits` in order.
    pub fn with_exits(exits: impl IntoIterator<Item = ChildExit>) -> Self {
        Self {
            exits: Mutex::new(exits.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Runner that fails every spawn, as if the program did not exist.
    pub fn unspawnable() -> Self {
        Self {
            unspawnable: true,
            ..Self::default()
        }
    }

    /// Invocations received so far.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ProcessRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ChildExit> {
        if self.unspawnable {
            return Err(ProcessError::Spawn {
                program: invocation.program.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
            .into());
        }
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(invocation.clone());
        }
        let exit = self.exits.lock().ok().and_then(|mut e| e.pop_front());
        Ok(exit.unwrap_or(ChildExit::Code(0)))
    }
}
