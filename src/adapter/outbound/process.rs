//! Child processes via `tokio::process`.

use std::process::ExitStatus;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::signal;
use tracing::{debug, warn};

use crate::domain::{ChildExit, Invocation};
use crate::error::{ProcessError, Result};
use crate::port::outbound::ProcessRunner;

/// Spawns real child processes with inherited stdio.
///
/// Ctrl-C is delivered to the child by the terminal; the runner only logs it
/// and keeps waiting so the child's own exit status is what gets reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessRunner;

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ChildExit> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).envs(
            invocation
                .env
                .iter()
                .map(|(name, value)| (name.as_str(), value.expose())),
        );
        if let Some(dir) = &invocation.current_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|source| ProcessError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;
        debug!(pid = ?child.id(), program = %invocation.program, "child started");

        let mut watch_interrupts = true;
        let status = loop {
            tokio::select! {
                status = child.wait() => {
                    break status.map_err(|source| ProcessError::Wait {
                        program: invocation.program.clone(),
                        source,
                    })?;
                }
                interrupt = signal::ctrl_c(), if watch_interrupts => match interrupt {
                    Ok(()) => warn!("interrupt received, waiting for child to exit"),
                    Err(e) => {
                        debug!(error = %e, "cannot listen for interrupts");
                        watch_interrupts = false;
                    }
                },
            }
        };

        Ok(child_exit(status))
    }
}

fn child_exit(status: ExitStatus) -> ChildExit {
    if let Some(code) = status.code() {
        return ChildExit::Code(code);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return ChildExit::Signal(signal);
        }
    }
    ChildExit::Unknown
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::Secret;
    use crate::error::Error;

    #[tokio::test]
    async fn propagates_exit_code() {
        let invocation = Invocation::new("sh").args(["-c", "exit 3"]);
        let exit = TokioProcessRunner.run(&invocation).await.unwrap();
        assert_eq!(exit, ChildExit::Code(3));
    }

    #[tokio::test]
    async fn child_sees_env_overrides() {
        let invocation = Invocation::new("sh")
            .args(["-c", "test \"$TRADELAUNCH_TEST_KEY\" = K1"])
            .env("TRADELAUNCH_TEST_KEY", Secret::new("K1"));
        let exit = TokioProcessRunner.run(&invocation).await.unwrap();
        assert!(exit.success());
        assert!(std::env::var("TRADELAUNCH_TEST_KEY").is_err());
    }

    #[tokio::test]
    async fn empty_override_is_set_not_unset() {
        let invocation = Invocation::new("sh")
            .args(["-c", "test \"${TRADELAUNCH_TEST_EMPTY+set}\" = set"])
            .env("TRADELAUNCH_TEST_EMPTY", Secret::default());
        let exit = TokioProcessRunner.run(&invocation).await.unwrap();
        assert!(exit.success());
    }

    #[tokio::test]
    async fn runs_in_requested_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();
        let invocation = Invocation::new("sh")
            .args(["-c", "test -f marker"])
            .current_dir(dir.path());
        let exit = TokioProcessRunner.run(&invocation).await.unwrap();
        assert!(exit.success());
    }

    #[tokio::test]
    async fn reports_signal_termination() {
        let invocation = Invocation::new("sh").args(["-c", "kill -TERM $$"]);
        let exit = TokioProcessRunner.run(&invocation).await.unwrap();
        assert_eq!(exit, ChildExit::Signal(15));
        assert_eq!(exit.exit_code(), 143);
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let invocation = Invocation::new("tradelaunch-no-such-program");
        let err = TokioProcessRunner.run(&invocation).await.unwrap_err();
        assert!(matches!(err, Error::Process(ProcessError::Spawn { .. })));
    }
}
