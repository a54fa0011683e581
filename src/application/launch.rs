//! The launch use case: resolve credentials, run the trading program once,
//! report how it ended.

use std::path::PathBuf;

use tracing::{info, warn};

use super::credential::CredentialResolver;
use super::record::{self, ConfigSelection};
use crate::domain::{
    ChildExit, CredentialSlot, CredentialSource, CredentialVars, Invocation, ResolvedCredentials,
    TradingProgram,
};
use crate::error::Result;
use crate::port::outbound::{EnvironmentReader, ProcessRunner, Terminal};

/// Message shown when waiting for the operator after the child exits.
#[must_use]
pub fn pause_message(exit: ChildExit) -> String {
    if exit.success() {
        "Trading program finished. Press Enter to close...".to_string()
    } else {
        format!("Trading program stopped with {exit}. Press Enter to close...")
    }
}

/// Static launch settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: TradingProgram,
    pub vars: CredentialVars,
    /// Wait for acknowledgement after the child exits (interactive only).
    pub pause_on_exit: bool,
}

/// A launch that is ready to run.
#[derive(Debug, Clone)]
pub struct PreparedLaunch {
    /// Trade config file that supplied the credentials, if any.
    pub record_path: Option<PathBuf>,
    pub credentials: ResolvedCredentials,
    pub invocation: Invocation,
}

/// What `check` reports: the launch that would happen, minus the secrets.
#[derive(Debug, Clone)]
pub struct LaunchPreview {
    pub record_path: Option<PathBuf>,
    pub sources: [(CredentialSlot, String, CredentialSource); 2],
    pub interactive: bool,
    pub invocation: Invocation,
}

impl LaunchPreview {
    /// True when some credential would need a prompt that cannot be shown.
    #[must_use]
    pub fn blocked(&self) -> bool {
        !self.interactive
            && self
                .sources
                .iter()
                .any(|(_, _, source)| *source == CredentialSource::Prompt)
    }
}

/// Result of a completed launch.
#[derive(Debug, Clone)]
pub struct LaunchReport {
    pub record_path: Option<PathBuf>,
    pub key_source: CredentialSource,
    pub secret_source: CredentialSource,
    pub command_line: String,
    pub exit: ChildExit,
}

/// Runs the trading program with resolved credentials.
pub struct Launcher<'a> {
    plan: &'a LaunchPlan,
    env: &'a dyn EnvironmentReader,
    terminal: &'a dyn Terminal,
    runner: &'a dyn ProcessRunner,
}

impl<'a> Launcher<'a> {
    pub fn new(
        plan: &'a LaunchPlan,
        env: &'a dyn EnvironmentReader,
        terminal: &'a dyn Terminal,
        runner: &'a dyn ProcessRunner,
    ) -> Self {
        Self {
            plan,
            env,
            terminal,
            runner,
        }
    }

    fn resolver(&self) -> CredentialResolver<'_> {
        CredentialResolver::new(&self.plan.vars, self.env, self.terminal)
    }

    /// Load the trade config, resolve credentials and build the invocation.
    ///
    /// May prompt. Never spawns.
    pub fn prepare(&self, selection: &ConfigSelection) -> Result<PreparedLaunch> {
        let script_dir = self.plan.program.script_dir();
        let loaded = record::load(
            selection,
            self.plan.program.working_dir.as_deref(),
            script_dir.as_deref(),
        )?;

        let credentials = self
            .resolver()
            .resolve(loaded.as_ref().map(|l| &l.record))?;

        let vars = &self.plan.vars;
        let invocation = self
            .plan
            .program
            .invocation(loaded.as_ref().map(|l| l.argument.as_str()))
            .env(vars.key.as_str(), credentials.pair.api_key.clone())
            .env(vars.secret.as_str(), credentials.pair.api_secret.clone());

        Ok(PreparedLaunch {
            record_path: loaded.map(|l| l.path),
            credentials,
            invocation,
        })
    }

    /// Describe the launch without prompting or spawning.
    pub fn preview(&self, selection: &ConfigSelection) -> Result<LaunchPreview> {
        let script_dir = self.plan.program.script_dir();
        let loaded = record::load(
            selection,
            self.plan.program.working_dir.as_deref(),
            script_dir.as_deref(),
        )?;
        let planned = self.resolver().plan(loaded.as_ref().map(|l| &l.record));

        let sources = [0, 1].map(|index| {
            let slot = CredentialSlot::ALL[index];
            (slot, self.plan.vars.name(slot).to_string(), planned[index])
        });

        Ok(LaunchPreview {
            invocation: self
                .plan
                .program
                .invocation(loaded.as_ref().map(|l| l.argument.as_str())),
            record_path: loaded.map(|l| l.path),
            sources,
            interactive: self.terminal.is_interactive(),
        })
    }

    /// Resolve credentials, run the trading program once and wait for it.
    ///
    /// A non-zero exit is reported in [`LaunchReport::exit`], not as an error,
    /// and is never retried. The pause happens whether the child succeeded or not.
    pub async fn launch(&self, selection: &ConfigSelection) -> Result<LaunchReport> {
        self.launch_with(selection, |_| {}).await
    }

    /// Like [`Launcher::launch`], calling `on_exit` with the report once the
    /// child has ended and before the operator is asked to acknowledge it.
    pub async fn launch_with<F>(&self, selection: &ConfigSelection, on_exit: F) -> Result<LaunchReport>
    where
        F: FnOnce(&LaunchReport),
    {
        let prepared = self.prepare(selection)?;
        let command_line = prepared.invocation.command_line();

        info!(
            command = %command_line,
            key_source = %prepared.credentials.key_source,
            secret_source = %prepared.credentials.secret_source,
            "starting trading program"
        );

        let exit = self.runner.run(&prepared.invocation).await?;

        if exit.success() {
            info!(%exit, "trading program finished");
        } else {
            warn!(%exit, "trading program failed");
        }

        let report = LaunchReport {
            record_path: prepared.record_path,
            key_source: prepared.credentials.key_source,
            secret_source: prepared.credentials.secret_source,
            command_line,
            exit,
        };
        on_exit(&report);

        if self.plan.pause_on_exit && self.terminal.is_interactive() {
            self.terminal.pause(&pause_message(exit)).await?;
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit;
    use crate::testkit::environment::MapEnvironment;
    use crate::testkit::process::RecordingRunner;
    use crate::testkit::terminal::ScriptedTerminal;

    fn implicit(path: &std::path::Path) -> ConfigSelection {
        ConfigSelection::Implicit(path.to_string_lossy().into_owned())
    }

    #[tokio::test]
    async fn record_values_reach_the_child_with_config_argument() {
        let dir = tempfile::tempdir().unwrap();
        let path = testkit::config::trade_config(
            dir.path(),
            "trade_config.json",
            r#"{"api_key":"K1","api_secret":"S1"}"#,
        );
        let plan = testkit::config::launch_plan();
        let env = MapEnvironment::new().with("BYBIT_API_KEY", "STALE");
        let terminal = ScriptedTerminal::silent();
        let runner = RecordingRunner::new();

        let report = Launcher::new(&plan, &env, &terminal, &runner)
            .launch(&implicit(&path))
            .await
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        let child = &calls[0];
        assert_eq!(child.env["BYBIT_API_KEY"].expose(), "K1");
        assert_eq!(child.env["BYBIT_API_SECRET"].expose(), "S1");
        assert_eq!(
            child.args,
            vec!["optionstrader.py".to_string(), path.to_string_lossy().into_owned()]
        );
        assert_eq!(report.record_path, Some(path));
        assert_eq!(report.key_source, CredentialSource::Record);
        assert!(terminal.prompted().is_empty());
    }

    #[tokio::test]
    async fn without_record_child_gets_no_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let plan = testkit::config::launch_plan();
        let env = MapEnvironment::new()
            .with("BYBIT_API_KEY", "EK")
            .with("BYBIT_API_SECRET", "ES");
        let terminal = ScriptedTerminal::silent();
        let runner = RecordingRunner::new();

        Launcher::new(&plan, &env, &terminal, &runner)
            .launch(&implicit(&dir.path().join("trade_config.json")))
            .await
            .unwrap();

        let child = &runner.calls()[0];
        assert_eq!(child.args, vec!["optionstrader.py"]);
        assert_eq!(child.env["BYBIT_API_KEY"].expose(), "EK");
        assert_eq!(child.env["BYBIT_API_SECRET"].expose(), "ES");
    }

    #[tokio::test]
    async fn malformed_record_never_spawns() {
        let dir = tempfile::tempdir().unwrap();
        let path = testkit::config::trade_config(dir.path(), "trade_config.json", "{\"api_key\":");
        let plan = testkit::config::launch_plan();
        let env = MapEnvironment::new();
        let terminal = ScriptedTerminal::answering(["K", "S"]);
        let runner = RecordingRunner::new();

        let err = Launcher::new(&plan, &env, &terminal, &runner)
            .launch(&implicit(&path))
            .await
            .unwrap_err();

        assert!(err.is_config_load());
        assert!(runner.calls().is_empty());
        assert!(terminal.prompted().is_empty());
        assert_eq!(terminal.pauses(), 0);
    }

    #[tokio::test]
    async fn failing_child_is_reported_and_still_paused() {
        let dir = tempfile::tempdir().unwrap();
        let plan = testkit::config::launch_plan();
        let env = MapEnvironment::new()
            .with("BYBIT_API_KEY", "EK")
            .with("BYBIT_API_SECRET", "ES");
        let terminal = ScriptedTerminal::silent();
        let runner = RecordingRunner::with_exits([ChildExit::Code(2)]);

        let report = Launcher::new(&plan, &env, &terminal, &runner)
            .launch(&implicit(&dir.path().join("trade_config.json")))
            .await
            .unwrap();

        assert_eq!(report.exit, ChildExit::Code(2));
        assert_eq!(runner.calls().len(), 1);
        assert_eq!(terminal.pauses(), 1);
    }

    #[tokio::test]
    async fn pause_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let plan = LaunchPlan {
            pause_on_exit: false,
            ..testkit::config::launch_plan()
        };
        let env = MapEnvironment::new();
        let terminal = ScriptedTerminal::answering(["K", "S"]);
        let runner = RecordingRunner::new();

        Launcher::new(&plan, &env, &terminal, &runner)
            .launch(&implicit(&dir.path().join("trade_config.json")))
            .await
            .unwrap();

        assert_eq!(terminal.pauses(), 0);
    }

    #[tokio::test]
    async fn spawn_failure_propagates_without_pause() {
        let dir = tempfile::tempdir().unwrap();
        let plan = testkit::config::launch_plan();
        let env = MapEnvironment::new()
            .with("BYBIT_API_KEY", "EK")
            .with("BYBIT_API_SECRET", "ES");
        let terminal = ScriptedTerminal::silent();
        let runner = RecordingRunner::unspawnable();

        let err = Launcher::new(&plan, &env, &terminal, &runner)
            .launch(&implicit(&dir.path().join("trade_config.json")))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("failed to start `python3`"));
        assert_eq!(terminal.pauses(), 0);
    }

    #[tokio::test]
    async fn report_is_delivered_before_the_pause() {
        let dir = tempfile::tempdir().unwrap();
        let plan = testkit::config::launch_plan();
        let env = MapEnvironment::new()
            .with("BYBIT_API_KEY", "EK")
            .with("BYBIT_API_SECRET", "ES");
        let terminal = ScriptedTerminal::silent();
        let runner = RecordingRunner::with_exits([ChildExit::Code(4)]);
        let mut seen = None;

        Launcher::new(&plan, &env, &terminal, &runner)
            .launch_with(&implicit(&dir.path().join("trade_config.json")), |report| {
                seen = Some((report.exit, terminal.pauses()));
            })
            .await
            .unwrap();

        assert_eq!(seen, Some((ChildExit::Code(4), 0)));
        assert_eq!(terminal.pauses(), 1);
    }

    #[test]
    fn pause_message_mentions_failure() {
        assert!(!pause_message(ChildExit::Code(0)).contains("exit code"));
        assert!(pause_message(ChildExit::Code(2)).contains("exit code 2"));
        assert!(pause_message(ChildExit::Signal(9)).contains("signal 9"));
    }

    #[test]
    fn preview_flags_headless_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let plan = testkit::config::launch_plan();
        let env = MapEnvironment::new().with("BYBIT_API_KEY", "EK");
        let terminal = ScriptedTerminal::headless();
        let runner = RecordingRunner::new();

        let preview = Launcher::new(&plan, &env, &terminal, &runner)
            .preview(&implicit(&dir.path().join("trade_config.json")))
            .unwrap();

        assert!(preview.blocked());
        assert_eq!(preview.sources[1].1, "BYBIT_API_SECRET");
        assert_eq!(preview.sources[1].2, CredentialSource::Prompt);
        assert!(preview.invocation.env.is_empty());
        assert!(runner.calls().is_empty());
    }
}
