//! Tradelaunch - credential-resolving launcher for an options trading program.
//!
//! Resolves an exchange API key and secret from a JSON trade config, the
//! environment or a masked prompt, then runs the trading program once with
//! the credentials in its environment and reports how it ended.
//!
//! # Architecture
//!
//! - **`domain`** - Secrets, trade config records, invocations and exit statuses
//! - **`port`** - Traits for the environment, the terminal and child processes
//! - **`application`** - Launch, check and push use cases
//! - **`adapter`** - CLI (inbound) and host process/terminal (outbound)
//! - **`infrastructure`** - TOML settings and logging setup
//!
//! # Example
//!
//! ```no_run
//! use tradelaunch::adapter::outbound::environment::ProcessEnvironment;
//! use tradelaunch::adapter::outbound::process::TokioProcessRunner;
//! use tradelaunch::adapter::outbound::terminal;
//! use tradelaunch::application::launch::Launcher;
//! use tradelaunch::application::record::ConfigSelection;
//! use tradelaunch::infrastructure::config::settings::Settings;
//!
//! # async fn run() -> tradelaunch::error::Result<()> {
//! let plan = Settings::default().launch_plan(true);
//! let terminal = terminal::select(true);
//! let launcher = Launcher::new(&plan, &ProcessEnvironment, &*terminal, &TokioProcessRunner);
//! let report = launcher
//!     .launch(&ConfigSelection::Implicit("trade_config.json".into()))
//!     .await?;
//! println!("{}", report.exit);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
