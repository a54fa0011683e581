//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe what the launcher needs from the host: the
//! environment it was started in, a terminal to talk to the operator, and a
//! way to run child processes.

pub mod environment;
pub mod process;
pub mod terminal;

pub use environment::EnvironmentReader;
pub use process::ProcessRunner;
pub use terminal::Terminal;
