//! Outbound adapters backed by the host process and terminal.

pub mod environment;
pub mod process;
pub mod terminal;
