//! Launcher domain types. No I/O, no framework dependencies.
//!
//! - [`credential`] - API key/secret pair, slot names, sources
//! - [`record`] - credential fields of the trade config file
//! - [`program`] - the external trading program
//! - [`invocation`] - child process command line, environment and exit status

pub mod credential;
pub mod invocation;
pub mod program;
pub mod record;

pub use credential::{
    CredentialPair, CredentialSlot, CredentialSource, CredentialVars, ResolvedCredentials, Secret,
};
pub use invocation::{ChildExit, Invocation};
pub use program::TradingProgram;
pub use record::ConfigRecord;
