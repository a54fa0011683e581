//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`environment`] - `MapEnvironment`, an in-memory [`EnvironmentReader`](crate::port::outbound::EnvironmentReader).
//! - [`terminal`] - `ScriptedTerminal` with canned prompt answers and a pause counter.
//! - [`process`] - `RecordingRunner` that records invocations instead of spawning.
//! - [`config`] - Canonical launch plans and trade config fixtures.

pub mod config;
pub mod environment;
pub mod process;
pub mod terminal;
