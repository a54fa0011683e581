//! CLI module graph.

pub mod check;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod dispatch;
pub mod launch;
pub mod output;
pub mod paths;
pub mod push;
