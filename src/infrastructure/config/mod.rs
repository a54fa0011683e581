//! Infrastructure configuration modules.

pub mod credentials;
pub mod logging;
pub mod program;
pub mod push;
pub mod settings;
