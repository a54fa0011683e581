//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters through
//! the outbound ports.

pub mod credential;
pub mod launch;
pub mod push;
pub mod record;
