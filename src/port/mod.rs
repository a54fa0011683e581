//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌──────────────────────┐
//!                 │     Application      │
//!   ┌─────────────┤   Domain + Port      ├─────────────┐
//!   │             └──────────────────────┘             │
//!   ▼                        ▼                         ▼
//! ┌─────────────┐     ┌─────────────┐          ┌──────────────┐
//! │ Environment │     │  Terminal   │          │   Process    │
//! │   Adapter   │     │   Adapter   │          │    Adapter   │
//! └─────────────┘     └─────────────┘          └──────────────┘
//! ```

pub mod outbound;
