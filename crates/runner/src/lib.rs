//! Hermes Runner - matching-engine smoke-test driver
//!
//! Sequences the core components, one exchange at a time:
//!
//! - **Command**: parses driver input once at the boundary
//! - **Script**: built-in or JSON-loaded test-case batches
//! - **Batch**: runs a script against the engine and writes a report
//! - **Repl**: interactive single-shot submission loop
//!
//! ## Architecture
//!
//! ```text
//!   script file / stdin
//!           │
//!      ┌────▼─────┐
//!      │  Driver  │  Command / BatchSession / Repl
//!      └────┬─────┘
//!           │ validate (hermes-core)
//!           │ request  (hermes-client)
//!           ▼
//!   matching engine (UDP)
//! ```

pub mod batch;
pub mod command;
pub mod repl;
pub mod script;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types
pub use batch::{BatchReport, BatchSession, CaseOutcome};
pub use command::{Command, SHUTDOWN_PAYLOAD};
pub use repl::{Repl, ReplStep};
pub use script::{ScriptError, TestScript};
