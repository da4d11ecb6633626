//! Driver input commands
//!
//! Input lines are parsed into commands once at the driver boundary, keeping
//! the validator and the transport free of prompt concerns.

use hermes_core::{FormatError, Order, parse_order};

/// Reserved control payload the engine interprets as a termination request
pub const SHUTDOWN_PAYLOAD: &str = "shutdown";

/// A parsed line of driver input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Submit one order. `raw` is transmitted verbatim; `order` is the typed
    /// record kept for display and logging.
    Submit { order: Order, raw: String },
    /// Forward the engine's shutdown payload, then stop
    Shutdown,
    /// Stop without touching the network
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// A line that is neither a control word nor a well-formed order line is
    /// a format error, reported locally and never transmitted.
    pub fn parse(line: &str) -> Result<Command, FormatError> {
        let trimmed = line.trim();
        match trimmed {
            SHUTDOWN_PAYLOAD => Ok(Command::Shutdown),
            "exit" | "quit" => Ok(Command::Quit),
            _ => parse_order(trimmed).map(|order| Command::Submit {
                order,
                raw: trimmed.to_string(),
            }),
        }
    }
}
