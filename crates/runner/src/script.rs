//! Test-case scripts
//!
//! A script is a named list of raw order lines. The built-in smoke script
//! reproduces the standard probe set for the engine; larger runs load a
//! script from a JSON file:
//!
//! ```json
//! { "name": "regression", "cases": ["1 B 100.50 10 169348127 2001 0"] }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Script loading errors
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to read script file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse script file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A named batch of order lines to fire at the engine
///
/// Cases are raw wire lines on purpose: a script may carry malformed lines
/// to exercise the validator, and well-formed lines are transmitted verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestScript {
    pub name: String,
    pub cases: Vec<String>,
}

impl TestScript {
    /// The built-in probe set: an exact-match pair, edge-case fields, and
    /// FIFO-priority probes (two small makers, one taker)
    pub fn smoke() -> Self {
        Self {
            name: "smoke".to_string(),
            cases: vec![
                // Exact match pair
                "1 B 100.50 10 169348127 2001 0".to_string(),
                "2 S 100.50 10 169348128 2002 0".to_string(),
                // Edge-case fields
                "3 B 100.50 0 169348127 2001 0".to_string(), // zero quantity
                "4 S 100.123456789 10 169348128 2002 0".to_string(), // high-precision price
                "5 B 100.50 10 0 2003 0".to_string(),        // epoch timestamp
                "6 S 100.50 10 9999999999 2004 0".to_string(), // far-future timestamp
                // FIFO probes
                "7 S 100.50 5 169348129 2005 0".to_string(),
                "8 S 100.50 5 169348130 2006 0".to_string(),
                "9 B 100.50 10 169348131 2007 0".to_string(),
            ],
        }
    }

    /// Load a script from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
