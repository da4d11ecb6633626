//! Scripted batch execution
//!
//! Validates each case, exchanges the well-formed ones, and collects a
//! report. A transport failure is recorded and the batch keeps going: the
//! engine dropping one probe should not hide the outcome of the rest.

use crate::script::TestScript;
use hermes_client::Requester;
use hermes_core::validate;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Outcome of one scripted case
#[derive(Debug, Clone, PartialEq)]
pub enum CaseOutcome {
    /// Rejected locally before any network use
    Rejected(String),
    /// The engine replied
    Replied(String),
    /// The exchange failed in transport
    Failed(String),
}

/// Results of one batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Name of the script that produced this report
    pub script_name: String,
    /// Per-case outcome, in script order
    pub entries: Vec<(String, CaseOutcome)>,
    /// Cases transmitted to the engine
    pub sent: u64,
    /// Cases the engine answered
    pub replied: u64,
    /// Cases rejected locally by the validator
    pub rejected: u64,
    /// Cases that failed in transport
    pub failed: u64,
}

impl BatchReport {
    /// True when every transmitted case got a reply
    pub fn transport_clean(&self) -> bool {
        self.failed == 0
    }

    /// Write the report in `Order:` / `Response:` block format
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "Script: {} (run at {})",
            self.script_name,
            chrono::Utc::now().to_rfc3339(),
        )?;
        writeln!(out)?;
        for (case, outcome) in &self.entries {
            writeln!(out, "Order: {case}")?;
            match outcome {
                CaseOutcome::Rejected(reason) => writeln!(out, "Rejected: {reason}")?,
                CaseOutcome::Replied(reply) => writeln!(out, "Response: {reply}")?,
                CaseOutcome::Failed(error) => writeln!(out, "Error: {error}")?,
            }
            writeln!(out)?;
        }
        writeln!(
            out,
            "Summary: {} sent, {} replied, {} rejected, {} failed",
            self.sent, self.replied, self.rejected, self.failed,
        )
    }

    /// Write the report to a results file
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out)?;
        out.flush()
    }
}

/// Runs a script against the engine, one exchange at a time
pub struct BatchSession<R> {
    requester: R,
}

impl<R: Requester> BatchSession<R> {
    pub fn new(requester: R) -> Self {
        Self { requester }
    }

    /// Run every case in script order. Malformed cases never reach the
    /// network; transport failures are recorded and the batch continues.
    pub async fn run(&self, script: &TestScript) -> BatchReport {
        let mut report = BatchReport {
            script_name: script.name.clone(),
            ..Default::default()
        };
        log::info!("running script '{}' ({} cases)", script.name, script.len());

        for case in &script.cases {
            let outcome = match validate(case) {
                Err(reason) => {
                    log::warn!("rejected locally: {case} ({reason})");
                    report.rejected += 1;
                    CaseOutcome::Rejected(reason.to_string())
                }
                Ok(()) => {
                    report.sent += 1;
                    match self.requester.request(case).await {
                        Ok(reply) => {
                            log::info!("{case} -> {reply}");
                            report.replied += 1;
                            CaseOutcome::Replied(reply)
                        }
                        Err(error) => {
                            log::warn!("exchange failed for {case}: {error}");
                            report.failed += 1;
                            CaseOutcome::Failed(error.to_string())
                        }
                    }
                }
            };
            report.entries.push((case.clone(), outcome));
        }

        log::info!(
            "script '{}' done: {} sent, {} replied, {} rejected, {} failed",
            report.script_name,
            report.sent,
            report.replied,
            report.rejected,
            report.failed,
        );
        report
    }
}
