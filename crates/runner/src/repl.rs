//! Interactive submission loop
//!
//! Reads one line at a time, parses it into a `Command`, and acts on it.
//! Format and transport errors are printed and the prompt continues; only
//! `quit`/`exit`, the shutdown command, or end of input leave the loop.

use crate::command::{Command, SHUTDOWN_PAYLOAD};
use hermes_client::Requester;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// What the loop does after handling one input line
#[derive(Debug, Clone, PartialEq)]
pub enum ReplStep {
    /// Show a message and keep prompting
    Reply(String),
    /// Leave the loop, optionally with a final message
    Stop(Option<String>),
}

/// Interactive single-shot submission driver
pub struct Repl<R> {
    requester: R,
}

impl<R: Requester> Repl<R> {
    pub fn new(requester: R) -> Self {
        Self { requester }
    }

    /// Handle one input line. Separated from the prompt loop so driver
    /// behavior is testable without a terminal.
    pub async fn handle_line(&self, line: &str) -> ReplStep {
        match Command::parse(line) {
            Ok(Command::Quit) => ReplStep::Stop(None),
            Ok(Command::Shutdown) => {
                // Forwarded through the normal exchange path; the engine owns
                // the meaning of the control word
                let message = match self.requester.request(SHUTDOWN_PAYLOAD).await {
                    Ok(reply) => format!("engine: {reply}"),
                    Err(error) => format!("transport error: {error}"),
                };
                ReplStep::Stop(Some(message))
            }
            Ok(Command::Submit { order, raw }) => {
                log::debug!(
                    "submitting order {} ({:?} {} @ {})",
                    order.order_id,
                    order.side,
                    order.quantity,
                    order.price,
                );
                match self.requester.request(&raw).await {
                    Ok(reply) => ReplStep::Reply(format!("engine: {reply}")),
                    Err(error) => ReplStep::Reply(format!("transport error: {error}")),
                }
            }
            Err(reason) => ReplStep::Reply(format!("rejected: {reason}")),
        }
    }

    /// Run the prompt loop over stdin until the user leaves or input ends
    pub async fn run(&self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        loop {
            stdout.write_all(b"order> ").await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break; // end of input
            };
            if line.trim().is_empty() {
                continue;
            }

            match self.handle_line(&line).await {
                ReplStep::Reply(message) => {
                    stdout.write_all(message.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                }
                ReplStep::Stop(message) => {
                    if let Some(message) = message {
                        stdout.write_all(message.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                    }
                    break;
                }
            }
        }
        Ok(())
    }
}
