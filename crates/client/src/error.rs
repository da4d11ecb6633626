//! Error types for the client crate

use thiserror::Error;

/// Transport-level errors
///
/// Every failure mode of one exchange surfaces here; nothing panics past the
/// transport boundary. The driver treats all variants as recoverable: report
/// and move to the next order.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Socket bind failed: {0}")]
    Bind(std::io::Error),

    #[error("Connect failed: {0}")]
    Connect(std::io::Error),

    #[error("Send failed: {0}")]
    Send(std::io::Error),

    #[error("Receive failed: {0}")]
    Recv(std::io::Error),

    #[error("Timeout waiting for reply")]
    Timeout,

    #[error("Reply is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}
