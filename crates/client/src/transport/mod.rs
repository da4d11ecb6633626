//! Transport abstraction layer
//!
//! One trait for one-shot request/reply exchanges. The engine client is
//! datagram-based today; the trait-based seam lets the driver run against
//! in-process fakes in tests and leaves room for other transports later.

pub mod udp;

use crate::error::TransportError;
use async_trait::async_trait;

/// Request/Reply - one payload out, one reply back
///
/// Implementations perform exactly one send and one receive per call. Retry
/// and backoff, if wanted, belong to the caller.
#[async_trait]
pub trait Requester: Send + Sync {
    /// Send a payload and wait for the reply
    async fn request(&self, payload: &str) -> Result<String, TransportError>;
}
