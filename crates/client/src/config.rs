//! Client configuration
//!
//! The endpoint, buffer size, and timeout are explicit values handed to the
//! requester, never process-wide constants, so tests can point a client at
//! an ephemeral local listener.

use std::net::SocketAddr;
use std::time::Duration;

/// Baseline reply buffer size, matching the engine's datagram expectations
pub const DEFAULT_RECV_BUFFER_LEN: usize = 1024;

/// Settings for exchanges with the matching engine
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Engine endpoint (host:port)
    pub endpoint: SocketAddr,
    /// Reply buffer size; longer replies are truncated, not rejected
    pub recv_buffer_len: usize,
    /// Bound on the wait for a reply; `None` blocks indefinitely
    pub recv_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Config for an engine at `endpoint` with baseline buffer and no timeout
    pub fn new(endpoint: SocketAddr) -> Self {
        Self {
            endpoint,
            recv_buffer_len: DEFAULT_RECV_BUFFER_LEN,
            recv_timeout: None,
        }
    }

    /// Bound the wait for each reply
    pub fn with_recv_timeout(mut self, timeout: Duration) -> Self {
        self.recv_timeout = Some(timeout);
        self
    }

    /// Override the reply buffer size
    pub fn with_recv_buffer_len(mut self, len: usize) -> Self {
        self.recv_buffer_len = len;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 8080)))
    }
}
