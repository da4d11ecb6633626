//! Hermes Client
//!
//! Transport layer for the Hermes order client. Provides:
//! - `Requester` trait for one-shot request/reply exchanges
//! - `UdpRequester` - datagram transport, one socket per exchange
//! - `ClientConfig` - endpoint, reply buffer, and timeout settings
//!
//! ## Transport
//!
//! The matching engine speaks a best-effort datagram protocol: one request
//! datagram out, one reply datagram back, nothing guaranteed in between.
//! Every exchange acquires and releases its own socket, so there is no
//! connection state to share, pool, or leak across calls. The `Requester`
//! trait keeps the driver testable against in-process fakes.

pub mod config;
pub mod error;
pub mod transport;

// Re-export commonly used types
pub use config::{ClientConfig, DEFAULT_RECV_BUFFER_LEN};
pub use error::TransportError;
pub use transport::{Requester, udp::UdpRequester};
