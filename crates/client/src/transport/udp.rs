//! UDP request/reply transport
//!
//! One socket per exchange: bind ephemeral, connect to the engine, send one
//! datagram, wait for one reply. The socket is scoped to the call and dropped
//! on every exit path, so a failed or cancelled exchange cannot leak it and
//! no connection state survives between orders.

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::transport::Requester;
use async_trait::async_trait;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

/// Datagram client for the matching engine
pub struct UdpRequester {
    config: ClientConfig,
}

impl UdpRequester {
    /// Create a requester for the configured engine endpoint
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// The configured engine endpoint
    pub fn endpoint(&self) -> SocketAddr {
        self.config.endpoint
    }

    /// One send/receive cycle against the engine.
    ///
    /// The payload is forwarded as-is; the reserved `shutdown` control word
    /// is just another payload from the transport's point of view. A reply
    /// longer than the configured buffer is truncated by the transport, not
    /// rejected.
    async fn exchange(&self, payload: &str) -> Result<String, TransportError> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(TransportError::Bind)?;
        socket
            .connect(self.config.endpoint)
            .await
            .map_err(TransportError::Connect)?;

        socket
            .send(payload.as_bytes())
            .await
            .map_err(TransportError::Send)?;
        log::debug!(
            "sent {} bytes to {}",
            payload.len(),
            self.config.endpoint
        );

        let mut buf = vec![0u8; self.config.recv_buffer_len];
        let received = match self.config.recv_timeout {
            Some(limit) => tokio::time::timeout(limit, socket.recv(&mut buf))
                .await
                .map_err(|_| TransportError::Timeout)?
                .map_err(TransportError::Recv)?,
            None => socket.recv(&mut buf).await.map_err(TransportError::Recv)?,
        };
        log::debug!("received {received} bytes");

        let reply = std::str::from_utf8(&buf[..received])?;
        Ok(reply.to_string())
    }
}

#[async_trait]
impl Requester for UdpRequester {
    async fn request(&self, payload: &str) -> Result<String, TransportError> {
        self.exchange(payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Spawn a loopback listener replying `ACK <payload>` to every datagram
    async fn spawn_echo() -> SocketAddr {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 2048];
            while let Ok((n, peer)) = socket.recv_from(&mut buf).await {
                let reply = format!("ACK {}", String::from_utf8_lossy(&buf[..n]));
                let _ = socket.send_to(reply.as_bytes(), peer).await;
            }
        });
        addr
    }

    #[tokio::test]
    async fn test_round_trip() {
        let addr = spawn_echo().await;
        let requester = UdpRequester::new(
            ClientConfig::new(addr).with_recv_timeout(Duration::from_secs(2)),
        );

        let reply = requester
            .request("1 B 100.50 10 169348127 2001 0")
            .await
            .unwrap();
        assert_eq!(reply, "ACK 1 B 100.50 10 169348127 2001 0");
    }

    #[tokio::test]
    async fn test_shutdown_payload_is_forwarded_verbatim() {
        let addr = spawn_echo().await;
        let requester = UdpRequester::new(
            ClientConfig::new(addr).with_recv_timeout(Duration::from_secs(2)),
        );

        // The transport does not interpret the control word
        let reply = requester.request("shutdown").await.unwrap();
        assert_eq!(reply, "ACK shutdown");
    }

    #[tokio::test]
    async fn test_reply_truncated_to_buffer() {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 2048];
            while let Ok((_, peer)) = socket.recv_from(&mut buf).await {
                let oversized = "X".repeat(1500);
                let _ = socket.send_to(oversized.as_bytes(), peer).await;
            }
        });

        let requester = UdpRequester::new(
            ClientConfig::new(addr)
                .with_recv_timeout(Duration::from_secs(2))
                .with_recv_buffer_len(64),
        );

        let reply = requester.request("probe").await.unwrap();
        assert_eq!(reply.len(), 64);
        assert!(reply.chars().all(|c| c == 'X'));
    }
}
