//! In-process test double for the transport seam

use async_trait::async_trait;
use hermes_client::{Requester, TransportError};
use std::sync::{Arc, Mutex};

/// Replies `ACK <payload>` like the loopback echo listener, recording every
/// payload that reached the "network". Optionally fails one payload to
/// exercise transport-error paths.
#[derive(Clone, Default)]
pub(crate) struct EchoRequester {
    pub sent: Arc<Mutex<Vec<String>>>,
    fail_on: Option<String>,
}

impl EchoRequester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Echo everything except `payload`, which times out
    pub fn failing_on(payload: &str) -> Self {
        Self {
            sent: Arc::default(),
            fail_on: Some(payload.to_string()),
        }
    }
}

#[async_trait]
impl Requester for EchoRequester {
    async fn request(&self, payload: &str) -> Result<String, TransportError> {
        self.sent.lock().unwrap().push(payload.to_string());
        if self.fail_on.as_deref() == Some(payload) {
            return Err(TransportError::Timeout);
        }
        Ok(format!("ACK {payload}"))
    }
}
