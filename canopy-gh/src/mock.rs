//! Scripted transports for exercising classification and cancellation
//! without a socket. Endpoint-level tests use wiremock instead; these
//! fakes cover the paths a real server cannot script (stalled requests,
//! transport-level errors in a fixed order).

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::transport::{RawResponse, Transport, TransportError};

/// Replays a fixed sequence of transport outcomes.
pub(crate) struct ScriptedTransport {
  outcomes: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
}

impl ScriptedTransport {
  pub(crate) fn new(outcomes: impl IntoIterator<Item = Result<RawResponse, TransportError>>) -> Self {
    Self {
      outcomes: Mutex::new(outcomes.into_iter().collect()),
    }
  }
}

impl Transport for ScriptedTransport {
  async fn get(&self, _url: &str, _headers: &[(&str, String)]) -> Result<RawResponse, TransportError> {
    self
      .outcomes
      .lock()
      .expect("scripted outcomes poisoned")
      .pop_front()
      .unwrap_or_else(|| Err(TransportError::Network("script exhausted".to_string())))
  }
}

/// A request that never completes, for cancellation races.
pub(crate) struct PendingTransport;

impl Transport for PendingTransport {
  async fn get(&self, _url: &str, _headers: &[(&str, String)]) -> Result<RawResponse, TransportError> {
    std::future::pending().await
  }
}
