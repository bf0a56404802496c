//! # HTTP Transport Adapter
//!
//! The single seam between canopy and the network. The adapter issues one
//! GET per call and hands back the raw status and bytes; it does not log,
//! retry, or interpret status codes. Everything above it is written
//! against [`Transport`] so tests can substitute a deterministic fake.

use std::future::Future;

use thiserror::Error;
use url::Url;

/// Failure below the HTTP layer.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
  /// The request target could not be parsed as a URL.
  #[error("invalid request URL '{url}': {reason}")]
  InvalidUrl { url: String, reason: String },

  /// The network was unreachable, the connection dropped, or the request
  /// timed out.
  #[error("network error: {0}")]
  Network(String),

  /// The transport aborted the request on behalf of the caller. Exists
  /// for transports that cancel natively; the client also races every
  /// request against its cancellation token.
  #[error("request cancelled")]
  Cancelled,
}

/// Raw HTTP response: status code plus untouched body bytes.
///
/// The body is only decoded as text on demand so binary payloads are never
/// forced through UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
  status: u16,
  body: Vec<u8>,
}

impl RawResponse {
  pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
    Self {
      status,
      body: body.into(),
    }
  }

  pub const fn status(&self) -> u16 {
    self.status
  }

  pub const fn is_success(&self) -> bool {
    self.status >= 200 && self.status < 300
  }

  pub fn body(&self) -> &[u8] {
    &self.body
  }

  pub fn into_body(self) -> Vec<u8> {
    self.body
  }

  /// Body decoded as UTF-8 text, lossily.
  pub fn text(&self) -> String {
    String::from_utf8_lossy(&self.body).into_owned()
  }
}

/// Pluggable GET transport.
pub trait Transport: Send + Sync {
  /// Issue a single GET for `url` with the given headers.
  fn get(&self, url: &str, headers: &[(&str, String)]) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// Production transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
  client: reqwest::Client,
}

impl HttpTransport {
  pub fn new() -> Self {
    Self::default()
  }
}

impl Transport for HttpTransport {
  async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<RawResponse, TransportError> {
    let target = Url::parse(url).map_err(|e| TransportError::InvalidUrl {
      url: url.to_string(),
      reason: e.to_string(),
    })?;

    let mut request = self.client.get(target);
    for (name, value) in headers {
      request = request.header(*name, value);
    }

    let response = request
      .send()
      .await
      .map_err(|e| TransportError::Network(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
      .bytes()
      .await
      .map_err(|e| TransportError::Network(e.to_string()))?;

    Ok(RawResponse::new(status, body.to_vec()))
  }
}
