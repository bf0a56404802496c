//! # GitHub HTTP Client
//!
//! Request plumbing shared by every endpoint: header assembly, the
//! cancellation race around the single network await, and classification
//! of the outcome. The client owns a transport and a base URL only; the
//! bearer token is threaded into each call and never stored.

use canopy_core::{AuthToken, CancelToken};
use tracing::debug;

use crate::classify::{Classified, classify};
use crate::consts::{API_BASE_URL, USER_AGENT};
use crate::transport::{HttpTransport, Transport};

/// Represents a GitHub API client
pub struct GitHubClient<T = HttpTransport> {
  pub(crate) transport: T,
  pub(crate) base_url: String,
}

impl GitHubClient<HttpTransport> {
  /// Create a client against the SaaS GitHub API over HTTP.
  pub fn new() -> Self {
    Self::with_transport(HttpTransport::new())
  }
}

impl Default for GitHubClient<HttpTransport> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Transport> GitHubClient<T> {
  /// Create a client over a custom transport.
  pub fn with_transport(transport: T) -> Self {
    Self {
      transport,
      base_url: API_BASE_URL.to_string(),
    }
  }

  /// Point the client at a different API base URL (e.g. a mock server).
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Issue one authenticated GET and classify the outcome.
  ///
  /// Checks the token before dispatch and races the transport future
  /// against it, so the network call is the only suspension point and a
  /// cancelled operation never waits out a slow request.
  pub(crate) async fn get_classified(
    &self,
    token: &AuthToken,
    url: &str,
    accept: &'static str,
    cancel: &CancelToken,
  ) -> Classified {
    if cancel.is_cancelled() {
      return Classified::Cancelled;
    }

    debug!(url, accept, "dispatching GitHub request");

    let headers = [
      ("Accept", accept.to_string()),
      ("User-Agent", USER_AGENT.to_string()),
      ("Authorization", format!("Bearer {}", token.as_str())),
    ];

    tokio::select! {
      outcome = self.transport.get(url, &headers) => classify(outcome),
      () = cancel.cancelled() => Classified::Cancelled,
    }
  }
}
