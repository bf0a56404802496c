//! # User and Owner Validation Endpoints
//!
//! Token validation against the identity endpoint and owner validation
//! against the user-lookup endpoint. Both absorb every failure into a
//! boolean; only cancellation escapes.

use canopy_core::{AuthToken, CancelToken, Cancelled};
use tracing::{debug, instrument};

use crate::classify::Classified;
use crate::client::GitHubClient;
use crate::consts::ACCEPT_JSON;
use crate::transport::Transport;

impl<T: Transport> GitHubClient<T> {
  /// Check whether the token authenticates against `GET /user`.
  ///
  /// Any non-2xx outcome (401 included) reports `false`; the caller owns
  /// the "invalid token" messaging.
  #[instrument(skip(self, token, cancel), level = "debug")]
  pub async fn validate_token(&self, token: &AuthToken, cancel: &CancelToken) -> Result<bool, Cancelled> {
    let url = format!("{}/user", self.base_url);

    match self.get_classified(token, &url, ACCEPT_JSON, cancel).await {
      Classified::Success(_) => Ok(true),
      Classified::NotFound(_) => Ok(false),
      Classified::Failure { message, .. } => {
        debug!(detail = %message, "token validation failed");
        Ok(false)
      }
      Classified::Cancelled => Err(Cancelled),
    }
  }

  /// Check whether `owner` names an existing user or organization.
  #[instrument(skip(self, token, cancel), level = "debug")]
  pub async fn validate_owner(&self, token: &AuthToken, owner: &str, cancel: &CancelToken) -> Result<bool, Cancelled> {
    let url = format!("{}/users/{}", self.base_url, owner);

    match self.get_classified(token, &url, ACCEPT_JSON, cancel).await {
      Classified::Success(_) => Ok(true),
      Classified::NotFound(_) => Ok(false),
      Classified::Failure { message, .. } => {
        debug!(owner, detail = %message, "owner validation failed");
        Ok(false)
      }
      Classified::Cancelled => Err(Cancelled),
    }
  }
}
