//! # Repository Contents Endpoints
//!
//! One-level directory listing through the contents endpoint and file
//! retrieval through download URLs. Failures are absorbed into
//! [`OperationResult`]; fetch operations keep whatever body the server
//! returned so error pages are not discarded.

use canopy_core::{AuthToken, CancelToken, Cancelled, OperationResult, RepoLocator, RepositoryEntry};
use tracing::{instrument, warn};

use crate::classify::{Classified, failure_message};
use crate::client::GitHubClient;
use crate::consts::{ACCEPT_JSON, ACCEPT_RAW};
use crate::decode::decode_entries;
use crate::transport::Transport;

impl<T: Transport> GitHubClient<T> {
  /// List one directory level of a repository.
  ///
  /// An empty `path` denotes the repository root. Either the complete
  /// entry list for that level comes back, or an empty list plus a
  /// failure, never a truncated listing.
  #[instrument(skip(self, token, cancel), level = "debug")]
  pub async fn list_directory(
    &self,
    token: &AuthToken,
    locator: &RepoLocator,
    path: &str,
    cancel: &CancelToken,
  ) -> Result<OperationResult<Vec<RepositoryEntry>>, Cancelled> {
    let url = if path.is_empty() {
      format!("{}/repos/{}/{}/contents", self.base_url, locator.owner, locator.repo)
    } else {
      format!(
        "{}/repos/{}/{}/contents/{}",
        self.base_url, locator.owner, locator.repo, path
      )
    };

    match self.get_classified(token, &url, ACCEPT_JSON, cancel).await {
      Classified::Success(response) => match decode_entries(response.body()) {
        Ok(entries) => Ok(OperationResult::ok(entries)),
        Err(err) => {
          warn!(path, %err, "directory listing did not decode");
          Ok(OperationResult::failed_empty(format!(
            "Could not read directory listing for '{}': {err}",
            locator.full_name()
          )))
        }
      },
      Classified::NotFound(_) => {
        let message = if path.is_empty() {
          format!("Repository '{}' not found", locator.full_name())
        } else {
          format!("Path '{}' not found in repository '{}'", path, locator.full_name())
        };
        Ok(OperationResult::failed_empty(message))
      }
      Classified::Failure { message, .. } => {
        warn!(path, detail = %message, "directory listing failed");
        Ok(OperationResult::failed_empty(message))
      }
      Classified::Cancelled => Err(Cancelled),
    }
  }

  /// Fetch a file's content as text.
  ///
  /// On failure the response body (often a server error page) is kept as
  /// the payload.
  #[instrument(skip(self, token, cancel), level = "debug")]
  pub async fn fetch_file_text(
    &self,
    token: &AuthToken,
    download_url: &str,
    cancel: &CancelToken,
  ) -> Result<OperationResult<String>, Cancelled> {
    match self.get_classified(token, download_url, ACCEPT_RAW, cancel).await {
      Classified::Success(response) => Ok(OperationResult::ok(response.text())),
      Classified::NotFound(response) => {
        let message = failure_message(&response);
        Ok(OperationResult::failed(response.text(), message))
      }
      Classified::Failure { message, body, .. } => {
        warn!(download_url, detail = %message, "file fetch failed");
        Ok(OperationResult::failed(
          String::from_utf8_lossy(&body).into_owned(),
          message,
        ))
      }
      Classified::Cancelled => Err(Cancelled),
    }
  }

  /// Fetch a file's content as raw bytes.
  ///
  /// The payload is never routed through text decoding, so images and
  /// other binary files come back byte-for-byte.
  #[instrument(skip(self, token, cancel), level = "debug")]
  pub async fn fetch_file_bytes(
    &self,
    token: &AuthToken,
    download_url: &str,
    cancel: &CancelToken,
  ) -> Result<OperationResult<Vec<u8>>, Cancelled> {
    match self.get_classified(token, download_url, ACCEPT_RAW, cancel).await {
      Classified::Success(response) => Ok(OperationResult::ok(response.into_body())),
      Classified::NotFound(response) => {
        let message = failure_message(&response);
        Ok(OperationResult::failed(response.into_body(), message))
      }
      Classified::Failure { message, body, .. } => {
        warn!(download_url, detail = %message, "file fetch failed");
        Ok(OperationResult::failed(body, message))
      }
      Classified::Cancelled => Err(Cancelled),
    }
  }
}
