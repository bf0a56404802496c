//! # Response Classification
//!
//! Maps a transport outcome to the four-way split every repository access
//! operation needs: success, not-found, failure, or cancelled. Status-code
//! branching lives here once instead of being re-derived at each call
//! site; operations only match on [`Classified`].

use crate::transport::{RawResponse, TransportError};

/// Classified outcome of one GET.
#[derive(Debug, Clone)]
pub enum Classified {
  /// Status in [200, 299]; the payload is passed through as-is.
  Success(RawResponse),
  /// Status 404. Kept distinct from [`Classified::Failure`] so callers
  /// can present resource-specific messaging.
  NotFound(RawResponse),
  /// Any other non-2xx status, or a transport-level failure. `status` is
  /// `None` when the request never reached HTTP. The server body, if any,
  /// is preserved verbatim.
  Failure {
    status: Option<u16>,
    message: String,
    body: Vec<u8>,
  },
  /// The caller cancelled the operation. Must propagate as cancellation,
  /// never be folded into a failure.
  Cancelled,
}

/// Classify a transport outcome.
pub fn classify(outcome: Result<RawResponse, TransportError>) -> Classified {
  match outcome {
    Ok(response) if response.is_success() => Classified::Success(response),
    Ok(response) if response.status() == 404 => Classified::NotFound(response),
    Ok(response) => {
      let message = failure_message(&response);
      Classified::Failure {
        status: Some(response.status()),
        message,
        body: response.into_body(),
      }
    }
    Err(TransportError::Cancelled) => Classified::Cancelled,
    Err(err) => Classified::Failure {
      status: None,
      message: err.to_string(),
      body: Vec::new(),
    },
  }
}

/// Display message for a non-2xx response.
///
/// GitHub error payloads carry a `message` field; prefer it over the raw
/// body when present.
pub(crate) fn failure_message(response: &RawResponse) -> String {
  let body = response.text();
  if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body)
    && let Some(message) = value.get("message").and_then(|m| m.as_str())
  {
    return format!("GitHub API error: HTTP {} - {}", response.status(), message);
  }
  format!("GitHub API error: HTTP {} - {}", response.status(), body.trim())
}
