//! # Operation Results
//!
//! The uniform return shape shared by every repository access operation.
//! `data` always holds a usable value (possibly empty) so callers branch on
//! `success` rather than on nullability.

/// Result of a repository access operation.
///
/// On failure `data` carries an empty-but-valid value of the expected type
/// (empty list, empty string, empty byte buffer) or, for content fetches,
/// the raw response body the server returned alongside the error status.
/// `message` carries display text describing the failure and is `None` on
/// success; it never participates in control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult<T> {
  pub success: bool,
  pub data: T,
  pub message: Option<String>,
}

impl<T> OperationResult<T> {
  /// Successful result carrying `data`.
  pub const fn ok(data: T) -> Self {
    Self {
      success: true,
      data,
      message: None,
    }
  }

  /// Failed result carrying fallback (or server-provided) data and a
  /// display message.
  pub fn failed(data: T, message: impl Into<String>) -> Self {
    Self {
      success: false,
      data,
      message: Some(message.into()),
    }
  }

  /// Map the payload while preserving the success flag and message.
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OperationResult<U> {
    OperationResult {
      success: self.success,
      data: f(self.data),
      message: self.message,
    }
  }
}

impl<T: Default> OperationResult<T> {
  /// Failed result with default (empty) data.
  pub fn failed_empty(message: impl Into<String>) -> Self {
    Self::failed(T::default(), message)
  }
}
