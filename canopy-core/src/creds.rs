//! # Credentials
//!
//! The bearer-token value type threaded into every repository access
//! operation. The core never stores or persists a token; where the
//! credential lives between calls is the embedding host's concern.

/// A GitHub bearer token.
///
/// Held only for the duration of a call. The `Debug` implementation
/// redacts the value so tokens do not leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
  pub fn new(token: impl Into<String>) -> Self {
    Self(token.into())
  }

  /// The raw token value, for building an `Authorization` header.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Debug for AuthToken {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("AuthToken(<redacted>)")
  }
}

impl From<&str> for AuthToken {
  fn from(token: &str) -> Self {
    Self::new(token)
  }
}
