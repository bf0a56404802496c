//! # Directory-Listing Decoder
//!
//! Parses the contents-endpoint JSON payload into normalized entries.
//! Decode failures are a distinct error from network-classified failures
//! so a malformed payload is diagnosable as such. Entry order is passed
//! through as received; display ordering belongs to the session layer.

use canopy_core::RepositoryEntry;
use thiserror::Error;

/// Failure to interpret a listing payload.
#[derive(Debug, Error)]
pub enum DecodeError {
  /// The payload was not valid JSON or a record was missing a required
  /// field.
  #[error("malformed directory listing: {0}")]
  Malformed(#[from] serde_json::Error),

  /// The contents endpoint returns a single object when the requested
  /// path names a file rather than a directory.
  #[error("path is not a directory (got a single '{0}' entry)")]
  NotADirectory(String),
}

/// Decode a directory-listing body into entries.
///
/// Unknown fields and unknown entry kinds are tolerated so API additions
/// do not break the browser.
pub fn decode_entries(body: &[u8]) -> Result<Vec<RepositoryEntry>, DecodeError> {
  let value: serde_json::Value = serde_json::from_slice(body)?;

  if value.is_object() {
    let kind = value
      .get("type")
      .and_then(|t| t.as_str())
      .unwrap_or("unknown")
      .to_string();
    return Err(DecodeError::NotADirectory(kind));
  }

  Ok(serde_json::from_value(value)?)
}
