//! # GitHub Access Layer
//!
//! GitHub REST API integration for the canopy repository browser: a
//! pluggable HTTP transport, single-point response classification, the
//! directory-listing decoder, and the four repository access operations
//! (token validation, owner validation, one-level directory listing, and
//! file content retrieval).

pub mod classify;
pub mod client;
pub mod consts;
pub mod decode;
pub mod endpoints;
pub mod transport;

#[cfg(test)]
mod mock;

// Re-export the client
pub use client::GitHubClient;
// Re-export the classification and transport seams
pub use classify::Classified;
pub use decode::DecodeError;
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
