//! Constants for the canopy-gh client

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for JSON API responses
pub const ACCEPT_JSON: &str = "application/vnd.github.v3+json";

/// Accept header value for raw file content
pub const ACCEPT_RAW: &str = "application/vnd.github.raw+json";
