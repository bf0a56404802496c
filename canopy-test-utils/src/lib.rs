//! Test utilities shared across the canopy workspace
//!
//! This crate provides common testing infrastructure:
//! - Contents-endpoint JSON fixtures and wiremock mock builders
//!   ([`github`])
//!
//! The clippy dead_code lint is disabled for this crate because test
//! utilities may not be used by all tests, and the compiler cannot detect
//! usage across crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod github;

// Re-export commonly used items
pub use github::{dir_entry, file_entry, mock_listing, mock_owner_lookup, mock_raw_file, mock_user_identity};
