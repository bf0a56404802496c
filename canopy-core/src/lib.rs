//! # Canopy Core Library
//!
//! Shared types and session-local machinery for the canopy repository
//! browser: the uniform operation result, directory-entry model,
//! credential and locator value types, cooperative cancellation, in-flight
//! request deduplication, and the lazily materialized repository tree.
//! Nothing in this crate touches the network.

pub mod cancel;
pub mod creds;
pub mod entry;
pub mod github;
pub mod inflight;
pub mod result;
pub mod tree;

// Re-export the types consumers reach for most often
pub use cancel::{CancelToken, Cancelled};
pub use creds::AuthToken;
pub use entry::{EntryKind, RepositoryEntry};
pub use github::RepoLocator;
pub use inflight::{InflightGuard, InflightRegistry};
pub use result::OperationResult;
pub use tree::{ExpansionState, NodeKind, RepoTree, TreeNode};
