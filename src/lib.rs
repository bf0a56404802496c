//! # Canopy
//!
//! Embeddable GitHub repository browser core. A host shell (an IDE
//! dialog, a TUI, anything with a tree widget) validates a token and an
//! owner through [`GitHubClient`], then drives a [`BrowseSession`] to
//! lazily expand directories and open files. Canopy owns the API access,
//! error classification, in-flight deduplication, and tree
//! materialization; rendering and credential persistence stay with the
//! host.

pub mod session;

// Re-export the core vocabulary so hosts depend on one crate
pub use canopy_core::{
  AuthToken, CancelToken, Cancelled, EntryKind, ExpansionState, InflightRegistry, NodeKind, OperationResult,
  RepoLocator, RepoTree, RepositoryEntry, TreeNode,
};
pub use canopy_gh::{Classified, DecodeError, GitHubClient, HttpTransport, RawResponse, Transport, TransportError};
pub use session::{BrowseSession, ErrorDetail, ExpandOutcome, FileContent, FileKind, OpenOutcome};
