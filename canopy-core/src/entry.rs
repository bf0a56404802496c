//! # Directory Entries
//!
//! The normalized row of a GitHub directory listing. Entries deserialize
//! directly from the contents-endpoint payload and tolerate fields and
//! entry kinds this crate does not know about.

use serde::Deserialize;

/// Kind of a repository entry as reported by the contents endpoint.
///
/// GitHub also returns `symlink` and `submodule` rows; those are kept in
/// listings but are neither expandable nor fetchable. Unrecognized kinds
/// map to [`EntryKind::Unknown`] so new API values do not break decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
  File,
  Dir,
  Symlink,
  Submodule,
  #[serde(other)]
  Unknown,
}

impl EntryKind {
  /// Whether entries of this kind can be expanded into children.
  pub const fn is_directory(self) -> bool {
    matches!(self, Self::Dir)
  }

  /// Whether entries of this kind carry fetchable file content.
  pub const fn is_file(self) -> bool {
    matches!(self, Self::File)
  }
}

/// One row of a directory listing.
///
/// Built fresh on every listing response; re-expanding a directory replaces
/// the subtree rather than merging with prior entries. `download_url` is
/// present for file entries served by the contents endpoint; a file entry
/// without one cannot have its content retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryEntry {
  /// Display name (e.g. `README.md`)
  pub name: String,
  /// Repo-relative path, unique within a listing (e.g. `src/README.md`)
  pub path: String,
  /// Entry kind
  #[serde(rename = "type")]
  pub kind: EntryKind,
  /// Raw-content URL for file entries; absent for directories and for
  /// some GitHub-internal entry kinds
  #[serde(default)]
  pub download_url: Option<String>,
}
