//! # Lazy Repository Tree
//!
//! Materializes a repository's directory structure one level at a time.
//! Each directory node runs a small state machine
//! (`Collapsed -> Expanding -> Expanded`) and owns a placeholder child
//! until its first successful expansion, so hosts can render an expansion
//! affordance before any listing has been fetched.

use crate::entry::RepositoryEntry;

/// Expansion lifecycle of a directory node.
///
/// `Expanded` is sticky: once a directory has been materialized, another
/// expand request is a no-op at this layer. Re-fetching is an explicit
/// caller choice (a future refresh action), never automatic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionState {
  Collapsed,
  Expanding,
  Expanded,
}

/// What a tree node represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
  /// Synthetic repository root; not backed by a listing row.
  Root,
  /// Stand-in child of a directory that has not been expanded yet.
  Placeholder,
  /// A real row from a directory listing.
  Entry(RepositoryEntry),
}

/// One node of the lazily materialized tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
  kind: NodeKind,
  state: ExpansionState,
  children: Vec<TreeNode>,
}

impl TreeNode {
  fn root() -> Self {
    Self {
      kind: NodeKind::Root,
      state: ExpansionState::Collapsed,
      children: vec![Self::placeholder()],
    }
  }

  fn placeholder() -> Self {
    Self {
      kind: NodeKind::Placeholder,
      state: ExpansionState::Collapsed,
      children: Vec::new(),
    }
  }

  fn from_entry(entry: RepositoryEntry) -> Self {
    let children = if entry.kind.is_directory() {
      vec![Self::placeholder()]
    } else {
      Vec::new()
    };
    Self {
      kind: NodeKind::Entry(entry),
      state: ExpansionState::Collapsed,
      children,
    }
  }

  pub fn kind(&self) -> &NodeKind {
    &self.kind
  }

  pub fn state(&self) -> ExpansionState {
    self.state
  }

  pub fn children(&self) -> &[TreeNode] {
    &self.children
  }

  /// The listing row behind this node, if any.
  pub fn entry(&self) -> Option<&RepositoryEntry> {
    match &self.kind {
      NodeKind::Entry(entry) => Some(entry),
      _ => None,
    }
  }

  /// Repo-relative path of this node; the root is the empty path.
  pub fn path(&self) -> &str {
    self.entry().map_or("", |entry| entry.path.as_str())
  }

  pub fn is_placeholder(&self) -> bool {
    matches!(self.kind, NodeKind::Placeholder)
  }

  /// Whether this node can be expanded into children.
  pub fn is_directory(&self) -> bool {
    match &self.kind {
      NodeKind::Root => true,
      NodeKind::Entry(entry) => entry.kind.is_directory(),
      NodeKind::Placeholder => false,
    }
  }

  fn child_by_name(&self, name: &str) -> Option<&TreeNode> {
    self
      .children
      .iter()
      .find(|child| child.entry().is_some_and(|entry| entry.name == name))
  }

  fn child_by_name_mut(&mut self, name: &str) -> Option<&mut TreeNode> {
    self
      .children
      .iter_mut()
      .find(|child| child.entry().is_some_and(|entry| entry.name == name))
  }
}

/// The tree for one browsing session.
///
/// Exclusively owned by the session that created it; all mutation goes
/// through `&mut self`, so results fetched on worker tasks must be handed
/// back to the owner before they can touch a node.
#[derive(Debug)]
pub struct RepoTree {
  root: TreeNode,
}

impl Default for RepoTree {
  fn default() -> Self {
    Self::new()
  }
}

impl RepoTree {
  pub fn new() -> Self {
    Self { root: TreeNode::root() }
  }

  pub fn root(&self) -> &TreeNode {
    &self.root
  }

  /// Look up a node by repo-relative path; the empty path is the root.
  pub fn node(&self, path: &str) -> Option<&TreeNode> {
    if path.is_empty() {
      return Some(&self.root);
    }
    let mut current = &self.root;
    for segment in path.split('/') {
      current = current.child_by_name(segment)?;
    }
    Some(current)
  }

  fn node_mut(&mut self, path: &str) -> Option<&mut TreeNode> {
    if path.is_empty() {
      return Some(&mut self.root);
    }
    let mut current = &mut self.root;
    for segment in path.split('/') {
      current = current.child_by_name_mut(segment)?;
    }
    Some(current)
  }

  /// Move a collapsed directory into `Expanding`.
  ///
  /// Returns `false` when the node is missing, is not a directory, or is
  /// already expanding or expanded; the caller must not fetch in that
  /// case. The placeholder child is retained until a result arrives.
  pub fn begin_expansion(&mut self, path: &str) -> bool {
    match self.node_mut(path) {
      Some(node) if node.is_directory() && node.state == ExpansionState::Collapsed => {
        node.state = ExpansionState::Expanding;
        true
      }
      _ => false,
    }
  }

  /// Attach a listing result to an expanding directory.
  ///
  /// Replaces the placeholder with real children; child directories get
  /// their own fresh placeholder so they can lazily expand in turn.
  /// Returns `false` when the node is not currently expanding.
  pub fn complete_expansion(&mut self, path: &str, entries: Vec<RepositoryEntry>) -> bool {
    match self.node_mut(path) {
      Some(node) if node.state == ExpansionState::Expanding => {
        node.children = entries.into_iter().map(TreeNode::from_entry).collect();
        node.state = ExpansionState::Expanded;
        true
      }
      _ => false,
    }
  }

  /// Revert an expanding directory to `Collapsed` after a failed listing.
  ///
  /// The placeholder remains in place, so a later expansion attempt can
  /// retry the fetch.
  pub fn fail_expansion(&mut self, path: &str) -> bool {
    match self.node_mut(path) {
      Some(node) if node.state == ExpansionState::Expanding => {
        node.state = ExpansionState::Collapsed;
        true
      }
      _ => false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::entry::EntryKind;

  fn dir(name: &str, path: &str) -> RepositoryEntry {
    RepositoryEntry {
      name: name.to_string(),
      path: path.to_string(),
      kind: EntryKind::Dir,
      download_url: None,
    }
  }

  fn file(name: &str, path: &str) -> RepositoryEntry {
    RepositoryEntry {
      name: name.to_string(),
      path: path.to_string(),
      kind: EntryKind::File,
      download_url: Some(format!("https://raw.example/{path}")),
    }
  }

  #[test]
  fn fresh_tree_has_collapsed_root_with_placeholder() {
    let tree = RepoTree::new();
    assert_eq!(tree.root().state(), ExpansionState::Collapsed);
    assert_eq!(tree.root().children().len(), 1);
    assert!(tree.root().children()[0].is_placeholder());
  }

  #[test]
  fn expansion_lifecycle() {
    let mut tree = RepoTree::new();

    assert!(tree.begin_expansion(""));
    assert_eq!(tree.root().state(), ExpansionState::Expanding);
    // Placeholder retained while the listing is outstanding
    assert!(tree.root().children()[0].is_placeholder());

    assert!(tree.complete_expansion("", vec![dir("src", "src"), file("README.md", "README.md")]));
    assert_eq!(tree.root().state(), ExpansionState::Expanded);
    assert_eq!(tree.root().children().len(), 2);
    assert!(tree.root().children().iter().all(|c| !c.is_placeholder()));

    // Child directory got a fresh placeholder of its own
    let src = tree.node("src").unwrap();
    assert_eq!(src.children().len(), 1);
    assert!(src.children()[0].is_placeholder());

    // File children have none
    let readme = tree.node("README.md").unwrap();
    assert!(readme.children().is_empty());
  }

  #[test]
  fn expanded_is_sticky() {
    let mut tree = RepoTree::new();
    assert!(tree.begin_expansion(""));
    assert!(tree.complete_expansion("", vec![dir("src", "src")]));

    // A second expansion attempt is a no-op
    assert!(!tree.begin_expansion(""));
    assert_eq!(tree.root().state(), ExpansionState::Expanded);
  }

  #[test]
  fn begin_expansion_rejects_concurrent_attempt() {
    let mut tree = RepoTree::new();
    assert!(tree.begin_expansion(""));
    assert!(!tree.begin_expansion(""));
  }

  #[test]
  fn failed_expansion_reverts_and_allows_retry() {
    let mut tree = RepoTree::new();
    assert!(tree.begin_expansion(""));
    assert!(tree.fail_expansion(""));

    assert_eq!(tree.root().state(), ExpansionState::Collapsed);
    assert!(tree.root().children()[0].is_placeholder());

    // Retry succeeds
    assert!(tree.begin_expansion(""));
    assert!(tree.complete_expansion("", vec![file("a.txt", "a.txt")]));
    assert_eq!(tree.root().state(), ExpansionState::Expanded);
  }

  #[test]
  fn nested_expansion_and_lookup() {
    let mut tree = RepoTree::new();
    tree.begin_expansion("");
    tree.complete_expansion("", vec![dir("src", "src")]);

    assert!(tree.begin_expansion("src"));
    assert!(tree.complete_expansion("src", vec![dir("api", "src/api"), file("main.rs", "src/main.rs")]));

    let api = tree.node("src/api").unwrap();
    assert!(api.is_directory());
    assert_eq!(api.state(), ExpansionState::Collapsed);

    let main = tree.node("src/main.rs").unwrap();
    assert_eq!(main.path(), "src/main.rs");
    assert!(!main.is_directory());

    assert!(tree.node("src/missing.rs").is_none());
  }

  #[test]
  fn files_are_not_expandable() {
    let mut tree = RepoTree::new();
    tree.begin_expansion("");
    tree.complete_expansion("", vec![file("README.md", "README.md")]);

    assert!(!tree.begin_expansion("README.md"));
  }

  #[test]
  fn reexpansion_replaces_subtree() {
    let mut tree = RepoTree::new();
    tree.begin_expansion("");
    tree.complete_expansion("", vec![dir("src", "src")]);
    tree.begin_expansion("src");
    tree.complete_expansion("src", vec![file("old.rs", "src/old.rs")]);

    // A refresh-style flow re-runs the machine from Expanding
    let node = tree.node_mut("src").unwrap();
    node.state = ExpansionState::Expanding;
    tree.complete_expansion("src", vec![file("new.rs", "src/new.rs")]);

    assert!(tree.node("src/old.rs").is_none());
    assert!(tree.node("src/new.rs").is_some());
  }

  #[test]
  fn complete_requires_expanding_state() {
    let mut tree = RepoTree::new();
    // Never entered Expanding
    assert!(!tree.complete_expansion("", vec![file("a", "a")]));
    assert!(!tree.fail_expansion(""));
  }
}
