//! # Browsing Session
//!
//! The surface a host shell drives: one session per browsing dialog,
//! owning the tree, the in-flight registry, and a cancellation token that
//! covers every operation the session dispatches. Results are applied to
//! the tree through `&mut self`, so worker-task results must be handed
//! back to the session's owner before they can touch a node.

use canopy_core::{
  AuthToken, CancelToken, Cancelled, ExpansionState, InflightRegistry, OperationResult, RepoLocator, RepoTree,
  RepositoryEntry,
};
use canopy_gh::{GitHubClient, HttpTransport, Transport};
use tracing::{debug, instrument};

/// How much detail a failed expansion surfaces to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorDetail {
  /// A fixed generic string, regardless of what the server said.
  Generic,
  /// The classifier's verbatim status and message.
  #[default]
  Http,
}

/// How a selected file's content is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
  Text,
  Binary,
}

/// Extensions routed to the binary fetch path.
const BINARY_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

impl FileKind {
  /// Classify a file by its name's extension. Everything without a
  /// recognized image extension is treated as text.
  pub fn from_name(name: &str) -> Self {
    match name.rsplit_once('.') {
      Some((_, ext)) if BINARY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) => Self::Binary,
      _ => Self::Text,
    }
  }
}

/// Content of an opened file, shaped by the routing decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
  Text(String),
  Binary(Vec<u8>),
}

impl FileContent {
  fn empty(kind: FileKind) -> Self {
    match kind {
      FileKind::Text => Self::Text(String::new()),
      FileKind::Binary => Self::Binary(Vec::new()),
    }
  }
}

/// Outcome of a directory-expansion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandOutcome {
  /// Children attached to the node.
  Expanded { children: usize },
  /// The node was already materialized; no network call was made.
  AlreadyExpanded,
  /// A listing for the same path is outstanding; this request skipped.
  InFlight,
  /// The listing failed; the node reverted to collapsed and may be
  /// retried.
  Failed { message: String },
}

/// Outcome of a file-selection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
  Opened(OperationResult<FileContent>),
  /// A fetch for the same download URL is outstanding; this request
  /// skipped.
  InFlight,
}

/// One browsing dialog's worth of state.
pub struct BrowseSession<T = HttpTransport> {
  client: GitHubClient<T>,
  token: AuthToken,
  locator: RepoLocator,
  tree: RepoTree,
  inflight: InflightRegistry,
  cancel: CancelToken,
  error_detail: ErrorDetail,
}

impl BrowseSession<HttpTransport> {
  /// Start a session against the SaaS GitHub API.
  pub fn new(token: AuthToken, locator: RepoLocator) -> Self {
    Self::with_client(GitHubClient::new(), token, locator)
  }
}

impl<T: Transport> BrowseSession<T> {
  /// Start a session over a specific client (custom transport or base
  /// URL).
  pub fn with_client(client: GitHubClient<T>, token: AuthToken, locator: RepoLocator) -> Self {
    Self {
      client,
      token,
      locator,
      tree: RepoTree::new(),
      inflight: InflightRegistry::new(),
      cancel: CancelToken::new(),
      error_detail: ErrorDetail::default(),
    }
  }

  /// Choose how failed expansions are worded.
  pub fn with_error_detail(mut self, error_detail: ErrorDetail) -> Self {
    self.error_detail = error_detail;
    self
  }

  pub fn locator(&self) -> &RepoLocator {
    &self.locator
  }

  pub fn tree(&self) -> &RepoTree {
    &self.tree
  }

  /// A handle the host can use to observe or trigger cancellation.
  pub fn cancel_token(&self) -> CancelToken {
    self.cancel.clone()
  }

  /// Cancel every outstanding operation this session owns. Called when
  /// the host closes the browsing dialog.
  pub fn close(&self) {
    self.cancel.cancel();
  }

  /// Expand one directory level, fetching its listing on first demand.
  ///
  /// Re-expanding a materialized node is a no-op, and a path whose
  /// listing is already being fetched is skipped rather than queued. On
  /// failure the node reverts so a later attempt can retry.
  #[instrument(skip(self), level = "debug")]
  pub async fn expand_directory(&mut self, path: &str) -> Result<ExpandOutcome, Cancelled> {
    self.cancel.check()?;

    match self.tree.node(path) {
      None => {
        return Ok(ExpandOutcome::Failed {
          message: format!("Unknown directory '{path}'"),
        });
      }
      Some(node) if !node.is_directory() => {
        return Ok(ExpandOutcome::Failed {
          message: format!("'{path}' is not a directory"),
        });
      }
      Some(node) if node.state() == ExpansionState::Expanded => {
        return Ok(ExpandOutcome::AlreadyExpanded);
      }
      Some(_) => {}
    }

    let Some(_guard) = self.inflight.acquire(path) else {
      debug!(path, "listing already in flight, skipping");
      return Ok(ExpandOutcome::InFlight);
    };

    if !self.tree.begin_expansion(path) {
      return Ok(ExpandOutcome::InFlight);
    }

    let result = match self.client.list_directory(&self.token, &self.locator, path, &self.cancel).await {
      Ok(result) => result,
      // Clean abort: the key releases via guard drop and the tree is
      // left alone; the session is closing and the tree goes with it.
      Err(Cancelled) => return Err(Cancelled),
    };

    if result.success {
      let mut entries = result.data;
      sort_for_display(&mut entries);
      let children = entries.len();
      self.tree.complete_expansion(path, entries);
      Ok(ExpandOutcome::Expanded { children })
    } else {
      self.tree.fail_expansion(path);
      Ok(ExpandOutcome::Failed {
        message: self.failure_text(result.message),
      })
    }
  }

  /// Fetch a selected file's content, routed to text or binary by the
  /// file name.
  ///
  /// A file entry without a download URL is a terminal condition: the
  /// result is a failure with empty content of the routed kind, never a
  /// retry.
  #[instrument(skip(self, download_url), level = "debug")]
  pub async fn open_file(&self, name: &str, download_url: Option<&str>) -> Result<OpenOutcome, Cancelled> {
    self.cancel.check()?;

    let kind = FileKind::from_name(name);
    let Some(url) = download_url else {
      return Ok(OpenOutcome::Opened(OperationResult::failed(
        FileContent::empty(kind),
        format!("'{name}' has no retrievable content"),
      )));
    };

    let Some(_guard) = self.inflight.acquire(url) else {
      debug!(name, "content fetch already in flight, skipping");
      return Ok(OpenOutcome::InFlight);
    };

    let result = match kind {
      FileKind::Text => self
        .client
        .fetch_file_text(&self.token, url, &self.cancel)
        .await?
        .map(FileContent::Text),
      FileKind::Binary => self
        .client
        .fetch_file_bytes(&self.token, url, &self.cancel)
        .await?
        .map(FileContent::Binary),
    };

    Ok(OpenOutcome::Opened(result))
  }

  fn failure_text(&self, message: Option<String>) -> String {
    match (self.error_detail, message) {
      (ErrorDetail::Http, Some(message)) => message,
      _ => "Could not load directory contents".to_string(),
    }
  }
}

/// Directories before files, then case-insensitive by name.
fn sort_for_display(entries: &mut [RepositoryEntry]) {
  entries.sort_by(|a, b| {
    b.kind
      .is_directory()
      .cmp(&a.kind.is_directory())
      .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
  });
}
