//! # Cooperative Cancellation
//!
//! Cancellation handle shared between a browsing session and its
//! outstanding operations. Operations check the token before dispatch and
//! race their single network await against [`CancelToken::cancelled`];
//! a cancelled operation unwinds without mutating shared state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tokio::sync::Notify;

/// Signal that an operation was cancelled by its owner.
///
/// Not a failure: it propagates as `Err(Cancelled)` so caller cleanup runs,
/// and must never be presented as a user-visible error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation cancelled")]
pub struct Cancelled;

#[derive(Default)]
struct Inner {
  flag: AtomicBool,
  notify: Notify,
}

/// Clonable cancellation token.
///
/// All clones observe the same state; cancelling any clone wakes every
/// task currently awaiting [`CancelToken::cancelled`].
#[derive(Clone, Default)]
pub struct CancelToken {
  inner: Arc<Inner>,
}

impl CancelToken {
  pub fn new() -> Self {
    Self::default()
  }

  /// Cancel all operations holding a clone of this token.
  pub fn cancel(&self) {
    self.inner.flag.store(true, Ordering::SeqCst);
    self.inner.notify.notify_waiters();
  }

  pub fn is_cancelled(&self) -> bool {
    self.inner.flag.load(Ordering::SeqCst)
  }

  /// Resolves once the token is cancelled.
  ///
  /// Registers with the notifier before re-checking the flag so a cancel
  /// racing this call cannot be missed.
  pub async fn cancelled(&self) {
    loop {
      if self.is_cancelled() {
        return;
      }
      let notified = self.inner.notify.notified();
      if self.is_cancelled() {
        return;
      }
      notified.await;
    }
  }

  /// Shorthand for the pre-dispatch check at operation entry.
  pub fn check(&self) -> Result<(), Cancelled> {
    if self.is_cancelled() { Err(Cancelled) } else { Ok(()) }
  }
}

impl std::fmt::Debug for CancelToken {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CancelToken")
      .field("cancelled", &self.is_cancelled())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use super::*;

  #[test]
  fn starts_uncancelled() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());
    assert!(token.check().is_ok());
  }

  #[test]
  fn clones_share_state() {
    let token = CancelToken::new();
    let clone = token.clone();
    token.cancel();
    assert!(clone.is_cancelled());
    assert_eq!(clone.check(), Err(Cancelled));
  }

  #[tokio::test]
  async fn cancelled_resolves_after_cancel() {
    let token = CancelToken::new();
    let waiter = token.clone();

    let handle = tokio::spawn(async move {
      waiter.cancelled().await;
      true
    });

    // Give the waiter a chance to park before cancelling
    tokio::time::sleep(Duration::from_millis(10)).await;
    token.cancel();

    assert!(handle.await.unwrap());
  }

  #[tokio::test]
  async fn cancelled_resolves_immediately_when_already_cancelled() {
    let token = CancelToken::new();
    token.cancel();
    // Must not hang
    token.cancelled().await;
  }
}
