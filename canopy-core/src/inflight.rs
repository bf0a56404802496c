//! # In-Flight Request Deduplication
//!
//! Per-key admission guard ensuring at most one concurrent fetch for the
//! same resource. Keys are repo-relative paths for directory listings and
//! download URLs for content fetches. A caller refused admission skips the
//! fetch entirely: requests are never queued or merged, and the tree
//! re-asks for the same key once the winning request completes, if still
//! needed.

use std::collections::HashSet;
use std::sync::Mutex;

/// Concurrency-safe set of in-flight request keys.
#[derive(Debug, Default)]
pub struct InflightRegistry {
  keys: Mutex<HashSet<String>>,
}

impl InflightRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Try to claim `key`. Returns `false` when a request for the same key
  /// is already outstanding.
  pub fn try_acquire(&self, key: &str) -> bool {
    self
      .keys
      .lock()
      .expect("in-flight key set poisoned")
      .insert(key.to_string())
  }

  /// Release a previously acquired key. Harmless when the key is absent.
  pub fn release(&self, key: &str) {
    self.keys.lock().expect("in-flight key set poisoned").remove(key);
  }

  /// Claim `key` behind an RAII guard that releases on drop.
  ///
  /// Dropping the guard is the only release path the session layer uses:
  /// it runs on success, failure, and cancellation alike, so a key can
  /// never leak and permanently block future fetches of that resource.
  pub fn acquire(&self, key: &str) -> Option<InflightGuard<'_>> {
    if self.try_acquire(key) {
      Some(InflightGuard {
        registry: self,
        key: key.to_string(),
      })
    } else {
      None
    }
  }

  /// Number of currently outstanding keys.
  pub fn len(&self) -> usize {
    self.keys.lock().expect("in-flight key set poisoned").len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Admission ticket for one in-flight key; releases the key on drop.
#[derive(Debug)]
pub struct InflightGuard<'a> {
  registry: &'a InflightRegistry,
  key: String,
}

impl InflightGuard<'_> {
  pub fn key(&self) -> &str {
    &self.key
  }
}

impl Drop for InflightGuard<'_> {
  fn drop(&mut self) {
    self.registry.release(&self.key);
  }
}
