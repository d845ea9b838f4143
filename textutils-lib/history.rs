use std::{
  collections::VecDeque,
  num::NonZeroUsize,
};

/// Stores prior contents of a document for undo.
///
/// The history is a stack of whole-content snapshots. Every mutating
/// operation pushes the content as it was *before* the mutation; undo pops the
/// newest snapshot and makes it the current content. Undo never pushes, so
/// repeated undos walk back through every snapshot in reverse chronological
/// order until the stack is exhausted.
///
/// The stack is unbounded unless a limit is set. With a limit, pushing past
/// it discards the oldest snapshot.
///
/// Limitations:
///  * There is no redo. Undoing discards the popped snapshot's successor.
///  * Snapshots are full copies of the content, so memory use grows with
///    document size times the number of edits.
#[derive(Debug, Default, Clone)]
pub struct History {
  snapshots: VecDeque<String>,
  limit:     Option<NonZeroUsize>,
}

impl History {
  pub fn new() -> Self {
    Self::default()
  }

  /// Change the maximum depth, dropping the oldest snapshots if the stack is
  /// now over it.
  pub fn set_limit(&mut self, limit: Option<NonZeroUsize>) {
    self.limit = limit;
    self.enforce_limit();
  }

  /// Record a snapshot of the content as it was before a mutation.
  pub fn push(&mut self, snapshot: impl Into<String>) {
    self.snapshots.push_back(snapshot.into());
    self.enforce_limit();
  }

  /// Remove and return the most recent snapshot.
  pub fn pop(&mut self) -> Option<String> {
    self.snapshots.pop_back()
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.snapshots.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.snapshots.is_empty()
  }

  #[inline]
  pub fn can_undo(&self) -> bool {
    !self.is_empty()
  }

  /// Snapshots from newest to oldest.
  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.snapshots.iter().rev().map(String::as_str)
  }

  fn enforce_limit(&mut self) {
    let Some(limit) = self.limit else {
      return;
    };
    let excess = self.snapshots.len().saturating_sub(limit.get());
    if excess > 0 {
      tracing::trace!(excess, limit = limit.get(), "dropping oldest history snapshots");
      self.snapshots.drain(..excess);
    }
  }
}
