//! Document state and the transforms that act on it.
//!
//! [`TextEngine`] owns the current content, its derived [`Counts`] and the
//! undo [`History`]. One engine belongs to one session; nothing here is
//! global.
//!
//! # Snapshot-then-mutate
//!
//! Every transform pushes the content as it was before the transform onto the
//! history and only then replaces it. Undo pops that snapshot back without
//! pushing, so a single undo after any single transform restores the previous
//! content exactly.
//!
//! [`TextEngine::set_content`] is the raw primitive and does not touch the
//! history. Front ends that want a keystroke-style edit to be undoable use
//! [`TextEngine::edit`], which snapshots first.
//!
//! # Example
//!
//! ```
//! use textutils_lib::engine::TextEngine;
//!
//! let mut engine = TextEngine::with_text("  Hello   world  ");
//! engine.remove_extra_spaces();
//! assert_eq!(engine.content(), "Hello world");
//! assert_eq!(engine.word_count(), 2);
//! assert_eq!(engine.char_count(), 10);
//!
//! engine.undo();
//! assert_eq!(engine.content(), "  Hello   world  ");
//! ```

use std::{
  mem,
  num::NonZeroUsize,
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

use crate::{
  case_convention::{
    self,
    CaseDirection,
  },
  clipboard::{
    ClipboardError,
    ClipboardProvider,
  },
  counts::{
    Counts,
    update_counts,
  },
  history::History,
  replace::{
    ReplaceError,
    ReplaceMode,
    ReplacePair,
    Replacer,
  },
  transform,
};

#[derive(Debug, Error)]
pub enum EngineError {
  #[error(transparent)]
  Replace(#[from] ReplaceError),
  #[error(transparent)]
  Clipboard(#[from] ClipboardError),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Engine settings read from the `[engine]` table of the config file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct EngineConfig {
  /// Maximum number of undo snapshots; `0` keeps every snapshot.
  pub history_limit: usize,
  pub replace_mode:  ReplaceMode,
}

#[derive(Debug, Clone, Default)]
pub struct TextEngine {
  content:        String,
  counts:         Counts,
  history:        History,
  case_direction: CaseDirection,
  replace_mode:   ReplaceMode,
}

impl TextEngine {
  /// Create an empty engine. The first case toggle uppercases.
  pub fn new() -> Self {
    Self::default()
  }

  /// Create an engine holding `text` with an empty history.
  pub fn with_text(text: impl Into<String>) -> Self {
    let mut engine = Self::new();
    engine.set_content(text);
    engine
  }

  pub fn with_config(config: &EngineConfig) -> Self {
    let mut engine = Self::new();
    engine.configure(config);
    engine
  }

  /// Apply `config` without touching the content.
  pub fn configure(&mut self, config: &EngineConfig) {
    self
      .history
      .set_limit(NonZeroUsize::new(config.history_limit));
    self.replace_mode = config.replace_mode;
  }

  #[inline]
  pub fn content(&self) -> &str {
    &self.content
  }

  #[inline]
  pub fn counts(&self) -> Counts {
    self.counts
  }

  #[inline]
  pub fn word_count(&self) -> usize {
    self.counts.words
  }

  #[inline]
  pub fn char_count(&self) -> usize {
    self.counts.chars
  }

  #[inline]
  pub fn history(&self) -> &History {
    &self.history
  }

  #[inline]
  pub fn can_undo(&self) -> bool {
    self.history.can_undo()
  }

  /// Direction the next [`TextEngine::toggle_case`] will apply.
  #[inline]
  pub fn next_case_direction(&self) -> CaseDirection {
    self.case_direction
  }

  #[inline]
  pub fn replace_mode(&self) -> ReplaceMode {
    self.replace_mode
  }

  pub fn set_replace_mode(&mut self, mode: ReplaceMode) {
    self.replace_mode = mode;
  }

  /// Replace the content and recompute counts. Does not record history.
  pub fn set_content(&mut self, text: impl Into<String>) {
    self.content = text.into();
    self.counts = update_counts(&self.content);
  }

  /// Record `text` as the newest undo snapshot.
  pub fn push_history(&mut self, text: impl Into<String>) {
    self.history.push(text);
  }

  /// Replace the content as a user edit: the previous content is snapshotted
  /// first so the edit can be undone.
  pub fn edit(&mut self, text: impl Into<String>) {
    let text = text.into();
    self.apply(|_| text);
  }

  pub fn clear(&mut self) {
    self.apply(|_| String::new());
  }

  /// Restore the newest snapshot. Returns `false` when there was nothing to
  /// undo, in which case content and counts are unchanged.
  pub fn undo(&mut self) -> bool {
    match self.history.pop() {
      Some(previous) => {
        self.set_content(previous);
        tracing::debug!(remaining = self.history.len(), "undo");
        true
      },
      None => false,
    }
  }

  /// Uppercase or lowercase the content, alternating on every call.
  pub fn toggle_case(&mut self) {
    let direction = self.case_direction;
    self.convert_case(direction);
    self.case_direction = direction.flip();
  }

  /// Convert case in an explicit direction. Unlike
  /// [`TextEngine::toggle_case`] this leaves the toggle direction alone.
  pub fn convert_case(&mut self, direction: CaseDirection) {
    self.apply(|text| direction.apply(text));
  }

  pub fn reverse(&mut self) {
    self.apply(transform::reverse);
  }

  pub fn capitalize_words(&mut self) {
    self.apply(|text| case_convention::capitalize_words(text.chars()));
  }

  pub fn remove_extra_spaces(&mut self) {
    self.apply(transform::remove_extra_spaces);
  }

  /// Replace every occurrence of `old` with `new` and return the number of
  /// matches.
  ///
  /// An empty `old` is a no-op that records no history. In regex mode an
  /// invalid pattern is an error and nothing is recorded either.
  pub fn replace(&mut self, old: &str, new: &str) -> Result<usize> {
    let Some(replacer) = Replacer::new(old, self.replace_mode)? else {
      tracing::debug!("replace with empty search term ignored");
      return Ok(0);
    };

    let matches = replacer.count_matches(&self.content);
    self.apply(|text| replacer.replace_all(text, new).into_owned());
    tracing::debug!(matches, mode = %self.replace_mode, "replace");
    Ok(matches)
  }

  pub fn replace_pair(&mut self, pair: &ReplacePair) -> Result<usize> {
    self.replace(&pair.old, &pair.new)
  }

  /// Hand the current content to `clipboard`. Content and history are not
  /// affected.
  pub fn copy(&self, clipboard: &dyn ClipboardProvider) -> Result<()> {
    clipboard.set_contents(&self.content)?;
    tracing::debug!(provider = %clipboard.name(), bytes = self.content.len(), "copied content");
    Ok(())
  }

  fn apply(&mut self, f: impl FnOnce(&str) -> String) {
    let previous = mem::take(&mut self.content);
    let next = f(&previous);
    self.history.push(previous);
    self.set_content(next);
  }
}
