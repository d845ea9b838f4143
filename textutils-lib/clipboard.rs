//! Clipboard abstraction for `textutils-lib`.
//!
//! The lib only defines the interface and error types. Hosts provide the
//! process-backed implementations (see `textutils-runtime`).

use std::borrow::Cow;

use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error("clipboard provider command '{0}' failed")]
  CommandFailed(String),
  #[error("failed to write to clipboard provider's stdin")]
  StdinWriteFailed,
  #[error("no clipboard provider is available")]
  Unavailable,
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Destination for the copy command.
pub trait ClipboardProvider: Send + Sync {
  fn name(&self) -> Cow<'_, str>;
  fn set_contents(&self, content: &str) -> Result<()>;
}

/// Provider used when nothing suitable was detected. Copying reports
/// [`ClipboardError::Unavailable`] so the caller can tell the user.
#[derive(Debug, Default)]
pub struct NoClipboard;

impl ClipboardProvider for NoClipboard {
  fn name(&self) -> Cow<'_, str> {
    "none".into()
  }

  fn set_contents(&self, _content: &str) -> Result<()> {
    Err(ClipboardError::Unavailable)
  }
}

/// In-process clipboard that keeps the last copied value.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
  contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn contents(&self) -> Option<String> {
    self.contents.lock().clone()
  }
}

impl ClipboardProvider for MemoryClipboard {
  fn name(&self) -> Cow<'_, str> {
    "memory".into()
  }

  fn set_contents(&self, content: &str) -> Result<()> {
    *self.contents.lock() = Some(content.to_string());
    Ok(())
  }
}
