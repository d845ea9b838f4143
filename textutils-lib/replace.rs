//! Find-and-replace over whole documents.
//!
//! The search term is matched as a literal, case-sensitive substring unless
//! [`ReplaceMode::Regex`] is selected, in which case it is compiled with the
//! `regex` crate and the replacement may reference capture groups (`$1`,
//! `${name}`).
//!
//! An empty search term never matches: [`Replacer::new`] returns `None` for
//! it in both modes.

use std::{
  borrow::Cow,
  fmt,
};

use regex::Regex;
use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

use crate::Tendril;

#[derive(Debug, Error)]
pub enum ReplaceError {
  #[error("invalid pattern '{pattern}': {source}")]
  InvalidPattern {
    pattern: Tendril,
    #[source]
    source:  Box<regex::Error>,
  },
}

pub type Result<T> = std::result::Result<T, ReplaceError>;

/// How the search term of a replace is interpreted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplaceMode {
  #[default]
  Literal,
  Regex,
}

impl fmt::Display for ReplaceMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Literal => write!(f, "literal"),
      Self::Regex => write!(f, "regex"),
    }
  }
}

/// Search term and replacement supplied for a single replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacePair {
  pub old: Tendril,
  pub new: Tendril,
}

impl ReplacePair {
  pub fn new(old: impl Into<Tendril>, new: impl Into<Tendril>) -> Self {
    Self {
      old: old.into(),
      new: new.into(),
    }
  }
}

/// A compiled search term.
#[derive(Debug, Clone)]
pub enum Replacer {
  Literal(Tendril),
  Regex(Regex),
}

impl Replacer {
  /// Compile `old` under `mode`. Returns `Ok(None)` for an empty term.
  pub fn new(old: &str, mode: ReplaceMode) -> Result<Option<Self>> {
    if old.is_empty() {
      return Ok(None);
    }

    let replacer = match mode {
      ReplaceMode::Literal => Self::Literal(old.into()),
      ReplaceMode::Regex => {
        let regex = Regex::new(old).map_err(|source| {
          ReplaceError::InvalidPattern {
            pattern: old.into(),
            source:  Box::new(source),
          }
        })?;
        Self::Regex(regex)
      },
    };
    Ok(Some(replacer))
  }

  /// Number of non-overlapping matches in `text`.
  pub fn count_matches(&self, text: &str) -> usize {
    match self {
      Self::Literal(old) => text.matches(old.as_str()).count(),
      Self::Regex(regex) => regex.find_iter(text).count(),
    }
  }

  /// Replace every non-overlapping match in `text` with `new`.
  ///
  /// Borrows `text` unchanged when nothing matches.
  pub fn replace_all<'a>(&self, text: &'a str, new: &str) -> Cow<'a, str> {
    match self {
      Self::Literal(old) => {
        if text.contains(old.as_str()) {
          Cow::Owned(text.replace(old.as_str(), new))
        } else {
          Cow::Borrowed(text)
        }
      },
      Self::Regex(regex) => regex.replace_all(text, new),
    }
  }
}
