//! Word and character statistics derived from document content.
//!
//! Both figures use `char::is_whitespace` as the definition of whitespace,
//! which is the same definition the whitespace transforms use.

/// Derived statistics for a piece of text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Counts {
  /// Number of maximal non-whitespace runs.
  pub words: usize,
  /// Number of characters that are not whitespace.
  pub chars: usize,
}

impl Counts {
  pub const ZERO: Self = Self { words: 0, chars: 0 };
}

/// Compute word and character counts for `text`.
///
/// A word is a maximal run of non-whitespace characters, so empty and
/// all-whitespace text both count zero words.
pub fn update_counts(text: &str) -> Counts {
  Counts {
    words: word_count(text),
    chars: char_count(text),
  }
}

pub fn word_count(text: &str) -> usize {
  text.split_whitespace().count()
}

pub fn char_count(text: &str) -> usize {
  text.chars().filter(|c| !c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_text() {
    assert_eq!(update_counts(""), Counts::ZERO);
  }

  #[test]
  fn whitespace_only() {
    assert_eq!(update_counts(" \t\n  \r\n"), Counts::ZERO);
  }

  #[test]
  fn words_and_chars() {
    assert_eq!(update_counts("  Hello   world  "), Counts {
      words: 2,
      chars: 10,
    });
    assert_eq!(update_counts("one\ttwo\nthree"), Counts {
      words: 3,
      chars: 11,
    });
  }

  #[test]
  fn counts_scalar_values_not_bytes() {
    assert_eq!(update_counts("héllo wörld"), Counts {
      words: 2,
      chars: 10,
    });
  }

  #[test]
  fn unicode_whitespace_separates_words() {
    // U+3000 IDEOGRAPHIC SPACE and U+00A0 NO-BREAK SPACE
    assert_eq!(update_counts("a\u{3000}b\u{a0}c"), Counts {
      words: 3,
      chars: 3,
    });
  }

  quickcheck::quickcheck! {
      fn chars_is_len_minus_whitespace(text: String) -> bool {
          let whitespace = text.chars().filter(|c| c.is_whitespace()).count();
          update_counts(&text).chars == text.chars().count() - whitespace
      }

      fn words_match_tokens(text: String) -> bool {
          let tokens = text
              .split(char::is_whitespace)
              .filter(|token| !token.is_empty())
              .count();
          update_counts(&text).words == tokens
      }
  }
}
