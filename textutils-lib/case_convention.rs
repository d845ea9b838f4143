//! Case conversions applied to whole documents.
//!
//! Every conversion comes in two flavours: one returning a fresh `String` and
//! a `_with` variant that appends into a caller-provided buffer.

pub fn to_upper_case(text: impl Iterator<Item = char>) -> String {
  let mut res = String::new();
  to_upper_case_with(text, &mut res);
  res
}

pub fn to_upper_case_with(text: impl Iterator<Item = char>, buf: &mut String) {
  text.for_each(|c| buf.extend(c.to_uppercase()));
}

pub fn to_lower_case(text: impl Iterator<Item = char>) -> String {
  let mut res = String::new();
  to_lower_case_with(text, &mut res);
  res
}

pub fn to_lower_case_with(text: impl Iterator<Item = char>, buf: &mut String) {
  text.for_each(|c| buf.extend(c.to_lowercase()));
}

pub fn capitalize_words(text: impl Iterator<Item = char>) -> String {
  let mut res = String::new();
  capitalize_words_with(text, &mut res);
  res
}

/// Uppercase the first character of every whitespace-delimited word.
///
/// Only the leading character changes; the rest of each word and every
/// separator are copied through untouched.
pub fn capitalize_words_with(text: impl Iterator<Item = char>, buf: &mut String) {
  text.fold(true, |word_start, c| {
    if c.is_whitespace() {
      buf.push(c);
      return true;
    }
    if word_start {
      buf.extend(c.to_uppercase());
    } else {
      buf.push(c);
    }
    false
  });
}

/// Direction applied by the next case toggle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CaseDirection {
  #[default]
  Upper,
  Lower,
}

impl CaseDirection {
  pub fn flip(self) -> Self {
    match self {
      Self::Upper => Self::Lower,
      Self::Lower => Self::Upper,
    }
  }

  pub fn apply(self, text: &str) -> String {
    match self {
      Self::Upper => to_upper_case(text.chars()),
      Self::Lower => to_lower_case(text.chars()),
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_to_upper_case() {
    assert_eq!(to_upper_case("hello".chars()), "HELLO");
    assert_eq!(to_upper_case("Hello World".chars()), "HELLO WORLD");
    assert_eq!(to_upper_case("ALREADY".chars()), "ALREADY");
    assert_eq!(to_upper_case("straße".chars()), "STRASSE");
    assert_eq!(to_upper_case("".chars()), "");
  }

  #[test]
  fn test_to_lower_case() {
    assert_eq!(to_lower_case("HELLO".chars()), "hello");
    assert_eq!(to_lower_case("Hello World".chars()), "hello world");
    assert_eq!(to_lower_case("ÀÉÎ".chars()), "àéî");
    assert_eq!(to_lower_case("".chars()), "");
  }

  #[test]
  fn test_capitalize_words() {
    assert_eq!(capitalize_words("hello world".chars()), "Hello World");
    assert_eq!(capitalize_words("hELLO".chars()), "HELLO");
    assert_eq!(capitalize_words("a".chars()), "A");
    assert_eq!(capitalize_words("".chars()), "");
    assert_eq!(capitalize_words("123 go".chars()), "123 Go");
  }

  #[test]
  fn capitalize_preserves_separators() {
    assert_eq!(
      capitalize_words("  two  spaces\tand\nlines ".chars()),
      "  Two  Spaces\tAnd\nLines "
    );
  }

  #[test]
  fn capitalize_is_idempotent() {
    let once = capitalize_words("the quick brown fox".chars());
    assert_eq!(capitalize_words(once.chars()), once);
  }

  #[test]
  fn toggle_direction() {
    let dir = CaseDirection::default();
    assert_eq!(dir, CaseDirection::Upper);
    assert_eq!(dir.apply("abc"), "ABC");
    assert_eq!(dir.flip().apply("ABC"), "abc");
    assert_eq!(dir.flip().flip(), dir);
  }
}
