//! Pure whole-text transforms used by the engine.

/// Collapse every whitespace run to a single ASCII space and trim both ends.
pub fn remove_extra_spaces(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for word in text.split_whitespace() {
    if !out.is_empty() {
      out.push(' ');
    }
    out.push_str(word);
  }
  out
}

/// Reverse `text` by Unicode scalar value.
pub fn reverse(text: &str) -> String {
  text.chars().rev().collect()
}
