//! Plain terminal output for the shell.
//!
//! Colors come from the active [`DisplayMode`]; when styling is off (pipes,
//! tests) the same text is written without escape sequences.

use std::io::{
  self,
  Write,
};

use crossterm::{
  queue,
  style::{
    Color,
    Print,
    ResetColor,
    SetBackgroundColor,
    SetForegroundColor,
  },
};
use textutils_lib::{
  case_convention::CaseDirection,
  display::{
    DisplayMode,
    Rgb,
  },
  engine::TextEngine,
};

fn to_color(Rgb(r, g, b): Rgb) -> Color {
  Color::Rgb { r, g, b }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
  pub mode:   DisplayMode,
  pub styled: bool,
}

impl Renderer {
  pub fn new(mode: DisplayMode, styled: bool) -> Self {
    Self { mode, styled }
  }

  /// Write the document content, one terminal line per content line.
  pub fn content(&self, out: &mut impl Write, engine: &TextEngine) -> io::Result<()> {
    let content = engine.content();
    let content = content.strip_suffix('\n').unwrap_or(content);
    if !self.styled {
      return writeln!(out, "{content}");
    }

    let palette = self.mode.palette();
    for line in content.split('\n') {
      queue!(
        out,
        SetBackgroundColor(to_color(palette.background)),
        SetForegroundColor(to_color(palette.foreground)),
        Print(line),
        ResetColor,
        Print("\n")
      )?;
    }
    out.flush()
  }

  /// The "N words and M characters" line plus the toggle hint.
  pub fn summary(&self, out: &mut impl Write, engine: &TextEngine) -> io::Result<()> {
    let next = match engine.next_case_direction() {
      CaseDirection::Upper => "uppercase",
      CaseDirection::Lower => "lowercase",
    };
    writeln!(
      out,
      "{} words and {} characters (:case converts to {next})",
      engine.word_count(),
      engine.char_count()
    )
  }

  pub fn message(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{message}")
  }

  pub fn error(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
    if self.styled {
      queue!(
        out,
        SetForegroundColor(Color::Red),
        Print("error: "),
        ResetColor,
        Print(message),
        Print("\n")
      )?;
      out.flush()
    } else {
      writeln!(out, "error: {message}")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn render(f: impl FnOnce(&Renderer, &mut Vec<u8>) -> io::Result<()>, styled: bool) -> String {
    let renderer = Renderer::new(DisplayMode::Dark, styled);
    let mut out = Vec::new();
    f(&renderer, &mut out).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn plain_content() {
    let engine = TextEngine::with_text("two\nlines");
    assert_eq!(render(|r, out| r.content(out, &engine), false), "two\nlines\n");
  }

  #[test]
  fn trailing_newline_is_not_an_extra_line() {
    let engine = TextEngine::with_text("line\n");
    assert_eq!(render(|r, out| r.content(out, &engine), false), "line\n");

    let styled = render(|r, out| r.content(out, &engine), true);
    assert_eq!(styled.matches('\n').count(), 1);
    assert!(styled.contains("line"));
  }

  #[test]
  fn styled_content_keeps_text() {
    let engine = TextEngine::with_text("hello");
    let output = render(|r, out| r.content(out, &engine), true);
    assert!(output.contains("hello"));
    assert!(output.contains('\u{1b}'));
  }

  #[test]
  fn summary_line() {
    let mut engine = TextEngine::with_text("  Hello   world  ");
    assert_eq!(
      render(|r, out| r.summary(out, &engine), false),
      "2 words and 10 characters (:case converts to uppercase)\n"
    );
    engine.toggle_case();
    assert!(render(|r, out| r.summary(out, &engine), false).ends_with("to lowercase)\n"));
  }

  #[test]
  fn plain_error() {
    assert_eq!(render(|r, out| r.error(out, "boom"), false), "error: boom\n");
  }
}
