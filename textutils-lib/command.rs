//! Command types used by front ends to drive a [`TextEngine`].
//!
//! A command line is `name args...`. The name is looked up in [`COMMANDS`]
//! (aliases included); the arguments are tokenized by [`split_args`]:
//!
//! | Syntax | Behavior |
//! |--------|----------|
//! | `foo` | Unquoted, split on whitespace |
//! | `'foo bar'` | Single-quoted, one argument |
//! | `"foo bar"` | Double-quoted, one argument |
//! | `''` | Empty argument |
//!
//! Quotes are escaped by doubling: `'it''s'` becomes `it's`.
//!
//! `set` and `append` take the rest of the line verbatim instead.

use std::fmt;

use thiserror::Error;

use crate::{
  Tendril,
  case_convention::CaseDirection,
  clipboard::ClipboardProvider,
  engine::{
    Result as EngineResult,
    TextEngine,
  },
  replace::ReplacePair,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
  #[error("unterminated {0} quote")]
  UnterminatedQuote(char),
  #[error("unknown command '{0}'")]
  Unknown(Tendril),
  #[error("'{name}' takes {expected}, got {got}")]
  ArgCount {
    name:     &'static str,
    expected: &'static str,
    got:      usize,
  },
}

pub type Result<T> = std::result::Result<T, CommandError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Clear,
  Undo,
  ToggleCase,
  Upper,
  Lower,
  Capitalize,
  Reverse,
  RemoveExtraSpaces,
  Replace(ReplacePair),
  Copy,
  /// Replace the whole content as an undoable edit.
  Set(String),
  /// Add a line to the end of the content as an undoable edit.
  Append(String),
}

/// How a command takes its arguments, paired with the constructor that
/// builds it.
#[derive(Debug, Clone, Copy)]
pub enum Signature {
  /// No arguments.
  Bare(fn() -> Command),
  /// Exactly two quoted-or-bare arguments.
  Pair(fn(ReplacePair) -> Command),
  /// The rest of the line, verbatim.
  Rest(fn(String) -> Command),
}

/// Static description of a command, used for lookup, parsing and help output.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
  pub name:      &'static str,
  pub aliases:   &'static [&'static str],
  pub usage:     &'static str,
  pub doc:       &'static str,
  pub signature: Signature,
}

impl CommandSpec {
  pub fn matches(&self, name: &str) -> bool {
    self.name == name || self.aliases.contains(&name)
  }
}

pub const COMMANDS: &[CommandSpec] = &[
  CommandSpec {
    name:      "clear",
    aliases:   &[],
    usage:     "",
    doc:       "Clear the text",
    signature: Signature::Bare(|| Command::Clear),
  },
  CommandSpec {
    name:      "undo",
    aliases:   &["u"],
    usage:     "",
    doc:       "Restore the text as it was before the last change",
    signature: Signature::Bare(|| Command::Undo),
  },
  CommandSpec {
    name:      "toggle-case",
    aliases:   &["case"],
    usage:     "",
    doc:       "Alternate between converting to uppercase and lowercase",
    signature: Signature::Bare(|| Command::ToggleCase),
  },
  CommandSpec {
    name:      "upper",
    aliases:   &[],
    usage:     "",
    doc:       "Convert to uppercase",
    signature: Signature::Bare(|| Command::Upper),
  },
  CommandSpec {
    name:      "lower",
    aliases:   &[],
    usage:     "",
    doc:       "Convert to lowercase",
    signature: Signature::Bare(|| Command::Lower),
  },
  CommandSpec {
    name:      "capitalize",
    aliases:   &[],
    usage:     "",
    doc:       "Capitalize the first letter of every word",
    signature: Signature::Bare(|| Command::Capitalize),
  },
  CommandSpec {
    name:      "reverse",
    aliases:   &[],
    usage:     "",
    doc:       "Reverse the text",
    signature: Signature::Bare(|| Command::Reverse),
  },
  CommandSpec {
    name:      "trim-spaces",
    aliases:   &["remove-extra-spaces"],
    usage:     "",
    doc:       "Collapse runs of whitespace and trim both ends",
    signature: Signature::Bare(|| Command::RemoveExtraSpaces),
  },
  CommandSpec {
    name:      "replace",
    aliases:   &[],
    usage:     "OLD NEW",
    doc:       "Replace every occurrence of OLD with NEW",
    signature: Signature::Pair(Command::Replace),
  },
  CommandSpec {
    name:      "copy",
    aliases:   &[],
    usage:     "",
    doc:       "Copy the text to the system clipboard",
    signature: Signature::Bare(|| Command::Copy),
  },
  CommandSpec {
    name:      "set",
    aliases:   &[],
    usage:     "TEXT",
    doc:       "Replace the text with TEXT",
    signature: Signature::Rest(Command::Set),
  },
  CommandSpec {
    name:      "append",
    aliases:   &[],
    usage:     "TEXT",
    doc:       "Add TEXT as a new line at the end",
    signature: Signature::Rest(Command::Append),
  },
];

/// Look up a command spec by name or alias.
pub fn find(name: &str) -> Option<&'static CommandSpec> {
  COMMANDS.iter().find(|spec| spec.matches(name))
}

/// Split a command line into the command name and the rest of the line.
///
/// Leading whitespace is skipped, and exactly one separator is dropped after
/// the name so that `set  x` keeps the extra leading space of its argument.
pub fn split(line: &str) -> (&str, &str) {
  let line = line.trim_start();
  match line.find(char::is_whitespace) {
    Some(end) => {
      let (name, rest) = line.split_at(end);
      let mut chars = rest.chars();
      chars.next();
      (name, chars.as_str())
    },
    None => (line, ""),
  }
}

/// Tokenize arguments per the quoting rules in the module docs.
pub fn split_args(input: &str) -> Result<Vec<Tendril>> {
  let mut args = Vec::new();
  let mut chars = input.chars().peekable();

  while let Some(&c) = chars.peek() {
    if c.is_whitespace() {
      chars.next();
      continue;
    }

    let mut arg = Tendril::new();
    if c == '\'' || c == '"' {
      let quote = c;
      chars.next();
      loop {
        match chars.next() {
          Some(ch) if ch == quote => {
            if chars.peek() == Some(&quote) {
              chars.next();
              arg.push(quote);
            } else {
              break;
            }
          },
          Some(ch) => arg.push(ch),
          None => return Err(CommandError::UnterminatedQuote(quote)),
        }
      }
    } else {
      while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
          break;
        }
        arg.push(ch);
        chars.next();
      }
    }
    args.push(arg);
  }

  Ok(args)
}

impl Command {
  /// Parse a command line without its leading `:`.
  pub fn parse(line: &str) -> Result<Self> {
    let (name, rest) = split(line);
    let Some(spec) = find(name) else {
      return Err(CommandError::Unknown(name.into()));
    };

    let command = match spec.signature {
      Signature::Rest(build) => build(rest.to_string()),
      Signature::Pair(build) => {
        let mut args = split_args(rest)?;
        if args.len() != 2 {
          return Err(CommandError::ArgCount {
            name:     spec.name,
            expected: "2 arguments",
            got:      args.len(),
          });
        }
        let new = args.pop().unwrap_or_default();
        let old = args.pop().unwrap_or_default();
        build(ReplacePair { old, new })
      },
      Signature::Bare(build) => {
        let args = split_args(rest)?;
        if !args.is_empty() {
          return Err(CommandError::ArgCount {
            name:     spec.name,
            expected: "no arguments",
            got:      args.len(),
          });
        }
        build()
      },
    };
    Ok(command)
  }

  pub fn execute(
    &self,
    engine: &mut TextEngine,
    clipboard: &dyn ClipboardProvider,
  ) -> EngineResult<Outcome> {
    let outcome = match self {
      Self::Clear => {
        engine.clear();
        Outcome::Applied
      },
      Self::Undo => {
        if engine.undo() {
          Outcome::Applied
        } else {
          Outcome::NothingToUndo
        }
      },
      Self::ToggleCase => {
        engine.toggle_case();
        Outcome::Applied
      },
      Self::Upper => {
        engine.convert_case(CaseDirection::Upper);
        Outcome::Applied
      },
      Self::Lower => {
        engine.convert_case(CaseDirection::Lower);
        Outcome::Applied
      },
      Self::Capitalize => {
        engine.capitalize_words();
        Outcome::Applied
      },
      Self::Reverse => {
        engine.reverse();
        Outcome::Applied
      },
      Self::RemoveExtraSpaces => {
        engine.remove_extra_spaces();
        Outcome::Applied
      },
      Self::Replace(pair) => Outcome::Replaced(engine.replace_pair(pair)?),
      Self::Copy => {
        engine.copy(clipboard)?;
        Outcome::Copied
      },
      Self::Set(text) => {
        engine.edit(text.as_str());
        Outcome::Applied
      },
      Self::Append(text) => {
        let next = if engine.content().is_empty() {
          text.clone()
        } else {
          format!("{}\n{}", engine.content(), text)
        };
        engine.edit(next);
        Outcome::Applied
      },
    };
    Ok(outcome)
  }
}

/// What happened when a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Applied,
  Replaced(usize),
  NothingToUndo,
  Copied,
}

impl fmt::Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Applied => Ok(()),
      Self::Replaced(1) => write!(f, "replaced 1 occurrence"),
      Self::Replaced(n) => write!(f, "replaced {n} occurrences"),
      Self::NothingToUndo => write!(f, "nothing to undo"),
      Self::Copied => write!(f, "copied to clipboard"),
    }
  }
}
