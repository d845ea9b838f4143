//! Line-oriented shell around a [`TextEngine`].
//!
//! Lines starting with `:` are commands; any other non-empty line is typed
//! text and is added to the document as a new line. A leading `::` escapes
//! a literal colon.

use std::io::{
  BufRead,
  Write,
};

use eyre::{
  Result,
  WrapErr,
};
use textutils_lib::{
  clipboard::ClipboardProvider,
  command::{
    self,
    COMMANDS,
    Command,
    CommandError,
    Outcome,
  },
  display::DisplayMode,
  engine::TextEngine,
};

use crate::{
  config::Config,
  render::Renderer,
};

/// Commands handled by the shell itself rather than the engine.
const SHELL_COMMANDS: &[(&str, &str, &str)] = &[
  ("mode", "[light|dark]", "Toggle or set the display mode"),
  ("print", "", "Print the text"),
  ("help", "", "List commands"),
  ("quit", "", "Exit (alias: q)"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
  /// Typed text appended to the document.
  Text(String),
  Engine(Command),
  Mode(Option<DisplayMode>),
  Print,
  Help,
  Quit,
  Blank,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
  #[error(transparent)]
  Command(#[from] CommandError),
  #[error(transparent)]
  Mode(#[from] textutils_lib::display::ParseDisplayModeError),
}

impl Input {
  pub fn parse(line: &str) -> std::result::Result<Self, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
      return Ok(Self::Blank);
    }
    if let Some(escaped) = line.strip_prefix("::") {
      return Ok(Self::Text(format!(":{escaped}")));
    }
    let Some(command_line) = line.strip_prefix(':') else {
      return Ok(Self::Text(line.to_string()));
    };

    let (name, rest) = command::split(command_line);
    let input = match name {
      "mode" => match rest.trim() {
        "" => Self::Mode(None),
        mode => Self::Mode(Some(mode.parse()?)),
      },
      "print" => Self::Print,
      "help" => Self::Help,
      "quit" | "q" => Self::Quit,
      _ => Self::Engine(Command::parse(command_line)?),
    };
    Ok(input)
  }
}

pub struct Application {
  engine:       TextEngine,
  renderer:     Renderer,
  show_summary: bool,
  clipboard:    Box<dyn ClipboardProvider>,
  should_quit:  bool,
}

impl Application {
  pub fn new(
    config: &Config,
    initial_text: String,
    clipboard: Box<dyn ClipboardProvider>,
    styled: bool,
  ) -> Self {
    let mut engine = TextEngine::with_config(&config.engine);
    engine.set_content(initial_text);
    Self {
      engine,
      renderer: Renderer::new(config.ui.mode, styled),
      show_summary: config.ui.summary,
      clipboard,
      should_quit: false,
    }
  }

  pub fn engine(&self) -> &TextEngine {
    &self.engine
  }

  pub fn mode(&self) -> DisplayMode {
    self.renderer.mode
  }

  pub fn should_quit(&self) -> bool {
    self.should_quit
  }

  /// Interactive loop: prompt, read a line, handle it, until EOF or `:quit`.
  pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
    log::info!(
      "starting shell with {} chars, clipboard: {}",
      self.engine.content().len(),
      self.clipboard.name()
    );
    writeln!(out, "textutils: type text, or :help for commands")?;
    if !self.engine.content().is_empty() {
      self.renderer.content(&mut out, &self.engine)?;
    }
    if self.show_summary {
      self.renderer.summary(&mut out, &self.engine)?;
    }

    let mut lines = input.lines();
    loop {
      write!(out, "> ")?;
      out.flush()?;

      let Some(line) = lines.next() else {
        writeln!(out)?;
        break;
      };
      let line = line.wrap_err("failed to read input")?;
      self.handle_line(&line, &mut out)?;
      if self.should_quit {
        break;
      }
    }

    log::info!("shell finished");
    Ok(())
  }

  /// Run `commands` in order, then print the final content to `out`.
  ///
  /// `out` receives nothing but the content; anything the commands print on
  /// their own (mode changes, `:print`, `:help`) goes to `messages`. Stops at
  /// the first command that fails.
  pub fn run_script(
    &mut self,
    commands: &[String],
    mut out: impl Write,
    mut messages: impl Write,
  ) -> Result<()> {
    for (idx, line) in commands.iter().enumerate() {
      let input = if line.starts_with(':') {
        Input::parse(line)
      } else {
        Input::parse(&format!(":{line}"))
      };
      let input = input
        .wrap_err_with(|| format!("command {} ('{line}') is invalid", idx + 1))?;
      self
        .apply(input, &mut messages)
        .wrap_err_with(|| format!("command {} ('{line}') failed", idx + 1))?;
      if self.should_quit {
        break;
      }
    }

    write!(out, "{}", self.engine.content())?;
    if !self.engine.content().ends_with('\n') {
      writeln!(out)?;
    }
    Ok(())
  }

  /// Handle one line of interactive input. User errors are printed and do
  /// not end the session; only output failures are returned.
  pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<()> {
    let input = match Input::parse(line) {
      Ok(input) => input,
      Err(err) => {
        log::debug!("rejected input {line:?}: {err}");
        self.renderer.error(out, &err.to_string())?;
        return Ok(());
      },
    };

    let refresh = matches!(input, Input::Text(_) | Input::Engine(_));
    match self.apply(input, out) {
      Ok(Some(outcome)) => {
        let message = outcome.to_string();
        if !message.is_empty() {
          self.renderer.message(out, &message)?;
        }
        if refresh && outcome != Outcome::Copied {
          self.renderer.content(out, &self.engine)?;
        }
        if refresh && self.show_summary {
          self.renderer.summary(out, &self.engine)?;
        }
      },
      Ok(None) => {},
      Err(err) => {
        log::warn!("command failed: {err:#}");
        self.renderer.error(out, &format!("{err:#}"))?;
      },
    }
    Ok(())
  }

  fn apply(&mut self, input: Input, out: &mut impl Write) -> Result<Option<Outcome>> {
    let outcome = match input {
      Input::Blank => None,
      Input::Text(text) => {
        Some(Command::Append(text).execute(&mut self.engine, self.clipboard.as_ref())?)
      },
      Input::Engine(command) => {
        log::debug!("executing {command:?}");
        Some(command.execute(&mut self.engine, self.clipboard.as_ref())?)
      },
      Input::Mode(mode) => {
        let mode = mode.unwrap_or(self.renderer.mode.toggle());
        self.renderer.mode = mode;
        log::info!("display mode set to {mode}");
        self.renderer.message(out, &format!("display mode: {mode}"))?;
        None
      },
      Input::Print => {
        self.renderer.content(out, &self.engine)?;
        self.renderer.summary(out, &self.engine)?;
        None
      },
      Input::Help => {
        write_help(out)?;
        None
      },
      Input::Quit => {
        self.should_quit = true;
        None
      },
    };
    Ok(outcome)
  }
}

fn write_help(out: &mut impl Write) -> std::io::Result<()> {
  writeln!(out, "Type text to add it as a new line. Commands:")?;
  for spec in COMMANDS {
    let name = match spec.usage {
      "" => spec.name.to_string(),
      usage => format!("{} {usage}", spec.name),
    };
    let aliases = if spec.aliases.is_empty() {
      String::new()
    } else {
      format!(" (alias: {})", spec.aliases.join(", "))
    };
    writeln!(out, "  :{name:<22}{}{aliases}", spec.doc)?;
  }
  for (name, usage, doc) in SHELL_COMMANDS {
    let name = match *usage {
      "" => name.to_string(),
      usage => format!("{name} {usage}"),
    };
    writeln!(out, "  :{name:<22}{doc}")?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use textutils_lib::{
    clipboard::{
      MemoryClipboard,
      NoClipboard,
    },
    replace::ReplacePair,
  };

  use super::*;
  use crate::config::UiConfig;

  fn app(initial: &str) -> Application {
    let config = Config {
      ui: UiConfig {
        summary: false,
        ..UiConfig::default()
      },
      ..Config::default()
    };
    Application::new(&config, initial.to_string(), Box::new(NoClipboard), false)
  }

  fn feed(app: &mut Application, lines: &[&str]) -> String {
    let mut out = Vec::new();
    for line in lines {
      app.handle_line(line, &mut out).unwrap();
    }
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn parses_inputs() {
    assert_eq!(Input::parse(""), Ok(Input::Blank));
    assert_eq!(Input::parse("hello"), Ok(Input::Text("hello".into())));
    assert_eq!(Input::parse("::not a command"), Ok(Input::Text(":not a command".into())));
    assert_eq!(Input::parse(":q"), Ok(Input::Quit));
    assert_eq!(Input::parse(":mode"), Ok(Input::Mode(None)));
    assert_eq!(Input::parse(":mode dark"), Ok(Input::Mode(Some(DisplayMode::Dark))));
    assert_eq!(
      Input::parse(":replace a b\r\n"),
      Ok(Input::Engine(Command::Replace(ReplacePair::new("a", "b"))))
    );
    assert!(matches!(Input::parse(":mode sepia"), Err(InputError::Mode(_))));
    assert!(matches!(Input::parse(":nope"), Err(InputError::Command(_))));
  }

  #[test]
  fn typed_lines_build_the_document() {
    let mut app = app("");
    feed(&mut app, &["first line", "second line"]);
    assert_eq!(app.engine().content(), "first line\nsecond line");
    assert_eq!(app.engine().word_count(), 4);
  }

  #[test]
  fn typed_lines_are_undoable() {
    let mut app = app("start");
    feed(&mut app, &["more", ":undo"]);
    assert_eq!(app.engine().content(), "start");
  }

  #[test]
  fn transforms_print_new_content() {
    let mut app = app("cat sat");
    let output = feed(&mut app, &[":replace cat dog"]);
    assert_eq!(output, "replaced 1 occurrence\ndog sat\n");
  }

  #[test]
  fn errors_do_not_end_the_session() {
    let mut app = app("text");
    let output = feed(&mut app, &[":frobnicate", ":upper"]);
    assert!(output.starts_with("error: unknown command 'frobnicate'\n"));
    assert_eq!(app.engine().content(), "TEXT");
    assert!(!app.should_quit());
  }

  #[test]
  fn copy_without_clipboard_reports_error() {
    let mut app = app("text");
    let output = feed(&mut app, &[":copy"]);
    assert!(output.starts_with("error: no clipboard provider is available"));
  }

  #[test]
  fn copy_with_clipboard() {
    let config = Config::default();
    let clipboard = std::sync::Arc::new(MemoryClipboard::new());
    let mut app = Application::new(
      &config,
      "copy me".into(),
      Box::new(SharedClipboard(clipboard.clone())),
      false,
    );
    let output = feed(&mut app, &[":copy"]);
    assert!(output.starts_with("copied to clipboard\n"));
    assert_eq!(clipboard.contents().as_deref(), Some("copy me"));
  }

  struct SharedClipboard(std::sync::Arc<MemoryClipboard>);

  impl ClipboardProvider for SharedClipboard {
    fn name(&self) -> std::borrow::Cow<'_, str> {
      self.0.name()
    }

    fn set_contents(&self, content: &str) -> textutils_lib::clipboard::Result<()> {
      self.0.set_contents(content)
    }
  }

  #[test]
  fn mode_toggles_and_sets() {
    let mut app = app("");
    assert_eq!(app.mode(), DisplayMode::Light);
    let output = feed(&mut app, &[":mode"]);
    assert_eq!(output, "display mode: dark\n");
    feed(&mut app, &[":mode light"]);
    assert_eq!(app.mode(), DisplayMode::Light);
    assert_eq!(app.engine().content(), "");
  }

  #[test]
  fn run_stops_at_quit() {
    let mut app = app("");
    let input = Cursor::new("hello\n:quit\nignored\n");
    let mut out = Vec::new();
    app.run(input, &mut out).unwrap();
    assert!(app.should_quit());
    assert_eq!(app.engine().content(), "hello");
  }

  #[test]
  fn run_ends_at_eof() {
    let mut app = app("");
    let mut out = Vec::new();
    app.run(Cursor::new("a\n:upper\n"), &mut out).unwrap();
    assert_eq!(app.engine().content(), "A");
    assert!(!app.should_quit());
  }

  #[test]
  fn script_mode_prints_result() {
    let mut app = app("  Hello   world  ");
    let mut out = Vec::new();
    let commands = vec!["trim-spaces".to_string(), ":upper".to_string()];
    app.run_script(&commands, &mut out, Vec::new()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "HELLO WORLD\n");
  }

  #[test]
  fn script_output_is_only_the_content() {
    let mut app = app("abc");
    let mut out = Vec::new();
    let mut messages = Vec::new();
    let commands = vec!["mode dark".to_string(), "print".to_string(), "upper".to_string()];
    app.run_script(&commands, &mut out, &mut messages).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "ABC\n");

    let messages = String::from_utf8(messages).unwrap();
    assert!(messages.starts_with("display mode: dark\nabc\n"));
    assert_eq!(app.mode(), DisplayMode::Dark);
  }

  #[test]
  fn script_mode_fails_on_bad_command() {
    let mut app = app("x");
    let commands = vec!["reverse".to_string(), "bogus".to_string()];
    let err = app.run_script(&commands, Vec::new(), Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("command 2 ('bogus')"));
  }

  #[test]
  fn help_lists_every_command() {
    let mut app = app("");
    let output = feed(&mut app, &[":help"]);
    for spec in COMMANDS {
      assert!(output.contains(&format!(":{}", spec.name)), "{}", spec.name);
    }
    assert!(output.contains(":quit"));
  }
}
