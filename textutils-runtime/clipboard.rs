//! Clipboard provider implementations for runtime hosts.
//!
//! Providers shell out to the platform's copy utility and pipe the content to
//! its stdin. The provider is chosen in config; `auto` detects one from the
//! environment the first time it is used.

use std::{
  borrow::Cow,
  io::Write,
  process::{
    Command,
    Stdio,
  },
};

use serde::{
  Deserialize,
  Serialize,
};
use textutils_lib::clipboard::{
  ClipboardError,
  ClipboardProvider as ClipboardBackend,
  Result,
};

use crate::env::{
  binary_exists,
  env_var_is_set,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CopyCommand {
  pub command: String,
  #[serde(default)]
  pub args:    Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CustomProvider {
  pub copy: CopyCommand,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ClipboardProvider {
  #[default]
  Auto,
  Pasteboard,
  Wayland,
  XClip,
  XSel,
  Win32Yank,
  Tmux,
  Termux,
  Custom(CustomProvider),
  None,
}

impl ClipboardProvider {
  /// Pick a provider from the binaries and display servers available.
  #[cfg(target_os = "macos")]
  pub fn detect() -> Self {
    if env_var_is_set("TMUX") && binary_exists("tmux") {
      Self::Tmux
    } else if binary_exists("pbcopy") {
      Self::Pasteboard
    } else {
      Self::None
    }
  }

  /// Pick a provider from the binaries and display servers available.
  #[cfg(windows)]
  pub fn detect() -> Self {
    if binary_exists("win32yank.exe") {
      Self::Win32Yank
    } else {
      Self::None
    }
  }

  /// Pick a provider from the binaries and display servers available.
  #[cfg(not(any(windows, target_os = "macos")))]
  pub fn detect() -> Self {
    if env_var_is_set("WAYLAND_DISPLAY") && binary_exists("wl-copy") {
      Self::Wayland
    } else if env_var_is_set("DISPLAY") && binary_exists("xclip") {
      Self::XClip
    } else if env_var_is_set("DISPLAY") && binary_exists("xsel") {
      Self::XSel
    } else if binary_exists("termux-clipboard-set") {
      Self::Termux
    } else if env_var_is_set("TMUX") && binary_exists("tmux") {
      Self::Tmux
    } else if binary_exists("win32yank.exe") {
      Self::Win32Yank
    } else {
      Self::None
    }
  }

  /// Replace `Auto` with the detected provider; any other value is kept.
  pub fn resolve(self) -> Self {
    match self {
      Self::Auto => {
        let detected = Self::detect();
        tracing::debug!(provider = %detected.name(), "detected clipboard provider");
        detected
      },
      other => other,
    }
  }

  fn builtin_command(&self) -> Option<(&'static str, &'static [&'static str])> {
    let command: (&'static str, &'static [&'static str]) = match self {
      Self::Pasteboard => ("pbcopy", &[]),
      Self::Wayland => ("wl-copy", &["--type", "text/plain"]),
      Self::XClip => ("xclip", &["-i", "-selection", "clipboard"]),
      Self::XSel => ("xsel", &["-i", "-b"]),
      Self::Win32Yank => ("win32yank.exe", &["-i", "--crlf"]),
      Self::Tmux => ("tmux", &["load-buffer", "-w", "-"]),
      Self::Termux => ("termux-clipboard-set", &[]),
      Self::Auto | Self::Custom(_) | Self::None => return None,
    };
    Some(command)
  }

  fn label(&self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Pasteboard => "pasteboard",
      Self::Wayland => "wayland",
      Self::XClip => "x-clip",
      Self::XSel => "x-sel",
      Self::Win32Yank => "win32-yank",
      Self::Tmux => "tmux",
      Self::Termux => "termux",
      Self::Custom(_) => "custom",
      Self::None => "none",
    }
  }
}

impl ClipboardBackend for ClipboardProvider {
  fn name(&self) -> Cow<'_, str> {
    match self {
      Self::Custom(custom) => Cow::Owned(format!("custom ({})", custom.copy.command)),
      Self::Auto | Self::None => self.label().into(),
      builtin => match builtin.builtin_command() {
        Some((program, _)) => Cow::Owned(format!("{} ({program})", builtin.label())),
        None => builtin.label().into(),
      },
    }
  }

  fn set_contents(&self, content: &str) -> Result<()> {
    match self {
      Self::Auto => self.clone().resolve().set_contents(content),
      Self::None => Err(ClipboardError::Unavailable),
      Self::Custom(custom) => {
        let args: Vec<&str> = custom.copy.args.iter().map(String::as_str).collect();
        pipe_to_command(&custom.copy.command, &args, content)
      },
      builtin => match builtin.builtin_command() {
        Some((program, args)) => pipe_to_command(program, args, content),
        None => Err(ClipboardError::Unavailable),
      },
    }
  }
}

fn pipe_to_command(program: &str, args: &[&str], input: &str) -> Result<()> {
  let mut child = Command::new(program)
    .args(args)
    .stdin(Stdio::piped())
    .stdout(Stdio::null())
    .stderr(Stdio::null())
    .spawn()?;

  {
    let mut stdin = child.stdin.take().ok_or(ClipboardError::StdinWriteFailed)?;
    stdin
      .write_all(input.as_bytes())
      .map_err(|_| ClipboardError::StdinWriteFailed)?;
  }

  let status = child.wait()?;
  if !status.success() {
    tracing::warn!(program, ?status, "clipboard command failed");
    return Err(ClipboardError::CommandFailed(program.to_string()));
  }
  Ok(())
}
