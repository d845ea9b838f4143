use std::io::{
  self,
  IsTerminal,
  Write,
};

use crossterm::style::Stylize;
use textutils_lib::clipboard::ClipboardProvider as _;

use crate::config::Config;

/// Print where configuration and logs live and which clipboard is in use.
pub fn print_health() -> io::Result<()> {
  let stdout = io::stdout();
  let styled = stdout.is_terminal();
  let mut stdout = stdout.lock();
  general(&mut stdout)?;
  clipboard(&mut stdout, styled)
}

fn general(out: &mut impl Write) -> io::Result<()> {
  let config_file = textutils_loader::config_file();
  let log_file = textutils_loader::log_file();

  writeln!(out, "Config file: {}", config_file.display())?;
  if !config_file.exists() {
    writeln!(out, "    (not present, using defaults)")?;
  }
  writeln!(out, "Log file: {}", log_file.display())
}

fn clipboard(out: &mut impl Write, styled: bool) -> io::Result<()> {
  let config = match Config::load_default() {
    Ok(config) => config,
    Err(err) => {
      let msg = "Configuration file malformed";
      if styled {
        writeln!(out, "{}", msg.red())?;
      } else {
        writeln!(out, "{msg}")?;
      }
      writeln!(out, "{err}")?;
      return Ok(());
    },
  };

  let provider = config.clipboard.provider.resolve();
  match provider.name().as_ref() {
    "none" => {
      let msg = "System clipboard provider: Not installed";
      if styled {
        writeln!(out, "{}", msg.red())
      } else {
        writeln!(out, "{msg}")
      }
    },
    name => writeln!(out, "System clipboard provider: {name}"),
  }
}
