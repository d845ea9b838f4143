use std::path::{
  Path,
  PathBuf,
};

use clap::{
  ArgAction,
  Parser,
  ValueEnum,
};
use eyre::Result;
use textutils_lib::display::DisplayMode;

#[derive(Clone, Debug)]
pub struct CliOptions {
  pub health:      bool,
  pub verbosity:   u8,
  pub log_file:    Option<PathBuf>,
  pub config_file: Option<PathBuf>,
  pub mode:        Option<DisplayMode>,
  /// Commands to run non-interactively; empty means start the shell.
  pub exec:        Vec<String>,
  pub file:        Option<PathBuf>,
}

impl CliOptions {
  pub fn parse() -> Result<Self> {
    let raw = RawCli::parse();
    raw.try_into()
  }

  pub fn is_script(&self) -> bool {
    !self.exec.is_empty()
  }
}

#[derive(Parser, Debug)]
#[command(name = "textutils", version, about, long_about = None)]
struct RawCli {
  /// Print config paths and the detected clipboard provider
  #[arg(long = "health")]
  health: bool,

  /// Increase logging verbosity (repeat for more detail)
  #[arg(short = 'v', action = ArgAction::Count)]
  verbosity: u8,

  /// Save logs to a specific file
  #[arg(long = "log", value_name = "FILE", value_parser = parse_pathbuf)]
  log_file: Option<PathBuf>,

  /// Load configuration from a specific file
  #[arg(short = 'c', long = "config", value_name = "FILE", value_parser = parse_pathbuf)]
  config_file: Option<PathBuf>,

  /// Override the configured display mode
  #[arg(long = "mode", value_enum, value_name = "MODE")]
  mode: Option<ModeArg>,

  /// Run a command against the input and print the result (repeatable)
  #[arg(short = 'e', long = "exec", value_name = "CMD")]
  exec: Vec<String>,

  /// File to load as the initial text
  #[arg(value_name = "FILE")]
  file: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModeArg {
  Light,
  Dark,
}

impl From<ModeArg> for DisplayMode {
  fn from(mode: ModeArg) -> Self {
    match mode {
      ModeArg::Light => DisplayMode::Light,
      ModeArg::Dark => DisplayMode::Dark,
    }
  }
}

impl TryFrom<RawCli> for CliOptions {
  type Error = eyre::Report;

  fn try_from(raw: RawCli) -> Result<Self> {
    if let Some(file) = &raw.file
      && file.is_dir()
    {
      eyre::bail!("'{}' is a directory", file.display());
    }

    Ok(Self {
      health:      raw.health,
      verbosity:   raw.verbosity,
      log_file:    raw.log_file,
      config_file: raw.config_file,
      mode:        raw.mode.map(DisplayMode::from),
      exec:        raw.exec,
      file:        raw.file,
    })
  }
}

fn parse_pathbuf(value: &str) -> std::result::Result<PathBuf, String> {
  Ok(textutils_loader::expand_tilde(Path::new(value)))
}
