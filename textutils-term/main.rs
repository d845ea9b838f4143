mod application;
mod cli;
mod config;
mod health;
mod render;

use std::io::{
  self,
  IsTerminal,
  Read,
};

use eyre::{
  Result,
  WrapErr,
};
use textutils_lib::clipboard::ClipboardProvider;

use crate::{
  application::Application,
  cli::CliOptions,
  config::Config,
};

fn setup_logging(verbosity: u8) -> Result<()> {
  let mut base_config = fern::Dispatch::new();

  base_config = match verbosity {
    0 => base_config.level(log::LevelFilter::Warn),
    1 => base_config.level(log::LevelFilter::Info),
    2 => base_config.level(log::LevelFilter::Debug),
    _ => base_config.level(log::LevelFilter::Trace),
  };

  let file_config = fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.target(),
        record.level(),
        message
      ))
    })
    .chain(fern::log_file(textutils_loader::log_file())?);

  base_config.chain(file_config).apply()?;

  Ok(())
}

fn main() -> Result<()> {
  let args = CliOptions::parse()?;

  textutils_loader::initialize_config_file(args.config_file.clone());
  textutils_loader::initialize_log_file(args.log_file.clone());

  if args.health {
    health::print_health()?;
    return Ok(());
  }

  setup_logging(args.verbosity).wrap_err("failed to initialize logging")?;

  let mut config = match Config::load_default() {
    Ok(config) => config,
    Err(err) => {
      eprintln!("Bad config: {err:#}");
      eprintln!("Using default configuration");
      log::warn!("bad config, falling back to defaults: {err:#}");
      Config::default()
    },
  };
  if let Some(mode) = args.mode {
    config.ui.mode = mode;
  }

  let initial_text = read_initial_text(&args)?;

  let clipboard = config.clipboard.provider.clone().resolve();
  log::info!("using clipboard provider {}", clipboard.name());

  let stdout = io::stdout();
  let styled = stdout.is_terminal() && !args.is_script();
  let mut app = Application::new(&config, initial_text, Box::new(clipboard), styled);

  if args.is_script() {
    app.run_script(&args.exec, stdout.lock(), io::stderr().lock())
  } else {
    app.run(io::stdin().lock(), stdout.lock())
  }
}

/// The FILE argument, or piped stdin in script mode.
fn read_initial_text(args: &CliOptions) -> Result<String> {
  if let Some(path) = &args.file {
    return std::fs::read_to_string(path)
      .wrap_err_with(|| format!("failed to read {}", path.display()));
  }

  let stdin = io::stdin();
  if args.is_script() && !stdin.is_terminal() {
    let mut text = String::new();
    stdin
      .lock()
      .read_to_string(&mut text)
      .wrap_err("failed to read stdin")?;
    return Ok(text);
  }

  Ok(String::new())
}
