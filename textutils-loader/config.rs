use std::{
  path::Path,
  str::from_utf8,
};

use eyre::{
  Result,
  WrapErr,
};

/// Default built-in config.toml.
pub fn default_config() -> Result<toml::Value> {
  let default_config = include_bytes!("config.toml");
  let config_str =
    from_utf8(default_config).wrap_err("built-in config.toml contains invalid UTF-8")?;
  toml::from_str(config_str).wrap_err("failed to parse built-in config.toml")
}

/// User config file merged over the built-in defaults.
///
/// A missing file yields the defaults unchanged; a file that exists but
/// cannot be read or parsed is an error.
pub fn user_config(path: &Path) -> Result<toml::Value> {
  let default = default_config()?;

  let text = match std::fs::read_to_string(path) {
    Ok(text) => text,
    Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
      tracing::debug!(path = %path.display(), "no user config, using defaults");
      return Ok(default);
    },
    Err(err) => {
      return Err(err).wrap_err_with(|| format!("failed to read {}", path.display()));
    },
  };

  let user: toml::Value =
    toml::from_str(&text).wrap_err_with(|| format!("failed to parse {}", path.display()))?;
  Ok(crate::merge_toml_values(default, user, 3))
}
