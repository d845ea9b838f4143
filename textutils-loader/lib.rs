//! Filesystem locations and configuration loading shared by textutils hosts.

pub mod config;

use std::{
  path::{
    Path,
    PathBuf,
  },
  sync::OnceLock,
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};

const APP_NAME: &str = "textutils";

static CONFIG_FILE: OnceLock<PathBuf> = OnceLock::new();

static LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

pub fn initialize_config_file(specified_file: Option<PathBuf>) {
  let config_file = specified_file.unwrap_or_else(default_config_file);
  ensure_parent_dir(&config_file);
  CONFIG_FILE.set(config_file).ok();
}

pub fn initialize_log_file(specified_file: Option<PathBuf>) {
  let log_file = specified_file.unwrap_or_else(default_log_file);
  ensure_parent_dir(&log_file);
  LOG_FILE.set(log_file).ok();
}

/// User configuration directory.
///
/// `TEXTUTILS_CONFIG_DIR` takes precedence over the platform default.
pub fn config_dir() -> PathBuf {
  if let Some(dir) = std::env::var_os("TEXTUTILS_CONFIG_DIR") {
    return expand_tilde(Path::new(&dir));
  }
  match choose_base_strategy() {
    Ok(strategy) => strategy.config_dir().join(APP_NAME),
    Err(err) => {
      tracing::warn!(%err, "unable to find the config directory, using the temp dir");
      std::env::temp_dir().join(APP_NAME)
    },
  }
}

/// Cache directory, home of the log file.
///
/// `TEXTUTILS_CACHE_DIR` takes precedence over the platform default.
pub fn cache_dir() -> PathBuf {
  if let Some(dir) = std::env::var_os("TEXTUTILS_CACHE_DIR") {
    return expand_tilde(Path::new(&dir));
  }
  match choose_base_strategy() {
    Ok(strategy) => strategy.cache_dir().join(APP_NAME),
    Err(err) => {
      tracing::warn!(%err, "unable to find the cache directory, using the temp dir");
      std::env::temp_dir().join(APP_NAME)
    },
  }
}

pub fn config_file() -> PathBuf {
  CONFIG_FILE.get_or_init(default_config_file).clone()
}

pub fn log_file() -> PathBuf {
  LOG_FILE
    .get_or_init(|| {
      let path = default_log_file();
      ensure_parent_dir(&path);
      path
    })
    .clone()
}

pub fn default_log_file() -> PathBuf {
  cache_dir().join("textutils.log")
}

fn default_config_file() -> PathBuf {
  config_dir().join("config.toml")
}

/// Replace a leading `~` with the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  match path.strip_prefix("~") {
    Ok(rest) => match etcetera::home_dir() {
      Ok(home) => home.join(rest),
      Err(_) => path.to_path_buf(),
    },
    Err(_) => path.to_path_buf(),
  }
}

/// Merge two TOML documents, merging values from `right` onto `left`.
///
/// Tables present on both sides are merged key by key down to `merge_depth`
/// levels; below that, and for every other kind of value, `right` wins.
pub fn merge_toml_values(left: toml::Value, right: toml::Value, merge_depth: usize) -> toml::Value {
  use toml::Value;

  match (left, right) {
    (Value::Table(mut left_map), Value::Table(right_map)) if merge_depth > 0 => {
      for (key, rvalue) in right_map {
        let merged = match left_map.remove(&key) {
          Some(lvalue) => merge_toml_values(lvalue, rvalue, merge_depth - 1),
          None => rvalue,
        };
        left_map.insert(key, merged);
      }
      Value::Table(left_map)
    },
    (_, value) => value,
  }
}

fn ensure_parent_dir(path: &Path) {
  if let Some(parent) = path.parent()
    && !parent.exists()
  {
    std::fs::create_dir_all(parent).ok();
  }
}


#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  #[test]
  fn expand_tilde_leaves_plain_paths() {
    assert_eq!(expand_tilde(Path::new("/tmp/x")), PathBuf::from("/tmp/x"));
    assert_eq!(expand_tilde(Path::new("rel/~x")), PathBuf::from("rel/~x"));
  }

  #[test]
  fn expand_tilde_uses_home() {
    if let Ok(home) = etcetera::home_dir() {
      assert_eq!(expand_tilde(Path::new("~/notes")), home.join("notes"));
    }
  }
}
