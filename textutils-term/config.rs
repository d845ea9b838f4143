use std::path::Path;

use serde::Deserialize;
use textutils_lib::{
  display::DisplayMode,
  engine::EngineConfig,
};
use textutils_runtime::clipboard::ClipboardProvider;
use thiserror::Error;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
  pub engine:    EngineConfig,
  pub ui:        UiConfig,
  pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct UiConfig {
  pub mode:    DisplayMode,
  /// Print the word/character summary after every command.
  pub summary: bool,
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      mode:    DisplayMode::default(),
      summary: true,
    }
  }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ClipboardConfig {
  pub provider: ClipboardProvider,
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
  #[error("bad config: {0}")]
  BadConfig(#[from] toml::de::Error),
  #[error(transparent)]
  Error(#[from] eyre::Report),
}

impl Config {
  /// Load `path` merged over the built-in defaults.
  pub fn load(path: &Path) -> Result<Config, ConfigLoadError> {
    let value = textutils_loader::config::user_config(path)?;
    Ok(value.try_into()?)
  }

  pub fn load_default() -> Result<Config, ConfigLoadError> {
    Self::load(&textutils_loader::config_file())
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use textutils_lib::replace::ReplaceMode;
  use textutils_runtime::clipboard::{
    CopyCommand,
    CustomProvider,
  };

  use super::*;

  fn load_str(contents: &str) -> Result<Config, ConfigLoadError> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    Config::load(file.path())
  }

  #[test]
  fn builtin_defaults_match_default_impl() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
  }

  #[test]
  fn parsing_keys() {
    let config = load_str(
      r#"
      [engine]
      history-limit = 50
      replace-mode = "regex"

      [ui]
      mode = "dark"
      summary = false

      [clipboard]
      provider = "none"
      "#,
    )
    .unwrap();

    assert_eq!(config, Config {
      engine:    EngineConfig {
        history_limit: 50,
        replace_mode:  ReplaceMode::Regex,
      },
      ui:        UiConfig {
        mode:    DisplayMode::Dark,
        summary: false,
      },
      clipboard: ClipboardConfig {
        provider: ClipboardProvider::None,
      },
    });
  }

  #[test]
  fn partial_file_keeps_other_defaults() {
    let config = load_str("[ui]\nmode = \"dark\"\n").unwrap();
    assert_eq!(config.ui.mode, DisplayMode::Dark);
    assert!(config.ui.summary);
    assert_eq!(config.engine, EngineConfig::default());
  }

  #[test]
  fn custom_clipboard_provider() {
    let config = load_str(
      r#"
      [clipboard.provider.custom.copy]
      command = "my-copy"
      "#,
    )
    .unwrap();
    assert_eq!(
      config.clipboard.provider,
      ClipboardProvider::Custom(CustomProvider {
        copy: CopyCommand {
          command: "my-copy".into(),
          args:    Vec::new(),
        },
      })
    );
  }

  #[test]
  fn unknown_keys_are_rejected() {
    let err = load_str("[ui]\ncolour = \"red\"\n").unwrap_err();
    assert!(matches!(err, ConfigLoadError::BadConfig(_)));
  }

  #[test]
  fn bad_values_are_rejected() {
    let err = load_str("[engine]\nreplace-mode = \"glob\"\n").unwrap_err();
    assert!(matches!(err, ConfigLoadError::BadConfig(_)));
  }

  #[test]
  fn malformed_toml_is_an_error() {
    let err = load_str("[engine\n").unwrap_err();
    assert!(matches!(err, ConfigLoadError::Error(_)));
  }
}
