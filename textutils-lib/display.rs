//! Light/dark display mode.
//!
//! The mode is presentation configuration only. It is handed to whatever
//! renders the document and never reaches [`crate::engine::TextEngine`].

use std::{
  fmt,
  str::FromStr,
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
  #[default]
  Light,
  Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors used for the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
  pub background: Rgb,
  pub foreground: Rgb,
}

impl DisplayMode {
  pub fn toggle(self) -> Self {
    match self {
      Self::Light => Self::Dark,
      Self::Dark => Self::Light,
    }
  }

  pub fn palette(self) -> Palette {
    match self {
      Self::Light => Palette {
        background: Rgb(0xff, 0xff, 0xff),
        foreground: Rgb(0x00, 0x00, 0x00),
      },
      Self::Dark => Palette {
        background: Rgb(0x33, 0x33, 0x33),
        foreground: Rgb(0xcc, 0xcc, 0xcc),
      },
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Light => "light",
      Self::Dark => "dark",
    }
  }
}

impl fmt::Display for DisplayMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown display mode '{0}' (expected light or dark)")]
pub struct ParseDisplayModeError(pub String);

impl FromStr for DisplayMode {
  type Err = ParseDisplayModeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "light" => Ok(Self::Light),
      "dark" => Ok(Self::Dark),
      _ => Err(ParseDisplayModeError(s.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn toggles_back_and_forth() {
    assert_eq!(DisplayMode::default(), DisplayMode::Light);
    assert_eq!(DisplayMode::Light.toggle(), DisplayMode::Dark);
    assert_eq!(DisplayMode::Dark.toggle(), DisplayMode::Light);
  }

  #[test]
  fn parses_names() {
    assert_eq!("dark".parse(), Ok(DisplayMode::Dark));
    assert_eq!(" Light ".parse(), Ok(DisplayMode::Light));
    assert!("sepia".parse::<DisplayMode>().is_err());
  }

  #[test]
  fn dark_palette_is_dim() {
    let palette = DisplayMode::Dark.palette();
    assert_eq!(palette.background, Rgb(0x33, 0x33, 0x33));
    assert_eq!(palette.foreground, Rgb(0xcc, 0xcc, 0xcc));
  }
}
