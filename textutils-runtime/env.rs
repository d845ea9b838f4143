//! Functions for working with the host environment.

use std::ffi::OsStr;

/// Checks if the given environment variable is set.
pub fn env_var_is_set(env_var_name: &str) -> bool {
  std::env::var_os(env_var_name).is_some()
}

/// Checks if a binary with the given name exists on `PATH`.
pub fn binary_exists<T: AsRef<OsStr>>(binary_name: T) -> bool {
  which::which(binary_name).is_ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_binary() {
    assert!(!binary_exists("textutils-definitely-not-a-real-binary"));
  }

  #[test]
  fn missing_env_var() {
    assert!(!env_var_is_set("TEXTUTILS_DEFINITELY_UNSET_VARIABLE"));
  }
}
