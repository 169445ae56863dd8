//! Runtime configuration for the `pmcc` binary.
//!
//! The command line is reserved for the expression itself, so the only knob
//! lives in the environment: `PMCC_LOG` selects the log verbosity. It never
//! affects stdout or the diagnostics printed for compile errors.

use std::env;

use log::LevelFilter;

pub const LOG_ENV: &str = "PMCC_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  pub log_level: LevelFilter,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      log_level: LevelFilter::Warn,
    }
  }
}

impl Config {
  pub fn from_env() -> Self {
    Self::from_log_setting(env::var(LOG_ENV).ok().as_deref())
  }

  /// Unset or unrecognised values fall back to `warn`.
  pub fn from_log_setting(setting: Option<&str>) -> Self {
    let log_level = setting
      .and_then(|value| value.trim().parse::<LevelFilter>().ok())
      .unwrap_or(Self::default().log_level);
    Self { log_level }
  }
}
