//! User configuration, read from a JSON file.
//!
//! Every field has a default, so a configuration file only needs to
//! mention the settings it changes:
//!
//! ```json
//! { "memory_capacity": 10, "plot": { "width": 80 } }
//! ```

use crate::calculus::{CentralDifference, RiemannSum};
use crate::graphics::PlotSettings;
use crate::history::History;
use crate::memory::Memory;

use log::LevelFilter;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
  pub history_file: PathBuf,
  pub log_dir: PathBuf,
  pub log_level: LevelFilter,
  pub memory_capacity: usize,
  pub plot: PlotSettings,
  pub calculus: CalculusSettings,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculusSettings {
  pub derivative_step: f64,
  pub integral_steps: usize,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
  #[error("Could not read configuration: {0}")]
  Io(#[from] io::Error),
  #[error("Could not parse configuration: {0}")]
  Json(#[from] serde_json::Error),
  #[error("Invalid configuration: {0}")]
  Invalid(String),
}

impl CalculatorConfig {
  /// Environment variable naming an explicit configuration file.
  pub const ENV_VAR: &'static str = "SCICALC_CONFIG";
  /// Configuration file looked up in the working directory.
  pub const DEFAULT_FILE: &'static str = "scicalc.json";

  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    let config: CalculatorConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
    let json = fs::read_to_string(path)?;
    Self::from_json_str(&json)
  }

  /// The configuration file to use, if any: the file named by
  /// [`ENV_VAR`](CalculatorConfig::ENV_VAR), or else
  /// [`DEFAULT_FILE`](CalculatorConfig::DEFAULT_FILE) if it exists.
  pub fn locate() -> Option<PathBuf> {
    if let Some(path) = env::var_os(Self::ENV_VAR) {
      return Some(PathBuf::from(path));
    }
    let default_path = PathBuf::from(Self::DEFAULT_FILE);
    default_path.is_file().then_some(default_path)
  }

  /// Loads the located configuration file, or the defaults if there
  /// is none.
  pub fn load() -> Result<Self, ConfigError> {
    match Self::locate() {
      Some(path) => Self::load_from_path(&path),
      None => Ok(Self::default()),
    }
  }

  fn validate(&self) -> Result<(), ConfigError> {
    let step = self.calculus.derivative_step;
    if !(step.is_finite() && step > 0.0) {
      return Err(ConfigError::Invalid(format!("derivative_step must be positive, got {}", step)));
    }
    if self.calculus.integral_steps == 0 {
      return Err(ConfigError::Invalid("integral_steps must be at least 1".to_owned()));
    }
    if self.memory_capacity == 0 {
      return Err(ConfigError::Invalid("memory_capacity must be at least 1".to_owned()));
    }
    Ok(())
  }
}

impl CalculusSettings {
  pub fn differentiator(&self) -> CentralDifference {
    CentralDifference::new(self.derivative_step)
  }

  pub fn integrator(&self) -> RiemannSum {
    RiemannSum::new(self.integral_steps)
  }
}

impl Default for CalculatorConfig {
  fn default() -> Self {
    Self {
      history_file: PathBuf::from(History::DEFAULT_PATH),
      log_dir: PathBuf::from("logs"),
      log_level: LevelFilter::Info,
      memory_capacity: Memory::DEFAULT_CAPACITY,
      plot: PlotSettings::default(),
      calculus: CalculusSettings::default(),
    }
  }
}

impl Default for CalculusSettings {
  fn default() -> Self {
    Self {
      derivative_step: CentralDifference::DEFAULT_STEP,
      integral_steps: RiemannSum::DEFAULT_STEPS,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_object_gives_defaults() {
    assert_eq!(CalculatorConfig::from_json_str("{}").unwrap(), CalculatorConfig::default());
  }

  #[test]
  fn test_defaults() {
    let config = CalculatorConfig::default();
    assert_eq!(config.history_file, PathBuf::from("calculator.log"));
    assert_eq!(config.memory_capacity, 5);
    assert_eq!(config.plot, PlotSettings { width: 60, height: 20 });
    assert_eq!(config.calculus.derivative_step, 1e-7);
    assert_eq!(config.calculus.integral_steps, 1000);
    assert_eq!(config.log_level, LevelFilter::Info);
  }

  #[test]
  fn test_partial_override() {
    let json = r#"{ "memory_capacity": 10, "plot": { "width": 80 }, "log_level": "debug" }"#;
    let config = CalculatorConfig::from_json_str(json).unwrap();
    assert_eq!(config.memory_capacity, 10);
    assert_eq!(config.plot, PlotSettings { width: 80, height: 20 });
    assert_eq!(config.log_level, LevelFilter::Debug);
    assert_eq!(config.calculus, CalculusSettings::default());
  }

  #[test]
  fn test_malformed_json() {
    assert!(matches!(CalculatorConfig::from_json_str("{ memory"), Err(ConfigError::Json(_))));
  }

  #[test]
  fn test_invalid_values() {
    let json = r#"{ "calculus": { "derivative_step": 0.0 } }"#;
    assert!(matches!(CalculatorConfig::from_json_str(json), Err(ConfigError::Invalid(_))));
    let json = r#"{ "calculus": { "integral_steps": 0 } }"#;
    assert!(matches!(CalculatorConfig::from_json_str(json), Err(ConfigError::Invalid(_))));
    let json = r#"{ "memory_capacity": 0 }"#;
    assert!(matches!(CalculatorConfig::from_json_str(json), Err(ConfigError::Invalid(_))));
  }

  #[test]
  fn test_load_from_path() {
    let path = env::temp_dir().join(format!("scicalc-config-{}.json", std::process::id()));
    fs::write(&path, r#"{ "history_file": "other.log" }"#).unwrap();
    let config = CalculatorConfig::load_from_path(&path).unwrap();
    assert_eq!(config.history_file, PathBuf::from("other.log"));
    fs::remove_file(&path).unwrap();
    assert!(matches!(CalculatorConfig::load_from_path(&path), Err(ConfigError::Io(_))));
  }

  #[test]
  fn test_calculus_settings_build_estimators() {
    let settings = CalculusSettings { derivative_step: 1e-5, integral_steps: 50 };
    assert_eq!(settings.differentiator().step(), 1e-5);
    assert_eq!(settings.integrator().steps(), 50);
  }
}
