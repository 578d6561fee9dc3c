//! Calculator session state.

use crate::config::CalculatorConfig;
use crate::history::{History, HistoryError};
use crate::memory::Memory;

use log::debug;

#[derive(Debug, Clone)]
pub struct ApplicationState {
  pub memory: Memory,
  pub history: History,
  pub config: CalculatorConfig,
}

impl ApplicationState {

  pub fn new(config: CalculatorConfig) -> Self {
    Self {
      memory: Memory::new(config.memory_capacity),
      history: History::new(config.history_file.clone()),
      config,
    }
  }

  /// Stores a calculated result in memory and appends it to the
  /// history file. The value stays in memory even if the history
  /// write fails.
  pub fn record_result(&mut self, operation: &str, result: f64) -> Result<(), HistoryError> {
    if let Some(evicted) = self.memory.store(result) {
      debug!("Memory full, evicted {}", evicted);
    }
    self.history.record(operation, result)
  }

}

impl Default for ApplicationState {
  fn default() -> Self {
    Self::new(CalculatorConfig::default())
  }
}
