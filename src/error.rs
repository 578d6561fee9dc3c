
use crate::arithmetic::ArithmeticError;
use crate::command::arguments::InputError;
use crate::command::dispatch::NoSuchCommandError;
use crate::config::ConfigError;
use crate::graphics::dataset::RangeError;
use crate::history::HistoryError;
use crate::logging::LoggingError;
use crate::memory::MemoryError;
use crate::parsing::EvalError;
use crate::statistics::StatisticsError;

use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  EvalError(#[from] EvalError),
  #[error("{0}")]
  ArithmeticError(#[from] ArithmeticError),
  #[error("{0}")]
  StatisticsError(#[from] StatisticsError),
  #[error("{0}")]
  MemoryError(#[from] MemoryError),
  #[error("{0}")]
  HistoryError(#[from] HistoryError),
  #[error("{0}")]
  ConfigError(#[from] ConfigError),
  #[error("{0}")]
  LoggingError(#[from] LoggingError),
  #[error("{0}")]
  RangeError(#[from] RangeError),
  #[error("{0}")]
  InputError(#[from] InputError),
  #[error("{0}")]
  NoSuchCommandError(#[from] NoSuchCommandError),
  #[error("{0}")]
  IoError(#[from] io::Error),
}
