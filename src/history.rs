//! The operation history: a plain-text file recording every
//! calculated result with a timestamp.

use thiserror::Error;
use time::OffsetDateTime;
use time::macros::format_description;

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends entries of the form `[YYYY-MM-DD HH:MM:SS] operation:
/// result` to a file. The file is opened for each write, so several
/// calculators may share one history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
  path: PathBuf,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HistoryError {
  #[error("{0}")]
  Io(#[from] io::Error),
  #[error("{0}")]
  Format(#[from] time::error::Format),
}

impl History {
  pub const DEFAULT_PATH: &'static str = "calculator.log";

  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Records an entry stamped with the current local time (or UTC, if
  /// the local offset cannot be determined).
  pub fn record(&self, operation: &str, result: f64) -> Result<(), HistoryError> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    self.record_at(now, operation, result)
  }

  pub fn record_at(&self, timestamp: OffsetDateTime, operation: &str, result: f64) -> Result<(), HistoryError> {
    let line = format_entry(timestamp, operation, result)?;
    let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
    writeln!(file, "{}", line)?;
    Ok(())
  }

  /// The last `n` entries, oldest first, or `None` if nothing has been
  /// recorded yet.
  pub fn tail(&self, n: usize) -> Result<Option<Vec<String>>, HistoryError> {
    let contents = match fs::read_to_string(&self.path) {
      Ok(contents) => contents,
      Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
      Err(err) => return Err(err.into()),
    };
    let lines: Vec<&str> = contents.lines().collect();
    let skip = lines.len().saturating_sub(n);
    Ok(Some(lines[skip..].iter().map(|line| line.to_string()).collect()))
  }
}

impl Default for History {
  fn default() -> Self {
    Self::new(Self::DEFAULT_PATH)
  }
}

pub fn format_entry(timestamp: OffsetDateTime, operation: &str, result: f64) -> Result<String, HistoryError> {
  let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
  let timestamp = timestamp.format(fmt)?;
  Ok(format!("[{}] {}: {:.6}", timestamp, operation, result))
}
