
//! File-backed [`log`] sink.
//!
//! The calculator talks to the user over stdout, so diagnostics go to
//! `<log_dir>/scicalc.log` instead.

use log::{Log, Metadata, Record, LevelFilter, SetLoggerError};
use thiserror::Error;
use time::OffsetDateTime;
use time::macros::format_description;

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const LOG_FILE_NAME: &str = "scicalc.log";

#[derive(Debug)]
pub struct FileLogger {
  level: LevelFilter,
  path: PathBuf,
  file: Mutex<File>,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoggingError {
  #[error("Could not open log file: {0}")]
  Io(#[from] io::Error),
  #[error("{0}")]
  SetLogger(#[from] SetLoggerError),
}

impl FileLogger {
  /// Opens (or creates) the log file inside `dir`, creating `dir` if
  /// necessary.
  pub fn open(dir: &Path, level: LevelFilter) -> io::Result<Self> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok(Self { level, path, file: Mutex::new(file) })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn level(&self) -> LevelFilter {
    self.level
  }
}

impl Log for FileLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= self.level
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    let line = format_record(OffsetDateTime::now_utc(), record);
    // A poisoned lock or a failed write has nowhere to be reported.
    if let Ok(mut file) = self.file.lock() {
      let _ = writeln!(file, "{}", line);
    }
  }

  fn flush(&self) {
    if let Ok(mut file) = self.file.lock() {
      let _ = file.flush();
    }
  }
}

fn format_record(timestamp: OffsetDateTime, record: &Record) -> String {
  let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
  let timestamp = timestamp.format(fmt).unwrap_or_else(|_| String::from("????-??-?? ??:??:??"));
  format!("{} {:<5} {}: {}", timestamp, record.level(), record.target(), record.args())
}

/// Installs a [`FileLogger`] writing to `dir` as the global logger.
/// Fails if a logger has already been installed.
pub fn init(dir: &Path, level: LevelFilter) -> Result<(), LoggingError> {
  let logger = FileLogger::open(dir, level)?;
  log::set_boxed_logger(Box::new(logger))?;
  log::set_max_level(level);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  use log::Level;
  use time::macros::datetime;

  fn temp_log_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("scicalc-logging-{}-{}", name, std::process::id()))
  }

  #[test]
  fn test_format_record() {
    let line = format_record(
      datetime!(2024-03-05 07:08:09 UTC),
      &Record::builder()
        .level(Level::Warn)
        .target("scicalc::runner")
        .args(format_args!("something odd"))
        .build(),
    );
    assert_eq!(line, "2024-03-05 07:08:09 WARN  scicalc::runner: something odd");
  }

  #[test]
  fn test_logger_respects_level() {
    let dir = temp_log_dir("level");
    let logger = FileLogger::open(&dir, LevelFilter::Info).unwrap();
    logger.log(&Record::builder().level(Level::Info).target("t").args(format_args!("kept")).build());
    logger.log(&Record::builder().level(Level::Debug).target("t").args(format_args!("dropped")).build());
    logger.flush();

    let contents = fs::read_to_string(logger.path()).unwrap();
    assert!(contents.contains("kept"));
    assert!(!contents.contains("dropped"));
    fs::remove_dir_all(&dir).unwrap();
  }

  #[test]
  fn test_open_creates_directory() {
    let dir = temp_log_dir("create").join("nested");
    let logger = FileLogger::open(&dir, LevelFilter::Trace).unwrap();
    assert!(logger.path().is_file());
    assert_eq!(logger.path().file_name().unwrap(), LOG_FILE_NAME);
    fs::remove_dir_all(dir.parent().unwrap()).unwrap();
  }
}
