
use crate::state::ApplicationState;
use crate::terminal::Terminal;

use std::io;

pub trait Command {
  fn run_command(
    &self,
    state: &mut ApplicationState,
    context: &mut CommandContext<'_>,
  ) -> anyhow::Result<CommandOutput>;
}

/// Everything a command needs besides the application state.
pub struct CommandContext<'a> {
  pub terminal: &'a mut dyn Terminal,
}

/// A calculated value, shown to the user in a result box.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
  pub operation: String,
  pub value: f64,
  /// Whether the value is stored in memory and recorded in the
  /// history. Values merely read back from memory are not.
  pub remember: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandOutput {
  result: Option<CalculationResult>,
  detail: Option<String>,
  quit: bool,
}

impl<'a> CommandContext<'a> {
  pub fn new(terminal: &'a mut dyn Terminal) -> Self {
    Self { terminal }
  }

  pub fn write(&mut self, text: &str) -> io::Result<()> {
    self.terminal.write_str(text)
  }
}

impl CommandOutput {
  /// Output of a command with nothing further to display.
  pub fn success() -> Self {
    Self::default()
  }

  pub fn calculated(operation: impl Into<String>, value: f64) -> Self {
    Self {
      result: Some(CalculationResult { operation: operation.into(), value, remember: true }),
      ..Self::default()
    }
  }

  pub fn recalled(operation: impl Into<String>, value: f64) -> Self {
    Self {
      result: Some(CalculationResult { operation: operation.into(), value, remember: false }),
      ..Self::default()
    }
  }

  pub fn quit() -> Self {
    Self { quit: true, ..Self::default() }
  }

  /// Text shown after the result box.
  pub fn with_detail(mut self, detail: String) -> Self {
    self.detail = Some(detail);
    self
  }

  pub fn result(&self) -> Option<&CalculationResult> {
    self.result.as_ref()
  }

  pub fn detail(&self) -> Option<&str> {
    self.detail.as_deref()
  }

  pub fn is_quit(&self) -> bool {
    self.quit
  }
}
