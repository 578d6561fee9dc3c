
//! Commands for the recall memory.

use super::arguments::{read_index, read_number};
use super::base::{Command, CommandContext, CommandOutput};
use crate::display::memory_listing;
use crate::state::ApplicationState;

use log::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShowMemoryCommand;

/// Shows a stored value in a result box, without storing it again.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecallCommand;

#[derive(Debug, Clone, Copy, Default)]
pub struct StoreCommand;

impl Command for ShowMemoryCommand {
  fn run_command(&self, state: &mut ApplicationState, context: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    context.write(&memory_listing(&state.memory))?;
    Ok(CommandOutput::success())
  }
}

impl Command for RecallCommand {
  fn run_command(&self, state: &mut ApplicationState, context: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    let index = read_index(context, "Enter memory index to recall: ")?;
    let value = state.memory.recall(index)?;
    Ok(CommandOutput::recalled(format!("Memory recall [{}]", index), value))
  }
}

impl Command for StoreCommand {
  fn run_command(&self, state: &mut ApplicationState, context: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    let value = read_number(context, "Enter the value to store: ")?;
    if let Some(evicted) = state.memory.store(value) {
      debug!("Memory full, evicted {}", evicted);
    }
    context.write(&format!("Stored {:.6} in memory.\n", value))?;
    Ok(CommandOutput::success())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::memory::MemoryError;
  use crate::terminal::StdTerminal;

  use std::io::Cursor;

  fn run(command: &dyn Command, state: &mut ApplicationState, input: &str) -> (anyhow::Result<CommandOutput>, String) {
    let mut terminal = StdTerminal::new(Cursor::new(input.to_owned()), Vec::new());
    let result = {
      let mut context = CommandContext::new(&mut terminal);
      command.run_command(state, &mut context)
    };
    (result, String::from_utf8(terminal.into_output()).unwrap())
  }

  #[test]
  fn test_store_then_recall() {
    let mut state = ApplicationState::default();
    let (output, text) = run(&StoreCommand, &mut state, "2.5\n");
    assert_eq!(output.unwrap(), CommandOutput::success());
    assert!(text.ends_with("Stored 2.500000 in memory.\n"));

    let (output, _) = run(&RecallCommand, &mut state, "0\n");
    let output = output.unwrap();
    let result = output.result().unwrap();
    assert_eq!(result.operation, "Memory recall [0]");
    assert_eq!(result.value, 2.5);
    assert!(!result.remember);
  }

  #[test]
  fn test_recall_out_of_range() {
    let mut state = ApplicationState::default();
    let (output, _) = run(&RecallCommand, &mut state, "3\n");
    assert_eq!(
      output.unwrap_err().downcast_ref::<MemoryError>(),
      Some(&MemoryError::InvalidIndex { index: 3, len: 0 }),
    );
  }

  #[test]
  fn test_show_memory() {
    let mut state = ApplicationState::default();
    state.memory.store(1.0);
    let (_, text) = run(&ShowMemoryCommand, &mut state, "");
    assert_eq!(text, "Stored results (1/5):\n0: 1.000000\n");
  }
}
