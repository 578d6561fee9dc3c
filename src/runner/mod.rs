
//! The interactive main loop.

use crate::command::{CommandContext, CommandOutput, default_dispatch_table};
use crate::command::arguments::InputError;
use crate::command::dispatch::CommandDispatchTable;
use crate::display;
use crate::error::Error;
use crate::state::ApplicationState;
use crate::terminal::Terminal;

use log::{info, warn};

pub const MAIN_PROMPT: &str = "What would you like to calculate? (press q to exit): ";

pub struct Runner {
  command_table: CommandDispatchTable,
}

/// What the main loop does after one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
  Continue,
  Quit,
}

impl Runner {
  pub fn new(command_table: CommandDispatchTable) -> Self {
    Self { command_table }
  }

  /// Runs commands until the user quits or input ends. Command
  /// failures are reported to the user and the loop continues; only
  /// a failure to talk to the terminal itself ends it with an error.
  pub fn run(&self, state: &mut ApplicationState, terminal: &mut dyn Terminal) -> Result<(), Error> {
    loop {
      let Some(line) = terminal.prompt(MAIN_PROMPT)? else {
        break;
      };
      let Some(name) = line.trim().chars().next() else {
        continue;
      };
      if self.run_one(state, terminal, &name.to_string())? == Flow::Quit {
        break;
      }
      terminal.write_str(display::SEPARATOR)?;
      terminal.write_str("\n")?;
    }
    terminal.write_str("\nBye!\n")?;
    terminal.flush()?;
    Ok(())
  }

  fn run_one(&self, state: &mut ApplicationState, terminal: &mut dyn Terminal, name: &str) -> Result<Flow, Error> {
    let command = match self.command_table.get(name) {
      Ok(command) => command,
      Err(err) => {
        terminal.write_str(&format!("\n {}\n\n", err))?;
        return Ok(Flow::Continue);
      }
    };
    let output = {
      let mut context = CommandContext::new(terminal);
      command.run_command(state, &mut context)
    };
    match output {
      Ok(output) => self.show_output(state, terminal, &output),
      Err(err) if err.downcast_ref::<InputError>() == Some(&InputError::EndOfInput) => {
        Ok(Flow::Quit)
      }
      Err(err) => {
        warn!("Command '{}' failed: {}", name, err);
        terminal.write_str(&format!("\n {}\n\n", err))?;
        Ok(Flow::Continue)
      }
    }
  }

  fn show_output(&self, state: &mut ApplicationState, terminal: &mut dyn Terminal, output: &CommandOutput) -> Result<Flow, Error> {
    if output.is_quit() {
      return Ok(Flow::Quit);
    }
    if let Some(result) = output.result() {
      terminal.write_str("\n")?;
      terminal.write_str(&display::result_box(&result.operation, result.value))?;
      terminal.write_str("\n")?;
      if result.remember {
        info!("{} = {}", result.operation, result.value);
        if let Err(err) = state.record_result(&result.operation, result.value) {
          warn!("Could not write history to {}: {}", state.history.path().display(), err);
          terminal.write_str(&format!(" Could not write history: {}\n\n", err))?;
        }
      }
    }
    if let Some(detail) = output.detail() {
      terminal.write_str(detail)?;
      terminal.write_str("\n")?;
    }
    Ok(Flow::Continue)
  }
}

impl Default for Runner {
  fn default() -> Self {
    Self::new(default_dispatch_table())
  }
}
