
use super::base::{Command, CommandContext, CommandOutput};
use crate::display;
use crate::state::ApplicationState;

/// Number of history entries shown by [`HistoryCommand`].
pub const HISTORY_LINES: usize = 10;

/// General-purpose [Command] implementation that simply runs a given
/// function.
pub struct GeneralCommand<F> {
  body: F,
}

/// Ends the main loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuitCommand;

/// Shows the most recent history entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryCommand;

impl<F> GeneralCommand<F>
where F: Fn(&mut ApplicationState, &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
  pub fn new(body: F) -> GeneralCommand<F> {
    GeneralCommand {
      body
    }
  }
}

impl<F> Command for GeneralCommand<F>
where F: Fn(&mut ApplicationState, &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
  fn run_command(&self, state: &mut ApplicationState, context: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    (self.body)(state, context)
  }
}

impl Command for QuitCommand {
  fn run_command(&self, _: &mut ApplicationState, _: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    Ok(CommandOutput::quit())
  }
}

impl Command for HistoryCommand {
  fn run_command(&self, state: &mut ApplicationState, context: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    match state.history.tail(HISTORY_LINES)? {
      None => context.write("No log file found.\n")?,
      Some(lines) if lines.is_empty() => context.write("History is empty.\n")?,
      Some(lines) => {
        context.write("Recent history:\n")?;
        for line in lines {
          context.write(&format!("{}\n", line))?;
        }
      }
    }
    Ok(CommandOutput::success())
  }
}

pub fn help_command() -> impl Command + Send + Sync {
  GeneralCommand::new(|_, context| {
    context.write(&display::help())?;
    Ok(CommandOutput::success())
  })
}

pub fn clear_screen_command() -> impl Command + Send + Sync {
  GeneralCommand::new(|_, context| {
    context.write(display::CLEAR_SCREEN)?;
    context.write(&display::title())?;
    Ok(CommandOutput::success())
  })
}
