
use super::arguments::{parse_pair, read_pair, read_reply};
use super::base::{Command, CommandContext, CommandOutput};
use super::calculus::FUNCTION_PROMPT;
use crate::calculus::ExprFunction;
use crate::graphics::Plot;
use crate::graphics::dataset::AxisRange;
use crate::state::ApplicationState;

/// Draws the user's function over a chosen `x` interval. The `y`
/// range is optional; an empty reply fits it to the data.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotCommand;

impl Command for PlotCommand {
  fn run_command(&self, state: &mut ApplicationState, context: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    let expr = read_reply(context, FUNCTION_PROMPT)?;
    let (start, end) = read_pair(context, "Let's draw a graph! Enter the start and end points: ")?;
    let x_range = AxisRange::new(start, end)?;
    let y_reply = read_reply(context, "Enter the y range (leave empty to fit the data): ")?;

    let mut plot = Plot::new(ExprFunction::new(&expr), x_range);
    if !y_reply.is_empty() {
      let (y_min, y_max) = parse_pair(&y_reply)?;
      plot = plot.with_y_range(AxisRange::new(y_min, y_max)?);
    }

    context.write("\nGenerating plot...\n")?;
    context.write(&plot.render(&state.config.plot))?;
    Ok(CommandOutput::success())
  }
}
