
use super::arguments::read_numbers;
use super::base::{Command, CommandContext, CommandOutput};
use crate::state::ApplicationState;
use crate::statistics::Sample;

/// Prints descriptive statistics for a list of numbers. Nothing is
/// stored in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsCommand;

impl StatisticsCommand {
  pub fn report(sample: &Sample) -> String {
    let summary = sample.summary();
    let quartiles = sample.quartiles();
    format!(
      "\nStatistics:\n\
       Count: {}\n\
       Sum: {:.6}\n\
       Mean: {:.6}\n\
       Standard deviation: {:.6}\n\
       Min: {:.6}\n\
       Max: {:.6}\n\
       Median: {:.6}\n\
       Mode: {:.6}\n\
       Quartiles: Q1 = {:.6}, Q2 = {:.6}, Q3 = {:.6}\n",
      sample.len(),
      sample.sum(),
      summary.mean,
      summary.std_dev,
      summary.min,
      summary.max,
      sample.median(),
      sample.mode(),
      quartiles.q1,
      quartiles.q2,
      quartiles.q3,
    )
  }
}

impl Command for StatisticsCommand {
  fn run_command(&self, _: &mut ApplicationState, context: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    let numbers = read_numbers(context, "Enter numbers for statistics (separated by spaces): ")?;
    let sample = Sample::new(numbers)?;
    context.write(&StatisticsCommand::report(&sample))?;
    Ok(CommandOutput::success())
  }
}
