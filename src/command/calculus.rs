
//! Commands for invoking the calculus subsystems.
//!
//! Both commands also plot the function: around the point for a
//! derivative, and over the interval for an integral.

use super::arguments::{read_number, read_pair, read_reply};
use super::base::{Command, CommandContext, CommandOutput};
use crate::calculus::ExprFunction;
use crate::graphics::Plot;
use crate::graphics::dataset::AxisRange;
use crate::state::ApplicationState;

use log::info;

pub const FUNCTION_PROMPT: &str = "Enter function (e.g., sin(x) or x^2): ";

/// Half-width of the plotted neighborhood around a derivative's point.
pub const DERIVATIVE_PLOT_RADIUS: f64 = 2.0;

/// Evaluates the user's function at a single point.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateCommand;

#[derive(Debug, Clone, Copy, Default)]
pub struct DerivativeCommand;

#[derive(Debug, Clone, Copy, Default)]
pub struct IntegralCommand;

impl Command for EvaluateCommand {
  fn run_command(&self, _: &mut ApplicationState, context: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    let expr = read_reply(context, FUNCTION_PROMPT)?;
    let x = read_number(context, "At which value of x? ")?;
    let result = ExprFunction::new(&expr).eval_at(x)?;
    Ok(CommandOutput::calculated(format!("f(x) = {} at x = {:.2}", expr, x), result))
  }
}

impl Command for DerivativeCommand {
  fn run_command(&self, state: &mut ApplicationState, context: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    let expr = read_reply(context, FUNCTION_PROMPT)?;
    let x = read_number(context, "At which point should we calculate the derivative? ")?;
    let function = ExprFunction::new(&expr);
    let result = state.config.calculus.differentiator().derivative(&function, x)?;
    info!("Derivative of {} at {} is {}", expr, x, result);

    let output = CommandOutput::calculated(format!("d/dx [{}] at x = {:.2}", expr, x), result);
    // Far from the origin, x - 2 and x + 2 may round to the same value.
    match AxisRange::new(x - DERIVATIVE_PLOT_RADIUS, x + DERIVATIVE_PLOT_RADIUS) {
      Ok(x_range) => Ok(output.with_detail(Plot::new(function, x_range).render(&state.config.plot))),
      Err(_) => Ok(output),
    }
  }
}

impl Command for IntegralCommand {
  fn run_command(&self, state: &mut ApplicationState, context: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    let expr = read_reply(context, FUNCTION_PROMPT)?;
    let (a, b) = read_pair(context, "Let's integrate! Enter the start and end points: ")?;
    context.write("\nCalculating integral, please wait...\n")?;
    let function = ExprFunction::new(&expr);
    let result = state.config.calculus.integrator().integrate(&function, a, b)?;
    info!("Integral of {} from {} to {} is {}", expr, a, b, result);

    let output = CommandOutput::calculated(format!("integral of [{}] from {:.2} to {:.2}", expr, a, b), result);
    // An empty interval integrates to zero but has nothing to plot.
    match AxisRange::new(a.min(b), a.max(b)) {
      Ok(x_range) => Ok(output.with_detail(Plot::new(function, x_range).render(&state.config.plot))),
      Err(_) => Ok(output),
    }
  }
}
