//! ASCII plotting of single-variable expressions.

pub mod canvas;
pub mod dataset;
pub mod point;

use canvas::Canvas;
use dataset::{AxisRange, sample_function};
use crate::calculus::ExprFunction;

use log::debug;
use serde::{Serialize, Deserialize};

use std::fmt::Write;

/// Dimensions of the plotting area, in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
  pub width: usize,
  pub height: usize,
}

/// A request to draw one function. The `y` range is fitted to the
/// data unless one is given explicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot<'a> {
  function: ExprFunction<'a>,
  x_range: AxisRange,
  y_range: Option<AxisRange>,
}

impl PlotSettings {
  pub const DEFAULT_WIDTH: usize = 60;
  pub const DEFAULT_HEIGHT: usize = 20;
  pub const MIN_SIZE: usize = 2;

  /// The settings with both dimensions raised to at least
  /// [`MIN_SIZE`](PlotSettings::MIN_SIZE).
  pub fn clamped(self) -> Self {
    Self {
      width: self.width.max(Self::MIN_SIZE),
      height: self.height.max(Self::MIN_SIZE),
    }
  }
}

impl Default for PlotSettings {
  fn default() -> Self {
    Self { width: Self::DEFAULT_WIDTH, height: Self::DEFAULT_HEIGHT }
  }
}

impl<'a> Plot<'a> {
  pub fn new(function: ExprFunction<'a>, x_range: AxisRange) -> Self {
    Self { function, x_range, y_range: None }
  }

  pub fn with_y_range(mut self, y_range: AxisRange) -> Self {
    self.y_range = Some(y_range);
    self
  }

  /// Samples the function once per column and draws it, preceded by a
  /// short header naming the function and both ranges.
  pub fn render(&self, settings: &PlotSettings) -> String {
    let settings = settings.clamped();
    let points = sample_function(&self.function, &self.x_range, settings.width);
    let missing = points.iter().filter(|p| p.finite_y().is_none()).count();
    if missing > 0 {
      debug!("{} of {} samples of {} are undefined", missing, points.len(), self.function.expr());
    }
    let y_range = self.y_range.unwrap_or_else(|| AxisRange::fit(&points));

    let mut canvas = Canvas::new(settings.width, settings.height, self.x_range, y_range);
    canvas.plot(&points);

    let mut output = String::new();
    let _ = writeln!(
      output,
      "Plot of {} from {:.2} to {:.2}",
      self.function.expr(),
      self.x_range.min(),
      self.x_range.max(),
    );
    let _ = writeln!(output, "y-axis: {:.2} to {:.2}", y_range.max(), y_range.min());
    output.push('\n');
    output.push_str(&canvas.render());
    output
  }
}
