//! Character-cell rendering of a sampled function.

use super::dataset::AxisRange;
use super::point::Point2D;

use std::fmt::Write;

pub const POINT_CHAR: char = '*';
pub const AXIS_CHAR: char = '+';
pub const GRID_CHAR: char = '.';
pub const BLANK_CHAR: char = ' ';

/// Spacing, in cells, between grid marks and between row labels.
pub const GRID_SPACING: usize = 5;

/// Width of the left-hand label gutter, not counting the `|`.
const GUTTER_WIDTH: usize = 7;

/// A `height × width` grid of characters covering `x_range ×
/// y_range`. Row 0 is the top (largest `y`); column 0 is the left
/// (smallest `x`).
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
  width: usize,
  height: usize,
  x_range: AxisRange,
  y_range: AxisRange,
  cells: Vec<Vec<char>>,
}

impl Canvas {
  /// A blank canvas with grid marks and any axes that fall inside the
  /// ranges. Panics if either dimension is less than 2.
  pub fn new(width: usize, height: usize, x_range: AxisRange, y_range: AxisRange) -> Self {
    assert!(width >= 2 && height >= 2, "Canvas must be at least 2x2, got {width}x{height}");
    let cells = (0..height).map(|row| {
      (0..width).map(|col| {
        if row % GRID_SPACING == 0 && col % GRID_SPACING == 0 { GRID_CHAR } else { BLANK_CHAR }
      }).collect()
    }).collect();
    let mut canvas = Self { width, height, x_range, y_range, cells };
    canvas.draw_axes();
    canvas
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn height(&self) -> usize {
    self.height
  }

  pub fn get(&self, row: usize, col: usize) -> Option<char> {
    self.cells.get(row).and_then(|r| r.get(col)).copied()
  }

  /// The column whose center is nearest to `x`, if `x` is in range.
  pub fn column_of(&self, x: f64) -> Option<usize> {
    if !self.x_range.contains(x) {
      return None;
    }
    let t = (x - self.x_range.min()) / self.x_range.span();
    Some((t * (self.width - 1) as f64).round() as usize)
  }

  /// The row whose center is nearest to `y`, if `y` is in range.
  pub fn row_of(&self, y: f64) -> Option<usize> {
    if !self.y_range.contains(y) {
      return None;
    }
    let t = (self.y_range.max() - y) / self.y_range.span();
    Some((t * (self.height - 1) as f64).round() as usize)
  }

  /// Marks every point that has a finite `y` inside the canvas.
  pub fn plot(&mut self, points: &[Point2D]) {
    for point in points {
      let Some(y) = point.finite_y() else { continue };
      if let (Some(row), Some(col)) = (self.row_of(y), self.column_of(point.x)) {
        self.cells[row][col] = POINT_CHAR;
      }
    }
  }

  /// Renders the canvas with `y` labels every few rows, a baseline,
  /// and evenly spaced `x` labels underneath.
  pub fn render(&self) -> String {
    let mut output = String::new();
    for (row, cells) in self.cells.iter().enumerate() {
      if row % GRID_SPACING == 0 {
        let y = self.y_range.max() - self.y_range.span() * row as f64 / (self.height - 1) as f64;
        let _ = write!(output, "{:>6.2} |", y);
      } else {
        let _ = write!(output, "{:GUTTER_WIDTH$}|", "");
      }
      output.extend(cells.iter());
      output.push('\n');
    }

    let _ = writeln!(output, "{:GUTTER_WIDTH$}{}", "", "-".repeat(self.width + 1));

    let label_width = (self.width / 4).max(1);
    output.push_str(&" ".repeat(GUTTER_WIDTH));
    for k in 0..=4 {
      let x = self.x_range.lerp(k as f64 / 4.0);
      let _ = write!(output, "{:<label_width$.2}", x);
    }
    output.truncate(output.trim_end().len());
    output.push('\n');
    output
  }

  fn draw_axes(&mut self) {
    if let Some(row) = self.row_of(0.0) {
      self.cells[row].fill(AXIS_CHAR);
    }
    if let Some(col) = self.column_of(0.0) {
      for row in self.cells.iter_mut() {
        row[col] = AXIS_CHAR;
      }
    }
  }
}
