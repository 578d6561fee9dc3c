//! Sampled points of a plotted function.

use std::fmt::{self, Display, Formatter};

/// The value of a function at one sampled `x`. `y` is `None` when the
/// expression could not be evaluated there; such points are never
/// drawn.
#[derive(Clone, Debug, Copy, PartialEq, Default)]
pub struct Point2D {
  pub x: f64,
  pub y: Option<f64>,
}

impl Point2D {
  pub fn new(x: f64, y: Option<f64>) -> Self {
    Self { x, y }
  }

  /// The `y` value, if it is present and finite.
  pub fn finite_y(&self) -> Option<f64> {
    self.y.filter(|y| y.is_finite())
  }
}

impl Display for Point2D {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self.y {
      Some(y) => write!(f, "({}, {})", self.x, y),
      None => write!(f, "({}, undefined)", self.x),
    }
  }
}
