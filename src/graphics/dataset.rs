//! Intervals of the plane over which a function is sampled and
//! drawn.

use super::point::Point2D;
use crate::calculus::ExprFunction;

use itertools::Itertools;
use thiserror::Error;

/// A non-degenerate closed interval `[min, max]` on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
  min: f64,
  max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Invalid range ({min} .. {max}), expected two finite values with min < max")]
pub struct RangeError {
  min: f64,
  max: f64,
}

impl AxisRange {
  /// Fraction of the observed span added above and below an
  /// automatically chosen range.
  pub const AUTO_MARGIN: f64 = 0.1;
  /// Spans narrower than this are widened to one unit either side.
  pub const MIN_SPAN: f64 = 1e-10;

  pub fn new(min: f64, max: f64) -> Result<Self, RangeError> {
    if min.is_finite() && max.is_finite() && min < max {
      Ok(Self { min, max })
    } else {
      Err(RangeError { min, max })
    }
  }

  /// Chooses a range that fits every finite `y` among `points`, padded
  /// by [`AUTO_MARGIN`](AxisRange::AUTO_MARGIN) of the observed span.
  /// Flat data is given a window of one unit either side, and a
  /// function with no finite values gets `[-1, 1]`.
  pub fn fit(points: &[Point2D]) -> Self {
    let (lo, hi) = match points.iter().filter_map(Point2D::finite_y).minmax_by(f64::total_cmp).into_option() {
      Some(bounds) => bounds,
      None => (0.0, 0.0),
    };
    let span = hi - lo;
    let (min, max) = if span.abs() < Self::MIN_SPAN || !span.is_finite() {
      let mid = (lo + hi) / 2.0;
      (mid - 1.0, mid + 1.0)
    } else {
      (lo - span * Self::AUTO_MARGIN, hi + span * Self::AUTO_MARGIN)
    };
    Self { min, max }
  }

  pub fn min(&self) -> f64 {
    self.min
  }

  pub fn max(&self) -> f64 {
    self.max
  }

  pub fn span(&self) -> f64 {
    self.max - self.min
  }

  pub fn contains(&self, value: f64) -> bool {
    self.min <= value && value <= self.max
  }

  /// `count` evenly spaced values from `min` to `max`, both inclusive.
  /// A count of one yields just `min`.
  pub fn gen_points(&self, count: usize) -> Vec<f64> {
    match count {
      0 => Vec::new(),
      1 => vec![self.min],
      _ => (0..count).map(|i| self.lerp(i as f64 / (count - 1) as f64)).collect(),
    }
  }

  /// The value a fraction `t` of the way from `min` to `max`.
  pub fn lerp(&self, t: f64) -> f64 {
    self.min + self.span() * t
  }
}

/// Evaluates `function` at `count` evenly spaced points of `range`.
/// Evaluation errors produce points with no `y` value rather than
/// failing the whole sample.
pub fn sample_function(function: &ExprFunction<'_>, range: &AxisRange, count: usize) -> Vec<Point2D> {
  range.gen_points(count)
    .into_iter()
    .map(|x| Point2D::new(x, function.eval_at(x).ok()))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_invalid_ranges() {
    assert!(AxisRange::new(1.0, 1.0).is_err());
    assert!(AxisRange::new(2.0, 1.0).is_err());
    assert!(AxisRange::new(f64::NAN, 1.0).is_err());
    assert!(AxisRange::new(0.0, f64::INFINITY).is_err());
    assert!(AxisRange::new(-1.0, 1.0).is_ok());
  }

  #[test]
  fn test_gen_points_includes_both_ends() {
    let range = AxisRange::new(0.0, 1.0).unwrap();
    assert_eq!(range.gen_points(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(range.gen_points(1), vec![0.0]);
    assert!(range.gen_points(0).is_empty());
  }

  #[test]
  fn test_sample_function_marks_failures() {
    let range = AxisRange::new(-1.0, 1.0).unwrap();
    let points = sample_function(&ExprFunction::new("1/x"), &range, 3);
    assert_eq!(points, vec![
      Point2D::new(-1.0, Some(-1.0)),
      Point2D::new(0.0, None),
      Point2D::new(1.0, Some(1.0)),
    ]);
  }

  #[test]
  fn test_sample_function_keeps_nan() {
    let range = AxisRange::new(-1.0, 1.0).unwrap();
    let points = sample_function(&ExprFunction::new("sqrt(x)"), &range, 2);
    assert!(points[0].y.unwrap().is_nan());
    assert_eq!(points[1].y, Some(1.0));
  }

  #[test]
  fn test_fit_adds_margin() {
    let points = vec![Point2D::new(0.0, Some(-2.0)), Point2D::new(1.0, Some(8.0)), Point2D::new(2.0, None)];
    let range = AxisRange::fit(&points);
    assert_eq!(range.min(), -3.0);
    assert_eq!(range.max(), 9.0);
  }

  #[test]
  fn test_fit_ignores_non_finite() {
    let points = vec![
      Point2D::new(0.0, Some(f64::NAN)),
      Point2D::new(1.0, Some(f64::INFINITY)),
      Point2D::new(2.0, Some(0.0)),
      Point2D::new(3.0, Some(10.0)),
    ];
    let range = AxisRange::fit(&points);
    assert_eq!(range.min(), -1.0);
    assert_eq!(range.max(), 11.0);
  }

  #[test]
  fn test_fit_flat_and_empty() {
    let flat = vec![Point2D::new(0.0, Some(3.0)), Point2D::new(1.0, Some(3.0))];
    assert_eq!(AxisRange::fit(&flat), AxisRange::new(2.0, 4.0).unwrap());
    let empty = vec![Point2D::new(0.0, None)];
    assert_eq!(AxisRange::fit(&empty), AxisRange::new(-1.0, 1.0).unwrap());
  }
}
