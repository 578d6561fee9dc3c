//! Descriptive statistics over a sample of real numbers.

use itertools::Itertools;
use thiserror::Error;

use std::cmp::Reverse;

/// A non-empty collection of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
  values: Vec<f64>,
}

/// The four figures the calculator reports for a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
  pub mean: f64,
  pub std_dev: f64,
  pub min: f64,
  pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
  pub q1: f64,
  pub q2: f64,
  pub q3: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StatisticsError {
  #[error("No numbers provided")]
  EmptySample,
}

impl Sample {
  pub fn new(values: Vec<f64>) -> Result<Self, StatisticsError> {
    if values.is_empty() {
      Err(StatisticsError::EmptySample)
    } else {
      Ok(Self { values })
    }
  }

  pub fn values(&self) -> &[f64] {
    &self.values
  }

  #[allow(clippy::len_without_is_empty)] // A sample is never empty
  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn sum(&self) -> f64 {
    self.values.iter().sum()
  }

  pub fn mean(&self) -> f64 {
    self.sum() / self.len() as f64
  }

  /// Population variance (divides by `n`, not `n - 1`).
  pub fn variance(&self) -> f64 {
    let mean = self.mean();
    let squares: f64 = self.values.iter().map(|x| (x - mean) * (x - mean)).sum();
    squares / self.len() as f64
  }

  pub fn std_dev(&self) -> f64 {
    self.variance().sqrt()
  }

  pub fn min(&self) -> f64 {
    self.values.iter().copied().fold(f64::INFINITY, f64::min)
  }

  pub fn max(&self) -> f64 {
    self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
  }

  pub fn median(&self) -> f64 {
    median_of_sorted(&self.sorted())
  }

  /// The most frequent value. Ties go to the smallest candidate.
  pub fn mode(&self) -> f64 {
    self.sorted()
      .into_iter()
      .dedup_with_count()
      .min_by_key(|(count, _)| Reverse(*count))
      .map(|(_, value)| value)
      .unwrap_or(f64::NAN) // unreachable: samples are non-empty
  }

  /// Q2 is the median; Q1 and Q3 are the medians of the values below
  /// and above it. The middle element of an odd-length sample belongs
  /// to neither half.
  pub fn quartiles(&self) -> Quartiles {
    let sorted = self.sorted();
    let n = sorted.len();
    let q2 = median_of_sorted(&sorted);
    if n == 1 {
      return Quartiles { q1: q2, q2, q3: q2 };
    }
    let lower = &sorted[..n / 2];
    let upper = &sorted[(n + 1) / 2..];
    Quartiles {
      q1: median_of_sorted(lower),
      q2,
      q3: median_of_sorted(upper),
    }
  }

  pub fn summary(&self) -> Summary {
    Summary {
      mean: self.mean(),
      std_dev: self.std_dev(),
      min: self.min(),
      max: self.max(),
    }
  }

  fn sorted(&self) -> Vec<f64> {
    let mut sorted = self.values.clone();
    sorted.sort_by(f64::total_cmp);
    sorted
  }
}

impl TryFrom<Vec<f64>> for Sample {
  type Error = StatisticsError;

  fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
    Sample::new(values)
  }
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
  let len = sorted.len();
  if len % 2 == 0 {
    (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0
  } else {
    sorted[len / 2]
  }
}
