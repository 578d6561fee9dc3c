//! Numerical differentiation and integration of user expressions.
//!
//! The expression being studied is always passed in explicitly as an
//! [`ExprFunction`]; there is no notion of a "current function".

use crate::parsing::{evaluate_in, EvalError, EvaluationContext, DEFAULT_VARIABLE};

use log::trace;

/// A single-variable expression, viewed as a function of that
/// variable. Each call to [`ExprFunction::eval_at`] re-parses the
/// expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprFunction<'a> {
  expr: &'a str,
  var: &'a str,
}

/// Fourth-order central difference estimate of a derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralDifference {
  step: f64,
}

/// Left Riemann sum over a fixed number of equal-width strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiemannSum {
  steps: usize,
}

impl<'a> ExprFunction<'a> {
  /// A function of the default variable `x`.
  pub fn new(expr: &'a str) -> Self {
    Self::with_var(expr, DEFAULT_VARIABLE)
  }

  pub fn with_var(expr: &'a str, var: &'a str) -> Self {
    Self { expr, var }
  }

  pub fn expr(&self) -> &'a str {
    self.expr
  }

  pub fn eval_at(&self, value: f64) -> Result<f64, EvalError> {
    evaluate_in(self.expr, &EvaluationContext::new(self.var, value))
  }
}

impl CentralDifference {
  pub const DEFAULT_STEP: f64 = 1e-7;

  pub fn new(step: f64) -> Self {
    assert!(step > 0.0 && step.is_finite(), "Invalid derivative step {step}");
    Self { step }
  }

  pub fn step(&self) -> f64 {
    self.step
  }

  /// Estimates `f'(x)` from `f(x±h)` and `f(x±2h)`. Fails on the first
  /// evaluation error without producing a partial estimate.
  pub fn derivative(&self, function: &ExprFunction<'_>, x: f64) -> Result<f64, EvalError> {
    let h = self.step;
    let plus_one = function.eval_at(x + h)?;
    let minus_one = function.eval_at(x - h)?;
    let plus_two = function.eval_at(x + 2.0 * h)?;
    let minus_two = function.eval_at(x - 2.0 * h)?;
    let estimate = (-plus_two + 8.0 * plus_one - 8.0 * minus_one + minus_two) / (12.0 * h);
    trace!("d/dx[{}] at {} = {}", function.expr(), x, estimate);
    Ok(estimate)
  }
}

impl RiemannSum {
  pub const DEFAULT_STEPS: usize = 1000;

  /// A step count of zero is treated as one.
  pub fn new(steps: usize) -> Self {
    Self { steps: steps.max(1) }
  }

  pub fn steps(&self) -> usize {
    self.steps
  }

  /// Estimates the integral of `function` from `a` to `b`, sampling
  /// the left edge of each strip. Reversed bounds give a negated
  /// result. Fails on the first evaluation error.
  pub fn integrate(&self, function: &ExprFunction<'_>, a: f64, b: f64) -> Result<f64, EvalError> {
    let dx = (b - a) / self.steps as f64;
    let mut total = 0.0;
    for i in 0..self.steps {
      let x = a + i as f64 * dx;
      total += function.eval_at(x)? * dx;
    }
    trace!("integral of {} over [{}, {}] = {}", function.expr(), a, b, total);
    Ok(total)
  }
}

impl Default for CentralDifference {
  fn default() -> Self {
    Self::new(Self::DEFAULT_STEP)
  }
}

impl Default for RiemannSum {
  fn default() -> Self {
    Self::new(Self::DEFAULT_STEPS)
  }
}

/// Derivative of `expr` (in `x`) at `x`, using the default step.
pub fn derivative(expr: &str, x: f64) -> Result<f64, EvalError> {
  CentralDifference::default().derivative(&ExprFunction::new(expr), x)
}

/// Integral of `expr` (in `x`) over `[a, b]`, using the default
/// number of strips.
pub fn integral(expr: &str, a: f64, b: f64) -> Result<f64, EvalError> {
  RiemannSum::default().integrate(&ExprFunction::new(expr), a, b)
}
