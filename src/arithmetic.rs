//! Arithmetic over lists of operands, along with the small integer
//! helpers (factorials, selections, divisors) offered by the
//! calculator.

use crate::parsing::BinaryOperator;

use thiserror::Error;
use num::integer;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ArithmeticError {
  #[error("No operands were given")]
  NoOperands,
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Operator '{operator}' expects {expected} operands, got {actual}")]
  WrongArity {
    operator: char,
    expected: usize,
    actual: usize,
  },
  #[error("Factorial of a negative number ({0}) doesn't exist")]
  NegativeFactorial(i64),
  #[error("Cannot choose {r} items out of {n}")]
  InvalidSelection {
    n: i64,
    r: i64,
  },
}

/// Folds `numbers` with `op`, left to right. Power is the exception:
/// it takes exactly two operands.
pub fn calculate(op: BinaryOperator, numbers: &[f64]) -> Result<f64, ArithmeticError> {
  let (&first, rest) = numbers.split_first().ok_or(ArithmeticError::NoOperands)?;
  match op {
    BinaryOperator::Add => Ok(numbers.iter().sum()),
    BinaryOperator::Multiply => Ok(numbers.iter().product()),
    BinaryOperator::Subtract => Ok(rest.iter().fold(first, |acc, n| acc - n)),
    BinaryOperator::Divide => {
      rest.iter().try_fold(first, |acc, &n| {
        if n == 0.0 {
          Err(ArithmeticError::DivisionByZero)
        } else {
          Ok(acc / n)
        }
      })
    }
    BinaryOperator::Power => match numbers {
      [base, exponent] => Ok(base.powf(*exponent)),
      _ => Err(ArithmeticError::WrongArity { operator: '^', expected: 2, actual: numbers.len() }),
    },
  }
}

/// `n!`. Results too large for `f64` are infinite.
pub fn factorial(n: i64) -> Result<f64, ArithmeticError> {
  if n < 0 {
    return Err(ArithmeticError::NegativeFactorial(n));
  }
  Ok(product_until_infinite((2..=n).map(|i| i as f64)))
}

/// Number of ordered selections of `r` items out of `n`.
pub fn permutations(n: i64, r: i64) -> Result<f64, ArithmeticError> {
  check_selection(n, r)?;
  Ok(product_until_infinite(((n - r + 1)..=n).map(|i| i as f64)))
}

/// Number of unordered selections of `r` items out of `n`.
pub fn combinations(n: i64, r: i64) -> Result<f64, ArithmeticError> {
  check_selection(n, r)?;
  let r = r.min(n - r);
  Ok(product_until_infinite((1..=r).map(|i| (n - r + i) as f64 / i as f64)))
}

pub fn gcd(a: i64, b: i64) -> i64 {
  integer::gcd(a, b)
}

/// Least common multiple, as a float so that it cannot overflow.
pub fn lcm(a: i64, b: i64) -> f64 {
  if a == 0 || b == 0 {
    return 0.0;
  }
  (a / gcd(a, b)).unsigned_abs() as f64 * b.unsigned_abs() as f64
}

// Stops early once the product has overflowed, so huge inputs finish.
fn product_until_infinite(factors: impl Iterator<Item = f64>) -> f64 {
  let mut product = 1.0;
  for factor in factors {
    product *= factor;
    if product.is_infinite() {
      break;
    }
  }
  product
}

fn check_selection(n: i64, r: i64) -> Result<(), ArithmeticError> {
  if n < 0 || r < 0 || r > n {
    Err(ArithmeticError::InvalidSelection { n, r })
  } else {
    Ok(())
  }
}
