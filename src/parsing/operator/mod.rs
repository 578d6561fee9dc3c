//! The binary operators understood by the expression engine.

mod associativity;
mod precedence;

pub use associativity::Associativity;
pub use precedence::Precedence;

use super::error::EvalError;

use std::fmt::{self, Display, Formatter};

/// One of the five infix arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
  Add,
  Subtract,
  Multiply,
  Divide,
  Power,
}

impl BinaryOperator {
  pub const ALL: [BinaryOperator; 5] = [
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    BinaryOperator::Power,
  ];

  pub fn from_symbol(symbol: char) -> Option<Self> {
    match symbol {
      '+' => Some(BinaryOperator::Add),
      '-' => Some(BinaryOperator::Subtract),
      '*' => Some(BinaryOperator::Multiply),
      '/' => Some(BinaryOperator::Divide),
      '^' => Some(BinaryOperator::Power),
      _ => None,
    }
  }

  pub fn symbol(self) -> char {
    match self {
      BinaryOperator::Add => '+',
      BinaryOperator::Subtract => '-',
      BinaryOperator::Multiply => '*',
      BinaryOperator::Divide => '/',
      BinaryOperator::Power => '^',
    }
  }

  pub fn precedence(self) -> Precedence {
    match self {
      BinaryOperator::Add | BinaryOperator::Subtract => Precedence::new(1),
      BinaryOperator::Multiply | BinaryOperator::Divide => Precedence::new(2),
      BinaryOperator::Power => Precedence::new(3),
    }
  }

  pub fn associativity(self) -> Associativity {
    match self {
      BinaryOperator::Power => Associativity::RIGHT,
      _ => Associativity::LEFT,
    }
  }

  /// Whether an operator already sitting on the operator stack must
  /// be applied before `incoming` is pushed.
  pub fn yields_to(self, incoming: BinaryOperator) -> bool {
    let stack_prec = self.precedence();
    let incoming_prec = incoming.precedence();
    stack_prec > incoming_prec ||
      (stack_prec == incoming_prec && incoming.associativity().is_left_assoc())
  }

  /// Applies the operator to two operands. Division by an exact zero
  /// is the only failing case; everything else follows IEEE 754.
  pub fn apply(self, left: f64, right: f64) -> Result<f64, EvalError> {
    match self {
      BinaryOperator::Add => Ok(left + right),
      BinaryOperator::Subtract => Ok(left - right),
      BinaryOperator::Multiply => Ok(left * right),
      BinaryOperator::Divide => {
        if right == 0.0 {
          Err(EvalError::DivisionByZero)
        } else {
          Ok(left / right)
        }
      }
      BinaryOperator::Power => Ok(left.powf(right)),
    }
  }
}

impl Display for BinaryOperator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_symbol_roundtrip() {
    for op in BinaryOperator::ALL {
      assert_eq!(BinaryOperator::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(BinaryOperator::from_symbol('%'), None);
  }

  #[test]
  fn test_precedence_table() {
    assert!(BinaryOperator::Power.precedence() > BinaryOperator::Multiply.precedence());
    assert_eq!(BinaryOperator::Multiply.precedence(), BinaryOperator::Divide.precedence());
    assert!(BinaryOperator::Divide.precedence() > BinaryOperator::Add.precedence());
    assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Subtract.precedence());
  }

  #[test]
  fn test_left_assoc_operators_yield_to_equal_precedence() {
    assert!(BinaryOperator::Subtract.yields_to(BinaryOperator::Add));
    assert!(BinaryOperator::Multiply.yields_to(BinaryOperator::Divide));
    assert!(BinaryOperator::Multiply.yields_to(BinaryOperator::Subtract));
    assert!(!BinaryOperator::Add.yields_to(BinaryOperator::Multiply));
  }

  #[test]
  fn test_power_does_not_yield_to_power() {
    assert!(!BinaryOperator::Power.yields_to(BinaryOperator::Power));
    assert!(BinaryOperator::Power.yields_to(BinaryOperator::Multiply));
  }

  #[test]
  fn test_apply() {
    assert_eq!(BinaryOperator::Add.apply(2.0, 3.0), Ok(5.0));
    assert_eq!(BinaryOperator::Subtract.apply(2.0, 3.0), Ok(-1.0));
    assert_eq!(BinaryOperator::Multiply.apply(2.0, 3.0), Ok(6.0));
    assert_eq!(BinaryOperator::Divide.apply(3.0, 2.0), Ok(1.5));
    assert_eq!(BinaryOperator::Power.apply(2.0, 10.0), Ok(1024.0));
  }

  #[test]
  fn test_divide_by_zero() {
    assert_eq!(BinaryOperator::Divide.apply(5.0, 0.0), Err(EvalError::DivisionByZero));
    assert_eq!(BinaryOperator::Divide.apply(5.0, -0.0), Err(EvalError::DivisionByZero));
  }
}
