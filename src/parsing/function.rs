//! The fixed library of unary functions callable from an expression.

use phf::phf_map;

use std::fmt::{self, Display, Formatter};

/// A named single-argument function. Domain errors are not checked
/// here: `sqrt(-1)` is NaN and `log(0)` is negative infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryFunction {
  Sin,
  Cos,
  Tan,
  Exp,
  Log,
  Sqrt,
}

static FUNCTIONS_BY_NAME: phf::Map<&'static str, UnaryFunction> = phf_map! {
  "sin" => UnaryFunction::Sin,
  "cos" => UnaryFunction::Cos,
  "tan" => UnaryFunction::Tan,
  "exp" => UnaryFunction::Exp,
  "log" => UnaryFunction::Log,
  "sqrt" => UnaryFunction::Sqrt,
};

impl UnaryFunction {
  pub const ALL: [UnaryFunction; 6] = [
    UnaryFunction::Sin, UnaryFunction::Cos, UnaryFunction::Tan,
    UnaryFunction::Exp, UnaryFunction::Log, UnaryFunction::Sqrt,
  ];

  pub fn from_name(name: &str) -> Option<Self> {
    FUNCTIONS_BY_NAME.get(name).copied()
  }

  pub fn name(self) -> &'static str {
    match self {
      UnaryFunction::Sin => "sin",
      UnaryFunction::Cos => "cos",
      UnaryFunction::Tan => "tan",
      UnaryFunction::Exp => "exp",
      UnaryFunction::Log => "log",
      UnaryFunction::Sqrt => "sqrt",
    }
  }

  pub fn apply(self, arg: f64) -> f64 {
    match self {
      UnaryFunction::Sin => arg.sin(),
      UnaryFunction::Cos => arg.cos(),
      UnaryFunction::Tan => arg.tan(),
      UnaryFunction::Exp => arg.exp(),
      // Natural logarithm.
      UnaryFunction::Log => arg.ln(),
      UnaryFunction::Sqrt => arg.sqrt(),
    }
  }
}

impl Display for UnaryFunction {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lookup_by_name() {
    assert_eq!(UnaryFunction::from_name("sin"), Some(UnaryFunction::Sin));
    assert_eq!(UnaryFunction::from_name("sqrt"), Some(UnaryFunction::Sqrt));
    assert_eq!(UnaryFunction::from_name("ln"), None);
    assert_eq!(UnaryFunction::from_name("SIN"), None);
  }

  #[test]
  fn test_names_match_lookup() {
    assert_eq!(FUNCTIONS_BY_NAME.len(), UnaryFunction::ALL.len());
    for function in UnaryFunction::ALL {
      assert_eq!(UnaryFunction::from_name(function.name()), Some(function));
    }
  }

  #[test]
  fn test_log_is_natural() {
    assert_eq!(UnaryFunction::Log.apply(1.0), 0.0);
    assert!((UnaryFunction::Log.apply(std::f64::consts::E) - 1.0).abs() < 1e-12);
  }

  #[test]
  fn test_domain_errors_propagate() {
    assert!(UnaryFunction::Sqrt.apply(-1.0).is_nan());
    assert!(UnaryFunction::Log.apply(-1.0).is_nan());
    assert_eq!(UnaryFunction::Log.apply(0.0), f64::NEG_INFINITY);
  }
}
