//! Two-stack evaluation of infix expressions.
//!
//! Operands are pushed onto a value stack as they are read. Operators,
//! function markers, and open parentheses wait on an operator stack
//! until precedence or a closing parenthesis forces them to be
//! applied. Nothing is compiled or retained between calls.

use super::error::EvalError;
use super::function::UnaryFunction;
use super::operator::{BinaryOperator, Precedence};
use super::token::TokenData;
use super::tokenizer::Tokenizer;

use log::trace;

/// The name of the free variable in user-facing expressions.
pub const DEFAULT_VARIABLE: &str = "x";

/// The binding of the single free variable for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationContext<'a> {
  variable_name: &'a str,
  value: f64,
}

/// Unary minus binds like `*` and `/`: tighter than `+` and `-`,
/// looser than `^`, so `-x^2` is `-(x^2)`.
const NEGATION_PRECEDENCE: Precedence = Precedence::new(2);

#[derive(Debug, Clone, Copy, PartialEq)]
enum OpStackValue {
  Operator(BinaryOperator),
  /// Prefix minus, waiting for its operand to be complete.
  Negate,
  Function(UnaryFunction),
  Group,
}

#[derive(Debug, Default)]
struct Evaluator {
  operator_stack: Vec<OpStackValue>,
  value_stack: Vec<f64>,
  // True at the start, after an opener, and after an operator.
  expecting_operand: bool,
}

impl<'a> EvaluationContext<'a> {
  pub fn new(variable_name: &'a str, value: f64) -> Self {
    Self { variable_name, value }
  }

  pub fn variable_name(&self) -> &'a str {
    self.variable_name
  }

  pub fn value(&self) -> f64 {
    self.value
  }
}

impl EvaluationContext<'static> {
  /// Binds the default variable `x`.
  pub fn x(value: f64) -> Self {
    Self::new(DEFAULT_VARIABLE, value)
  }
}

/// Evaluates `expr` with the variable `x` bound to `x`.
pub fn evaluate(expr: &str, x: f64) -> Result<f64, EvalError> {
  evaluate_in(expr, &EvaluationContext::x(x))
}

/// Evaluates `expr` against an explicit variable binding.
pub fn evaluate_in(expr: &str, context: &EvaluationContext<'_>) -> Result<f64, EvalError> {
  let mut evaluator = Evaluator::new();
  for token in Tokenizer::new(expr, context.variable_name) {
    let token = token?;
    trace!("token {} at {}", token, token.span);
    match token.data {
      TokenData::Number(n) => evaluator.push_value(n),
      TokenData::Variable => evaluator.push_value(context.value),
      TokenData::Identifier(name) => {
        let function = UnaryFunction::from_name(&name).ok_or(EvalError::UnknownFunction(name))?;
        evaluator.open(OpStackValue::Function(function));
      }
      TokenData::LeftParen => evaluator.open(OpStackValue::Group),
      TokenData::RightParen => evaluator.close()?,
      TokenData::Operator(op) => evaluator.push_operator(op)?,
    }
  }
  evaluator.finish()
}

impl Evaluator {
  fn new() -> Self {
    Self { expecting_operand: true, ..Self::default() }
  }

  fn push_value(&mut self, value: f64) {
    self.value_stack.push(value);
    self.expecting_operand = false;
  }

  fn open(&mut self, opener: OpStackValue) {
    self.operator_stack.push(opener);
    self.expecting_operand = true;
  }

  fn push_operator(&mut self, op: BinaryOperator) -> Result<(), EvalError> {
    if op == BinaryOperator::Subtract && self.expecting_operand {
      self.operator_stack.push(OpStackValue::Negate);
      return Ok(());
    }
    loop {
      match self.operator_stack.last() {
        Some(&OpStackValue::Operator(stack_op)) if stack_op.yields_to(op) => {
          self.operator_stack.pop();
          self.apply_operator(stack_op)?;
        }
        Some(OpStackValue::Negate) if op.precedence() <= NEGATION_PRECEDENCE => {
          self.operator_stack.pop();
          self.apply_negation()?;
        }
        _ => break,
      }
    }
    self.operator_stack.push(OpStackValue::Operator(op));
    self.expecting_operand = true;
    Ok(())
  }

  fn close(&mut self) -> Result<(), EvalError> {
    loop {
      match self.operator_stack.pop() {
        None => return Err(EvalError::UnmatchedParenthesis),
        Some(OpStackValue::Group) => break,
        Some(OpStackValue::Function(function)) => {
          self.apply_function(function)?;
          break;
        }
        Some(OpStackValue::Operator(op)) => self.apply_operator(op)?,
        Some(OpStackValue::Negate) => self.apply_negation()?,
      }
    }
    self.expecting_operand = false;
    Ok(())
  }

  fn finish(mut self) -> Result<f64, EvalError> {
    while let Some(stack_value) = self.operator_stack.pop() {
      match stack_value {
        OpStackValue::Operator(op) => self.apply_operator(op)?,
        OpStackValue::Negate => self.apply_negation()?,
        OpStackValue::Function(_) | OpStackValue::Group => return Err(EvalError::UnmatchedParenthesis),
      }
    }
    match self.value_stack.as_slice() {
      [result] => Ok(*result),
      _ => Err(EvalError::MalformedExpression),
    }
  }

  fn apply_operator(&mut self, op: BinaryOperator) -> Result<(), EvalError> {
    let right = self.value_stack.pop().ok_or(EvalError::MalformedExpression)?;
    let left = self.value_stack.pop().ok_or(EvalError::MalformedExpression)?;
    self.value_stack.push(op.apply(left, right)?);
    Ok(())
  }

  fn apply_negation(&mut self) -> Result<(), EvalError> {
    let arg = self.value_stack.last_mut().ok_or(EvalError::MalformedExpression)?;
    *arg = -*arg;
    Ok(())
  }

  fn apply_function(&mut self, function: UnaryFunction) -> Result<(), EvalError> {
    let arg = self.value_stack.last_mut().ok_or(EvalError::MalformedExpression)?;
    *arg = function.apply(*arg);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::source::SourceOffset;

  use approx::assert_abs_diff_eq;

  fn eval(expr: &str) -> Result<f64, EvalError> {
    evaluate(expr, 0.0)
  }

  #[test]
  fn test_precedence() {
    assert_eq!(eval("2+3*4"), Ok(14.0));
    assert_eq!(eval("(2+3)*4"), Ok(20.0));
    assert_eq!(eval("2*3+4"), Ok(10.0));
    assert_eq!(eval("1+2^3*2"), Ok(17.0));
  }

  #[test]
  fn test_left_assoc() {
    assert_eq!(eval("10-4-3"), Ok(3.0));
    assert_eq!(eval("64/4/2"), Ok(8.0));
    assert_eq!(eval("8/2*4"), Ok(16.0));
    assert_eq!(eval("1-2+3"), Ok(2.0));
  }

  #[test]
  fn test_power_is_right_assoc() {
    assert_eq!(eval("2^3^2"), Ok(512.0));
    assert_eq!(eval("(2^3)^2"), Ok(64.0));
  }

  #[test]
  fn test_unary_minus() {
    assert_eq!(eval("-3+5"), Ok(2.0));
    assert_eq!(eval("4*-2"), Ok(-8.0));
    assert_eq!(eval("-2*3"), Ok(-6.0));
    assert_eq!(eval("2*-3*4"), Ok(-24.0));
    assert_eq!(eval("1 - -1"), Ok(2.0));
    assert_eq!(eval("2--3+1"), Ok(6.0));
    assert_eq!(eval("(-4)"), Ok(-4.0));
    assert_eq!(eval("2^-1"), Ok(0.5));
    assert_eq!(evaluate("-x^2", 3.0), Ok(-9.0));
  }

  #[test]
  fn test_unary_minus_before_same_precedence() {
    assert_eq!(eval("4/-2/2"), Ok(-1.0));
    assert_eq!(eval("2^-1*4"), Ok(2.0));
    assert_eq!(eval("8/-2*2"), Ok(-8.0));
    assert_eq!(eval("-6/3"), Ok(-2.0));
    assert_eq!(eval("-2^2*3"), Ok(-12.0));
    assert_eq!(eval("--3"), Ok(3.0));
    assert_eq!(eval("-(1+2)*2"), Ok(-6.0));
    assert_eq!(eval("-"), Err(EvalError::MalformedExpression));
  }

  #[test]
  fn test_whitespace_is_ignored() {
    assert_eq!(eval("  2 +\t3 * 4  "), Ok(14.0));
  }

  #[test]
  fn test_functions() {
    assert_eq!(eval("sin(0)"), Ok(0.0));
    assert_eq!(eval("sqrt(4)"), Ok(2.0));
    assert_eq!(eval("exp(0)"), Ok(1.0));
    assert_eq!(eval("cos(0)"), Ok(1.0));
    assert_eq!(eval("log(1)"), Ok(0.0));
    assert_eq!(eval("sqrt(9)+sqrt(16)"), Ok(7.0));
    assert_eq!(eval("2*sqrt(2+2)^2"), Ok(8.0));
    assert_eq!(eval("sqrt(sqrt(16))"), Ok(2.0));
  }

  #[test]
  fn test_function_argument_is_full_expression() {
    assert_eq!(eval("sqrt(3*3+16)"), Ok(5.0));
    assert_eq!(eval("sqrt((1+3)*(2+2))"), Ok(4.0));
  }

  #[test]
  fn test_trig_at_variable() {
    assert_abs_diff_eq!(evaluate("sin(x)", std::f64::consts::FRAC_PI_2).unwrap(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(evaluate("tan(x)", std::f64::consts::FRAC_PI_4).unwrap(), 1.0, epsilon = 1e-12);
  }

  #[test]
  fn test_variable_substitution() {
    assert_eq!(evaluate("x^2", 3.0), Ok(9.0));
    assert_eq!(evaluate("sin(x)", 0.0), Ok(0.0));
    assert_eq!(evaluate("x*x - 2*x + 1", 1.0), Ok(0.0));
  }

  #[test]
  fn test_custom_variable() {
    let context = EvaluationContext::new("t", 2.0);
    assert_eq!(evaluate_in("t^3", &context), Ok(8.0));
    assert!(matches!(evaluate_in("x", &context), Err(EvalError::MalformedFunctionCall { .. })));
  }

  #[test]
  fn test_function_requires_paren() {
    assert_eq!(
      eval("sin x"),
      Err(EvalError::MalformedFunctionCall { name: "sin".to_owned(), position: SourceOffset(0) }),
    );
  }

  #[test]
  fn test_unknown_function() {
    assert_eq!(eval("foo(1)"), Err(EvalError::UnknownFunction("foo".to_owned())));
    assert_eq!(eval("1+ln(2)"), Err(EvalError::UnknownFunction("ln".to_owned())));
  }

  #[test]
  fn test_division_by_zero() {
    assert_eq!(eval("5/0"), Err(EvalError::DivisionByZero));
    assert_eq!(eval("5/(2-2)"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("1/x", 0.0), Err(EvalError::DivisionByZero));
    assert_eq!(eval("0/5"), Ok(0.0));
  }

  #[test]
  fn test_unmatched_parens() {
    assert_eq!(eval("(1+2"), Err(EvalError::UnmatchedParenthesis));
    assert_eq!(eval("1+2)"), Err(EvalError::UnmatchedParenthesis));
    assert_eq!(eval("sin(1"), Err(EvalError::UnmatchedParenthesis));
    assert_eq!(eval(")"), Err(EvalError::UnmatchedParenthesis));
    assert_eq!(eval("((1)"), Err(EvalError::UnmatchedParenthesis));
  }

  #[test]
  fn test_unexpected_character() {
    assert_eq!(
      eval("2 # 3"),
      Err(EvalError::UnexpectedCharacter { character: '#', position: SourceOffset(2) }),
    );
  }

  #[test]
  fn test_first_error_wins() {
    // The scan stops at the bad character, so the later division by
    // zero is never reached.
    assert!(matches!(eval("1 & 5/0"), Err(EvalError::UnexpectedCharacter { .. })));
    assert_eq!(eval("5/0 + foo(1)"), Err(EvalError::DivisionByZero));
  }

  #[test]
  fn test_malformed_expressions() {
    assert_eq!(eval(""), Err(EvalError::MalformedExpression));
    assert_eq!(eval("   "), Err(EvalError::MalformedExpression));
    assert_eq!(eval("2+"), Err(EvalError::MalformedExpression));
    assert_eq!(eval("*3"), Err(EvalError::MalformedExpression));
    assert_eq!(eval("2 3"), Err(EvalError::MalformedExpression));
    assert_eq!(eval("()"), Err(EvalError::MalformedExpression));
    assert_eq!(eval("sin()"), Err(EvalError::MalformedExpression));
    assert_eq!(eval("2(3)"), Err(EvalError::MalformedExpression));
    assert_eq!(evaluate("2x", 1.0), Err(EvalError::MalformedExpression));
    assert_eq!(eval("+3"), Err(EvalError::MalformedExpression));
  }

  #[test]
  fn test_domain_errors_are_values() {
    assert!(evaluate("sqrt(x)", -1.0).unwrap().is_nan());
    assert!(evaluate("log(x)", -1.0).unwrap().is_nan());
    assert_eq!(evaluate("log(x)", 0.0), Ok(f64::NEG_INFINITY));
  }

  #[test]
  fn test_repeated_evaluation_is_idempotent() {
    let expr = "sin(x)+x^2";
    let first = evaluate(expr, 1.5);
    for _ in 0..10 {
      assert_eq!(evaluate(expr, 1.5), first);
    }
    assert_eq!(eval("5/0"), eval("5/0"));
  }
}
