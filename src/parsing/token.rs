use super::operator::BinaryOperator;
use super::source::Span;

use std::fmt::{self, Display, Formatter};

/// A single lexical unit of an expression, together with the portion
/// of the input it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
  pub data: TokenData,
  pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenData {
  Number(f64),
  /// The free variable, bound by the caller.
  Variable,
  /// A function name. The tokenizer only produces this when the name
  /// is immediately followed by `(`, and the parenthesis is part of
  /// this token.
  Identifier(String),
  Operator(BinaryOperator),
  LeftParen,
  RightParen,
}

impl Token {
  pub fn new(data: TokenData, span: Span) -> Self {
    Self { data, span }
  }
}

impl Display for TokenData {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenData::Number(n) => write!(f, "{}", n),
      TokenData::Variable => write!(f, "<var>"),
      TokenData::Identifier(name) => write!(f, "{}(", name),
      TokenData::Operator(op) => write!(f, "{}", op),
      TokenData::LeftParen => write!(f, "("),
      TokenData::RightParen => write!(f, ")"),
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.data)
  }
}
