use super::source::SourceOffset;

use thiserror::Error;

/// Every way a single evaluation can fail. The engine reports the
/// first failure it encounters and stops scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EvalError {
  #[error("Unexpected character '{character}' at position {position}")]
  UnexpectedCharacter {
    character: char,
    position: SourceOffset,
  },
  #[error("Expected '(' after function name '{name}' at position {position}")]
  MalformedFunctionCall {
    name: String,
    position: SourceOffset,
  },
  #[error("Unknown function '{0}'")]
  UnknownFunction(String),
  #[error("Unmatched parenthesis")]
  UnmatchedParenthesis,
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Malformed expression")]
  MalformedExpression,
}
