use super::error::EvalError;
use super::operator::BinaryOperator;
use super::source::{SourceOffset, Span};
use super::token::{Token, TokenData};

use regex::Regex;
use once_cell::sync::Lazy;

/// Cursor over an input string. Tracks the absolute offset of the
/// unread remainder.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

#[derive(Debug, Clone)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: SourceOffset,
  end: SourceOffset,
}

/// Single left-to-right scan over an expression. Yields tokens until
/// the input is exhausted or an error is produced; nothing is yielded
/// after the first error.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
  state: TokenizerState<'a>,
  variable_name: &'a str,
  failed: bool,
}

static IDENTIFIER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+").unwrap());
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").unwrap());
static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*").unwrap());

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self { input, position: SourceOffset(0) }
  }

  pub fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Advances past `amount` bytes, never beyond the end of the input,
  /// and returns the skipped portion.
  pub fn advance(&mut self, mut amount: usize) -> TokenizerMatch<'a> {
    amount = amount.min(self.input.len());
    let start = self.position;
    let (prefix, suffix) = self.input.split_at(amount);
    self.position += amount;
    self.input = suffix;
    TokenizerMatch { matched_str: prefix, start, end: start + amount }
  }

  /// Advances past the next character, if any.
  pub fn advance_char(&mut self) -> Option<TokenizerMatch<'a>> {
    let ch = self.peek()?;
    Some(self.advance(ch.len_utf8()))
  }

  /// The regex MUST be anchored at the start of the input.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");
    (!m.is_empty()).then(|| self.advance(m.len()))
  }

  pub fn consume_spaces(&mut self) {
    self.read_regex(&SPACES_RE);
  }
}

impl<'a> TokenizerMatch<'a> {
  pub fn as_str(&self) -> &'a str {
    self.matched_str
  }

  pub fn span(&self) -> Span {
    Span::new(self.start, self.end)
  }
}

impl<'a> Tokenizer<'a> {
  pub fn new(input: &'a str, variable_name: &'a str) -> Self {
    Self {
      state: TokenizerState::new(input),
      variable_name,
      failed: false,
    }
  }

  fn read_token(&mut self) -> Option<Result<Token, EvalError>> {
    self.state.consume_spaces();
    let next_char = self.state.peek()?;

    if let Some(m) = self.state.read_regex(&IDENTIFIER_RE) {
      return Some(self.read_identifier(m));
    }
    if let Some(m) = self.state.read_regex(&NUMBER_RE) {
      let token = m.as_str().parse::<f64>()
        .map(|n| Token::new(TokenData::Number(n), m.span()))
        .map_err(|_| EvalError::MalformedExpression);
      return Some(token);
    }

    let position = self.state.current_pos();
    let m = self.state.advance_char()?;
    let data = match next_char {
      '(' => TokenData::LeftParen,
      ')' => TokenData::RightParen,
      c => match BinaryOperator::from_symbol(c) {
        Some(op) => TokenData::Operator(op),
        None => return Some(Err(EvalError::UnexpectedCharacter { character: c, position })),
      },
    };
    Some(Ok(Token::new(data, m.span())))
  }

  fn read_identifier(&mut self, name: TokenizerMatch<'a>) -> Result<Token, EvalError> {
    if name.as_str() == self.variable_name {
      return Ok(Token::new(TokenData::Variable, name.span()));
    }
    if self.state.peek() != Some('(') {
      return Err(EvalError::MalformedFunctionCall {
        name: name.as_str().to_owned(),
        position: name.span().start,
      });
    }
    let paren = self.state.advance(1);
    let span = Span::new(name.span().start, paren.span().end);
    Ok(Token::new(TokenData::Identifier(name.as_str().to_owned()), span))
  }
}

impl<'a> Iterator for Tokenizer<'a> {
  type Item = Result<Token, EvalError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.failed {
      return None;
    }
    let token = self.read_token();
    if matches!(token, Some(Err(_))) {
      self.failed = true;
    }
    token
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn tokenize(input: &str) -> Result<Vec<TokenData>, EvalError> {
    Tokenizer::new(input, "x").map(|t| t.map(|t| t.data)).collect()
  }

  #[test]
  fn test_advance() {
    let mut state = TokenizerState::new("abcdefg");
    assert_eq!(state.advance(3).as_str(), "abc");
    assert_eq!(state.current_pos(), SourceOffset(3));
    assert_eq!(state.advance(99).as_str(), "defg");
    assert!(state.is_eof());
    assert_eq!(state.advance(1).as_str(), "");
  }

  #[test]
  fn test_empty_input() {
    assert_eq!(tokenize(""), Ok(vec![]));
    assert_eq!(tokenize("   \t "), Ok(vec![]));
  }

  #[test]
  fn test_numbers() {
    assert_eq!(tokenize("12"), Ok(vec![TokenData::Number(12.0)]));
    assert_eq!(tokenize("3.25"), Ok(vec![TokenData::Number(3.25)]));
    assert_eq!(tokenize(".5"), Ok(vec![TokenData::Number(0.5)]));
    assert_eq!(tokenize("7."), Ok(vec![TokenData::Number(7.0)]));
  }

  #[test]
  fn test_number_takes_at_most_one_dot() {
    assert_eq!(tokenize("1.2.3"), Ok(vec![TokenData::Number(1.2), TokenData::Number(0.3)]));
  }

  #[test]
  fn test_operators_and_parens() {
    assert_eq!(
      tokenize("(1 + 2) * 3 ^ 4 / 5 - 6"),
      Ok(vec![
        TokenData::LeftParen,
        TokenData::Number(1.0),
        TokenData::Operator(BinaryOperator::Add),
        TokenData::Number(2.0),
        TokenData::RightParen,
        TokenData::Operator(BinaryOperator::Multiply),
        TokenData::Number(3.0),
        TokenData::Operator(BinaryOperator::Power),
        TokenData::Number(4.0),
        TokenData::Operator(BinaryOperator::Divide),
        TokenData::Number(5.0),
        TokenData::Operator(BinaryOperator::Subtract),
        TokenData::Number(6.0),
      ]),
    );
  }

  #[test]
  fn test_variable() {
    assert_eq!(
      tokenize("x*x"),
      Ok(vec![TokenData::Variable, TokenData::Operator(BinaryOperator::Multiply), TokenData::Variable]),
    );
  }

  #[test]
  fn test_custom_variable_name() {
    let tokens: Result<Vec<_>, _> = Tokenizer::new("t+x", "t").map(|t| t.map(|t| t.data)).collect();
    assert_eq!(
      tokens,
      Err(EvalError::MalformedFunctionCall { name: "x".to_owned(), position: SourceOffset(2) }),
    );
  }

  #[test]
  fn test_function_call_consumes_paren() {
    let tokens: Vec<_> = Tokenizer::new("sin(x)", "x").collect::<Result<_, _>>().unwrap();
    assert_eq!(tokens[0].data, TokenData::Identifier("sin".to_owned()));
    assert_eq!(tokens[0].span, Span::new(SourceOffset(0), SourceOffset(4)));
    assert_eq!(tokens[1].data, TokenData::Variable);
    assert_eq!(tokens[2].data, TokenData::RightParen);
    assert_eq!(tokens.len(), 3);
  }

  #[test]
  fn test_unknown_names_are_still_tokenized() {
    assert_eq!(
      tokenize("foo(1)"),
      Ok(vec![TokenData::Identifier("foo".to_owned()), TokenData::Number(1.0), TokenData::RightParen]),
    );
  }

  #[test]
  fn test_function_without_paren() {
    assert_eq!(
      tokenize("sin x"),
      Err(EvalError::MalformedFunctionCall { name: "sin".to_owned(), position: SourceOffset(0) }),
    );
    assert_eq!(
      tokenize("2 + cos"),
      Err(EvalError::MalformedFunctionCall { name: "cos".to_owned(), position: SourceOffset(4) }),
    );
  }

  #[test]
  fn test_unexpected_character() {
    assert_eq!(
      tokenize("1 % 2"),
      Err(EvalError::UnexpectedCharacter { character: '%', position: SourceOffset(2) }),
    );
    assert_eq!(
      tokenize("."),
      Err(EvalError::UnexpectedCharacter { character: '.', position: SourceOffset(0) }),
    );
  }

  #[test]
  fn test_no_tokens_after_error() {
    let mut tokenizer = Tokenizer::new("1 $ 2", "x");
    assert!(matches!(tokenizer.next(), Some(Ok(_))));
    assert!(matches!(tokenizer.next(), Some(Err(EvalError::UnexpectedCharacter { .. }))));
    assert!(tokenizer.next().is_none());
  }
}
