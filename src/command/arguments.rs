
//! Prompting for and validating the values a command needs.
//!
//! Every reader here treats end of input as
//! [`InputError::EndOfInput`], which the main loop handles like a quit
//! command.

use super::base::CommandContext;

use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
  #[error("Hmm, \"{0}\" doesn't look like a valid number. Let's try again!")]
  InvalidNumber(String),
  #[error("Hmm, \"{0}\" doesn't look like a whole number. Let's try again!")]
  InvalidInteger(String),
  #[error("Expected {expected} number(s), got {actual}")]
  WrongCount { expected: usize, actual: usize },
  #[error("Invalid index \"{0}\"")]
  InvalidIndex(String),
  #[error("Unknown trigonometric function \"{0}\", expected sin, cos or tan")]
  UnknownTrigFunction(String),
  #[error("End of input")]
  EndOfInput,
}

/// Parses one finite number, ignoring surrounding whitespace.
pub fn parse_number(token: &str) -> Result<f64, InputError> {
  let token = token.trim();
  match token.parse::<f64>() {
    Ok(value) if value.is_finite() => Ok(value),
    _ => Err(InputError::InvalidNumber(token.to_owned())),
  }
}

/// Parses a whitespace-separated list of numbers. Fails on the first
/// token that is not a number.
pub fn parse_numbers(line: &str) -> Result<Vec<f64>, InputError> {
  line.split_whitespace().map(parse_number).collect()
}

pub fn parse_pair(line: &str) -> Result<(f64, f64), InputError> {
  let numbers = parse_numbers(line)?;
  let actual = numbers.len();
  numbers.into_iter().collect_tuple().ok_or(InputError::WrongCount { expected: 2, actual })
}

/// Parses exactly `count` whitespace-separated integers.
pub fn parse_integers(line: &str, count: usize) -> Result<Vec<i64>, InputError> {
  let integers = line.split_whitespace()
    .map(|token| token.parse().map_err(|_| InputError::InvalidInteger(token.to_owned())))
    .collect::<Result<Vec<i64>, _>>()?;
  if integers.len() != count {
    return Err(InputError::WrongCount { expected: count, actual: integers.len() });
  }
  Ok(integers)
}

pub fn parse_index(token: &str) -> Result<usize, InputError> {
  let token = token.trim();
  token.parse().map_err(|_| InputError::InvalidIndex(token.to_owned()))
}

/// Prompts for a line of input, trimmed of surrounding whitespace.
pub fn read_reply(context: &mut CommandContext<'_>, prompt: &str) -> anyhow::Result<String> {
  match context.terminal.prompt(prompt)? {
    Some(line) => Ok(line.trim().to_owned()),
    None => Err(InputError::EndOfInput.into()),
  }
}

pub fn read_number(context: &mut CommandContext<'_>, prompt: &str) -> anyhow::Result<f64> {
  let reply = read_reply(context, prompt)?;
  Ok(parse_number(&reply)?)
}

pub fn read_numbers(context: &mut CommandContext<'_>, prompt: &str) -> anyhow::Result<Vec<f64>> {
  let reply = read_reply(context, prompt)?;
  Ok(parse_numbers(&reply)?)
}

pub fn read_pair(context: &mut CommandContext<'_>, prompt: &str) -> anyhow::Result<(f64, f64)> {
  let reply = read_reply(context, prompt)?;
  Ok(parse_pair(&reply)?)
}

pub fn read_integers(context: &mut CommandContext<'_>, prompt: &str, count: usize) -> anyhow::Result<Vec<i64>> {
  let reply = read_reply(context, prompt)?;
  Ok(parse_integers(&reply, count)?)
}

pub fn read_index(context: &mut CommandContext<'_>, prompt: &str) -> anyhow::Result<usize> {
  let reply = read_reply(context, prompt)?;
  Ok(parse_index(&reply)?)
}
