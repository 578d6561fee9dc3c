
//! Commands for basic arithmetic on lists of numbers, the integer
//! helpers, and trigonometry.

use super::arguments::{read_integers, read_numbers, read_number, read_reply, InputError};
use super::base::{Command, CommandContext, CommandOutput};
use crate::arithmetic::{self, calculate, ArithmeticError};
use crate::parsing::{evaluate, BinaryOperator, UnaryFunction};
use crate::state::ApplicationState;

use itertools::Itertools;
use log::debug;

/// Folds a user-supplied list of numbers with a binary operator.
#[derive(Debug, Clone, Copy)]
pub struct ArithmeticCommand {
  operator: BinaryOperator,
}

/// Evaluates `sin`, `cos` or `tan` at a user-supplied angle in
/// radians.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrigCommand;

/// The integer helpers: factorial, selections, and divisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerOperation {
  Factorial,
  Permutations,
  Combinations,
  Gcd,
  Lcm,
}

/// Reads integer arguments for an [`IntegerOperation`] and applies
/// it.
#[derive(Debug, Clone, Copy)]
pub struct IntegerCommand {
  operation: IntegerOperation,
}

impl ArithmeticCommand {
  pub fn new(operator: BinaryOperator) -> Self {
    Self { operator }
  }

  pub fn operator(&self) -> BinaryOperator {
    self.operator
  }
}

impl Command for ArithmeticCommand {
  fn run_command(&self, _: &mut ApplicationState, context: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    let numbers = read_numbers(context, "Enter the numbers to calculate (separated by spaces): ")?;
    let result = calculate(self.operator, &numbers)?;
    let operation = numbers.iter()
      .map(|n| format!("{:.2}", n))
      .join(&format!(" {} ", self.operator.symbol()));
    debug!("{} = {}", operation, result);
    Ok(CommandOutput::calculated(operation, result))
  }
}

impl TrigCommand {
  fn parse_function(name: &str) -> Result<UnaryFunction, InputError> {
    match UnaryFunction::from_name(name) {
      Some(f @ (UnaryFunction::Sin | UnaryFunction::Cos | UnaryFunction::Tan)) => Ok(f),
      _ => Err(InputError::UnknownTrigFunction(name.to_owned())),
    }
  }
}

impl Command for TrigCommand {
  fn run_command(&self, _: &mut ApplicationState, context: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    let name = read_reply(context, "Which function (sin, cos, tan)? ")?;
    let function = TrigCommand::parse_function(&name)?;
    let angle = read_number(context, "Enter the angle in radians: ")?;
    let result = evaluate(&format!("{}(x)", function.name()), angle)?;
    Ok(CommandOutput::calculated(format!("{}({:.2})", function.name(), angle), result))
  }
}

impl IntegerOperation {
  pub const ALL: [IntegerOperation; 5] = [
    IntegerOperation::Factorial,
    IntegerOperation::Permutations,
    IntegerOperation::Combinations,
    IntegerOperation::Gcd,
    IntegerOperation::Lcm,
  ];

  /// The command key selecting this operation.
  pub fn symbol(self) -> char {
    match self {
      IntegerOperation::Factorial => '!',
      IntegerOperation::Permutations => 'P',
      IntegerOperation::Combinations => 'C',
      IntegerOperation::Gcd => 'g',
      IntegerOperation::Lcm => 'L',
    }
  }

  pub fn arity(self) -> usize {
    match self {
      IntegerOperation::Factorial => 1,
      _ => 2,
    }
  }

  fn prompt(self) -> &'static str {
    match self {
      IntegerOperation::Factorial => "Enter a non-negative integer: ",
      IntegerOperation::Permutations | IntegerOperation::Combinations => "Enter n and r: ",
      IntegerOperation::Gcd | IntegerOperation::Lcm => "Enter two integers: ",
    }
  }

  pub fn apply(self, args: &[i64]) -> Result<f64, ArithmeticError> {
    match (self, args) {
      (IntegerOperation::Factorial, &[n]) => arithmetic::factorial(n),
      (IntegerOperation::Permutations, &[n, r]) => arithmetic::permutations(n, r),
      (IntegerOperation::Combinations, &[n, r]) => arithmetic::combinations(n, r),
      (IntegerOperation::Gcd, &[a, b]) => Ok(arithmetic::gcd(a, b) as f64),
      (IntegerOperation::Lcm, &[a, b]) => Ok(arithmetic::lcm(a, b)),
      _ => Err(ArithmeticError::WrongArity {
        operator: self.symbol(),
        expected: self.arity(),
        actual: args.len(),
      }),
    }
  }

  fn describe(self, args: &[i64]) -> String {
    let joined = args.iter().join(", ");
    match self {
      IntegerOperation::Factorial => format!("{}!", joined),
      IntegerOperation::Permutations => format!("P({})", joined),
      IntegerOperation::Combinations => format!("C({})", joined),
      IntegerOperation::Gcd => format!("gcd({})", joined),
      IntegerOperation::Lcm => format!("lcm({})", joined),
    }
  }
}

impl IntegerCommand {
  pub fn new(operation: IntegerOperation) -> Self {
    Self { operation }
  }
}

impl Command for IntegerCommand {
  fn run_command(&self, _: &mut ApplicationState, context: &mut CommandContext<'_>) -> anyhow::Result<CommandOutput> {
    let args = read_integers(context, self.operation.prompt(), self.operation.arity())?;
    let result = self.operation.apply(&args)?;
    Ok(CommandOutput::calculated(self.operation.describe(&args), result))
  }
}
