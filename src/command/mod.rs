pub mod arguments;
mod base;
pub mod arithmetic;
pub mod calculus;
pub mod dispatch;
pub mod general;
pub mod graphics;
pub mod memory;
pub mod statistics;

pub use base::{Command, CommandContext, CommandOutput, CalculationResult};
use dispatch::CommandDispatchTable;
use crate::parsing::BinaryOperator;

use std::collections::HashMap;

pub fn default_dispatch_table() -> CommandDispatchTable {
  let mut map: HashMap<String, Box<dyn Command + Send + Sync>> = HashMap::new();

  // Basic arithmetic
  for op in BinaryOperator::ALL {
    map.insert(op.symbol().to_string(), Box::new(arithmetic::ArithmeticCommand::new(op)));
  }
  for op in arithmetic::IntegerOperation::ALL {
    map.insert(op.symbol().to_string(), Box::new(arithmetic::IntegerCommand::new(op)));
  }
  map.insert("t".to_string(), Box::new(arithmetic::TrigCommand));

  // Function commands
  map.insert("e".to_string(), Box::new(calculus::EvaluateCommand));
  map.insert("d".to_string(), Box::new(calculus::DerivativeCommand));
  map.insert("i".to_string(), Box::new(calculus::IntegralCommand));
  map.insert("p".to_string(), Box::new(graphics::PlotCommand));

  map.insert("s".to_string(), Box::new(statistics::StatisticsCommand));

  // Memory and history
  map.insert("m".to_string(), Box::new(memory::ShowMemoryCommand));
  map.insert("r".to_string(), Box::new(memory::RecallCommand));
  map.insert("w".to_string(), Box::new(memory::StoreCommand));
  map.insert("l".to_string(), Box::new(general::HistoryCommand));

  map.insert("c".to_string(), Box::new(general::clear_screen_command()));
  map.insert("h".to_string(), Box::new(general::help_command()));
  map.insert("q".to_string(), Box::new(general::QuitCommand));

  CommandDispatchTable::from_hash_map(map)
}
