//! The expression engine: tokenizing and evaluating single-variable
//! infix expressions.

pub mod error;
pub mod function;
pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod token;
pub mod tokenizer;

pub use error::EvalError;
pub use function::UnaryFunction;
pub use operator::BinaryOperator;
pub use shunting_yard::{evaluate, evaluate_in, EvaluationContext, DEFAULT_VARIABLE};
