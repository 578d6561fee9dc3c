
//! An interactive command-line scientific calculator: an infix
//! expression evaluator with numeric calculus, statistics, a recall
//! memory, an operation history and ASCII function plots.

pub mod arithmetic;
pub mod calculus;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod graphics;
pub mod history;
pub mod logging;
pub mod memory;
pub mod parsing;
pub mod runner;
pub mod state;
pub mod statistics;
pub mod terminal;
