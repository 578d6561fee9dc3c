
//! Fixed-width text blocks shown to the user.

use crate::memory::Memory;
use crate::parsing::UnaryFunction;

use itertools::Itertools;

use std::fmt::Write;

/// Total width, in characters, of framed boxes.
pub const DISPLAY_WIDTH: usize = 50;

pub const TITLE: &str = "Scientific Calculator v2.0";

/// Clears the screen and moves the cursor to the top-left corner.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Printed between iterations of the main loop.
pub const SEPARATOR: &str = "----------------------------------------";

fn rule(fill: char) -> String {
  format!("+{}+", fill.to_string().repeat(DISPLAY_WIDTH - 2))
}

fn framed_line(content: &str) -> String {
  format!("| {:<width$}|", content, width = DISPLAY_WIDTH - 3)
}

pub fn title() -> String {
  format!("{}\n{}\n{}\n", rule('='), framed_line(TITLE), rule('='))
}

/// The box shown after every calculation. Content wider than the box
/// is not truncated.
pub fn result_box(operation: &str, result: f64) -> String {
  format!(
    "{}\n{}\n{}\n{}\n",
    rule('-'),
    framed_line(&format!("Operation: {}", operation)),
    framed_line(&format!("Result: {:.6}", result)),
    rule('-'),
  )
}

pub fn help() -> String {
  let functions = UnaryFunction::ALL.iter().map(|f| f.name()).join(", ");
  let mut text = String::new();
  text.push_str("Here's what we can do:\n");
  text.push_str("1. Basic operations:\n");
  text.push_str("   +  : Add numbers together\n");
  text.push_str("   -  : Subtract numbers\n");
  text.push_str("   *  : Multiply numbers\n");
  text.push_str("   /  : Divide numbers\n");
  text.push_str("   ^  : Raise to a power\n");
  text.push_str("   !  : Factorial\n");
  text.push_str("   P  : Permutations of r items out of n\n");
  text.push_str("   C  : Combinations of r items out of n\n");
  text.push_str("   g  : Greatest common divisor\n");
  text.push_str("   L  : Least common multiple\n");
  text.push_str("   t  : Trigonometry (sin, cos, tan)\n\n");
  text.push_str("2. Advanced math:\n");
  text.push_str("   e  : Evaluate a function at a point\n");
  text.push_str("   d  : Find the derivative\n");
  text.push_str("   i  : Calculate the integral\n");
  text.push_str("   p  : Draw a function plot\n\n");
  text.push_str("3. Statistics:\n");
  text.push_str("   s  : Calculate statistics (mean, stddev, min, max, ...)\n\n");
  text.push_str("4. Memory and history:\n");
  text.push_str("   m  : Show memory\n");
  text.push_str("   r  : Recall from memory\n");
  text.push_str("   w  : Store a value in memory\n");
  text.push_str("   l  : View recent history\n\n");
  text.push_str("5. Other:\n");
  text.push_str("   c  : Clear the screen\n");
  text.push_str("   h  : Show this help\n");
  text.push_str("   q  : Quit\n\n");
  // Writing to a String cannot fail.
  let _ = writeln!(text, "Available math functions:\n   {}", functions);
  text.push_str("Note: Use 'x' as the variable when writing functions\n");
  text
}

pub fn memory_listing(memory: &Memory) -> String {
  if memory.is_empty() {
    return String::from("Memory is empty.\n");
  }
  let mut text = format!("Stored results ({}/{}):\n", memory.len(), memory.capacity());
  for (index, value) in memory.iter().enumerate() {
    let _ = writeln!(text, "{}: {:.6}", index, value);
  }
  text
}
