
//! Line-oriented user interaction.

use std::io::{self, BufRead, Write};

/// A source of user input lines and a sink for output text.
pub trait Terminal {
  /// Reads one line, without its trailing newline. Returns `None` at
  /// end of input.
  fn read_line(&mut self) -> io::Result<Option<String>>;

  fn write_str(&mut self, text: &str) -> io::Result<()>;

  fn flush(&mut self) -> io::Result<()>;

  /// Writes `prompt` and reads the user's reply.
  fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
    self.write_str(prompt)?;
    self.flush()?;
    self.read_line()
  }
}

/// [`Terminal`] over an arbitrary reader and writer, usually standard
/// input and output.
#[derive(Debug)]
pub struct StdTerminal<R, W> {
  input: R,
  output: W,
}

impl<R: BufRead, W: Write> StdTerminal<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  pub fn into_output(self) -> W {
    self.output
  }
}

impl<R: BufRead, W: Write> Terminal for StdTerminal<R, W> {
  fn read_line(&mut self) -> io::Result<Option<String>> {
    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
  }

  fn write_str(&mut self, text: &str) -> io::Result<()> {
    self.output.write_all(text.as_bytes())
  }

  fn flush(&mut self) -> io::Result<()> {
    self.output.flush()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::io::Cursor;

  #[test]
  fn test_read_lines_until_eof() {
    let mut terminal = StdTerminal::new(Cursor::new("first\r\nsecond\nlast"), Vec::new());
    assert_eq!(terminal.read_line().unwrap(), Some(String::from("first")));
    assert_eq!(terminal.read_line().unwrap(), Some(String::from("second")));
    assert_eq!(terminal.read_line().unwrap(), Some(String::from("last")));
    assert_eq!(terminal.read_line().unwrap(), None);
  }

  #[test]
  fn test_prompt_writes_before_reading() {
    let mut terminal = StdTerminal::new(Cursor::new("42\n"), Vec::new());
    let reply = terminal.prompt("Number: ").unwrap();
    assert_eq!(reply, Some(String::from("42")));
    assert_eq!(terminal.into_output(), b"Number: ");
  }
}
