use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign};

/// Byte position within an expression string. Carried by tokens so
/// that errors can point at the offending input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceOffset(pub usize);

/// Half-open range of source offsets covered by a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
  pub start: SourceOffset,
  pub end: SourceOffset,
}

impl Span {
  pub fn new(start: SourceOffset, end: SourceOffset) -> Self {
    Self { start, end }
  }
}

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Add<usize> for SourceOffset {
  type Output = Self;

  fn add(self, rhs: usize) -> Self::Output {
    Self(self.0 + rhs)
  }
}

impl AddAssign<usize> for SourceOffset {
  fn add_assign(&mut self, rhs: usize) {
    self.0 += rhs
  }
}

impl Display for Span {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.start, self.end)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_span_display() {
    assert_eq!(Span::new(SourceOffset(2), SourceOffset(5)).to_string(), "2-5");
  }

  #[test]
  fn test_offset_arithmetic() {
    let mut offset = SourceOffset(3) + 2;
    assert_eq!(offset, SourceOffset(5));
    offset += 1;
    assert_eq!(offset.to_string(), "6");
  }
}
