
/// The binding strength of a binary operator. Higher values bind
/// more tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u8);

impl Precedence {
  pub const fn new(n: u8) -> Precedence {
    Precedence(n)
  }
}
