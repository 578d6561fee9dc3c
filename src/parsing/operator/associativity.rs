/// The associativity of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Associativity {
  left_assoc: bool,
}

impl Associativity {
  /// `a - b - c` is read as `(a - b) - c`.
  pub const LEFT: Associativity = Associativity { left_assoc: true };
  /// `a ^ b ^ c` is read as `a ^ (b ^ c)`.
  pub const RIGHT: Associativity = Associativity { left_assoc: false };

  pub const fn is_left_assoc(self) -> bool {
    self.left_assoc
  }
}
