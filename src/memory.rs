//! Bounded recall memory for calculated results.

use thiserror::Error;

use std::collections::VecDeque;

/// A first-in, first-out store holding at most `capacity` values.
/// Storing into a full memory evicts the oldest value. Index 0 is
/// always the oldest value still held.
#[derive(Debug, Clone, PartialEq)]
pub struct Memory {
  values: VecDeque<f64>,
  capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MemoryError {
  #[error("Invalid memory index {index}, memory holds {len} values.")]
  InvalidIndex {
    index: usize,
    len: usize,
  },
}

impl Memory {
  pub const DEFAULT_CAPACITY: usize = 5;

  /// A capacity of zero is treated as one.
  pub fn new(capacity: usize) -> Self {
    let capacity = capacity.max(1);
    Self { values: VecDeque::with_capacity(capacity), capacity }
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn is_full(&self) -> bool {
    self.len() >= self.capacity
  }

  /// Stores `value`, returning the evicted value if the memory was
  /// full.
  pub fn store(&mut self, value: f64) -> Option<f64> {
    let evicted = if self.is_full() { self.values.pop_front() } else { None };
    self.values.push_back(value);
    evicted
  }

  pub fn recall(&self, index: usize) -> Result<f64, MemoryError> {
    self.values.get(index).copied().ok_or(MemoryError::InvalidIndex { index, len: self.len() })
  }

  pub fn clear(&mut self) {
    self.values.clear();
  }

  /// Iterates from the oldest value to the newest.
  pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
    self.values.iter().copied()
  }
}

impl Default for Memory {
  fn default() -> Self {
    Self::new(Self::DEFAULT_CAPACITY)
  }
}
