use alloc::{collections::TryReserveError, vec::Vec};

use super::StackStorage;

#[cfg(test)]
mod tests;

/// Contiguous stack storage backed by `alloc::vec::Vec`.
///
/// The slot count is tracked separately from the vector's own capacity so that growth thresholds are
/// exact no matter how the allocator rounds reservations.
#[derive(Debug, Clone)]
pub struct VecStackStorage<E> {
  data:  Vec<E>,
  limit: usize,
}

impl<E> VecStackStorage<E> {
  /// Creates empty storage with exactly `capacity` slots.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { data: Vec::with_capacity(capacity), limit: capacity }
  }
}

impl<E> StackStorage<E> for VecStackStorage<E> {
  fn capacity(&self) -> usize {
    self.limit
  }

  fn len(&self) -> usize {
    self.data.len()
  }

  fn push(&mut self, value: E) {
    assert!(self.data.len() < self.limit, "stack storage is full");
    self.data.push(value);
  }

  fn pop(&mut self) -> Option<E> {
    self.data.pop()
  }

  fn peek(&self) -> Option<&E> {
    self.data.last()
  }

  fn clear(&mut self) {
    self.data.clear();
  }

  fn try_grow(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
    if new_capacity <= self.limit {
      return Ok(());
    }
    self.data.try_reserve_exact(new_capacity - self.data.len())?;
    self.limit = new_capacity;
    Ok(())
  }

  fn grow(&mut self, new_capacity: usize) {
    if new_capacity <= self.limit {
      return;
    }
    self.data.reserve_exact(new_capacity - self.data.len());
    self.limit = new_capacity;
  }
}
