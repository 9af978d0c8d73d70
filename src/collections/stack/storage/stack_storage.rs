use alloc::collections::TryReserveError;

/// Low-level slot storage used by [`GrowableStack`](crate::GrowableStack).
///
/// A storage exposes a fixed number of slots (its capacity). The first `len()` slots are occupied and the
/// rest are vacant. Capacity only changes through [`grow`](Self::grow) or [`try_grow`](Self::try_grow).
pub trait StackStorage<E> {
  /// Returns the number of slots currently allocated.
  fn capacity(&self) -> usize;

  /// Returns the number of occupied slots.
  fn len(&self) -> usize;

  /// Returns whether no slot is occupied.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Writes `value` into the first vacant slot.
  ///
  /// # Panics
  ///
  /// Implementations panic when every slot is occupied (`len() == capacity()`); callers grow the storage
  /// first.
  fn push(&mut self, value: E);

  /// Vacates the last occupied slot and returns its value.
  fn pop(&mut self) -> Option<E>;

  /// Returns a reference to the value in the last occupied slot.
  fn peek(&self) -> Option<&E>;

  /// Vacates every slot without releasing capacity.
  fn clear(&mut self);

  /// Raises the capacity to exactly `new_capacity` slots, keeping every occupied slot.
  ///
  /// Requests at or below the current capacity are no-ops.
  ///
  /// # Errors
  ///
  /// Returns the allocator's [`TryReserveError`] when the larger buffer cannot be obtained. The storage is
  /// left untouched in that case.
  fn try_grow(&mut self, new_capacity: usize) -> Result<(), TryReserveError>;

  /// Infallible counterpart of [`try_grow`](Self::try_grow).
  ///
  /// Allocation failure aborts the process, as with any `alloc` collection.
  fn grow(&mut self, new_capacity: usize);
}
