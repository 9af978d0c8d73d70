//! Capacity settings applied when a stack is created and whenever it grows.


use super::StackProfileError;

/// Initial capacity and grow factor of a [`GrowableStack`](crate::GrowableStack).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StackGrowthProfile {
  initial_capacity: usize,
  grow_factor:      usize,
}

impl StackGrowthProfile {
  /// Smallest capacity a stack may have.
  pub const MIN_CAPACITY: usize = 10;
  /// Default capacity multiplier applied on growth.
  pub const GROW_FACTOR: usize = 2;

  /// Default profile: [`MIN_CAPACITY`](Self::MIN_CAPACITY) slots, doubled on growth.
  #[must_use]
  pub const fn standard() -> Self {
    Self { initial_capacity: Self::MIN_CAPACITY, grow_factor: Self::GROW_FACTOR }
  }

  /// Creates a custom profile.
  ///
  /// # Errors
  ///
  /// Returns [`StackProfileError::CapacityBelowMinimum`] when `initial_capacity` is below
  /// [`MIN_CAPACITY`](Self::MIN_CAPACITY), and [`StackProfileError::GrowFactorTooSmall`] when
  /// `grow_factor` is below 2.
  pub const fn new(initial_capacity: usize, grow_factor: usize) -> Result<Self, StackProfileError> {
    if initial_capacity < Self::MIN_CAPACITY {
      return Err(StackProfileError::CapacityBelowMinimum {
        requested: initial_capacity,
        minimum:   Self::MIN_CAPACITY,
      });
    }
    if grow_factor < 2 {
      return Err(StackProfileError::GrowFactorTooSmall { requested: grow_factor });
    }
    Ok(Self { initial_capacity, grow_factor })
  }

  /// Number of slots allocated at construction.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }

  /// Capacity multiplier applied on growth.
  #[must_use]
  pub const fn grow_factor(&self) -> usize {
    self.grow_factor
  }

  /// Capacity that follows `current`, or `None` when it does not fit in `usize`.
  #[must_use]
  pub const fn next_capacity(&self, current: usize) -> Option<usize> {
    current.checked_mul(self.grow_factor)
  }
}

impl Default for StackGrowthProfile {
  fn default() -> Self {
    Self::standard()
  }
}
