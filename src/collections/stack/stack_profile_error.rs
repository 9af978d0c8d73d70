use core::fmt;

/// Errors raised when building a [`StackGrowthProfile`](crate::StackGrowthProfile).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackProfileError {
  /// The initial capacity is smaller than the minimum every stack must provide.
  CapacityBelowMinimum {
    /// Requested initial capacity.
    requested: usize,
    /// Smallest accepted initial capacity.
    minimum:   usize,
  },
  /// The grow factor would not enlarge the storage.
  GrowFactorTooSmall {
    /// Requested grow factor.
    requested: usize,
  },
}

impl fmt::Display for StackProfileError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackProfileError::CapacityBelowMinimum { requested, minimum } => {
        write!(f, "initial capacity {requested} is below the minimum of {minimum}")
      },
      | StackProfileError::GrowFactorTooSmall { requested } => {
        write!(f, "grow factor {requested} must be at least 2")
      },
    }
  }
}

impl core::error::Error for StackProfileError {}
