use alloc::collections::TryReserveError;
use core::fmt;


/// Errors reported by the fallible stack operations.
///
/// Reading from an empty stack is not an error; `pop` and `peek` return `None` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
  /// The allocator could not provide the grown buffer.
  AllocError,
  /// The next capacity does not fit in `usize`.
  CapacityOverflow,
  /// The storage handed to the stack already contains elements.
  StorageNotEmpty,
  /// The storage holds fewer slots than the growth profile requires.
  StorageTooSmall,
}

impl fmt::Display for StackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackError::AllocError => write!(f, "failed to allocate grown stack storage"),
      | StackError::CapacityOverflow => write!(f, "stack capacity overflow"),
      | StackError::StorageNotEmpty => write!(f, "stack storage is not empty"),
      | StackError::StorageTooSmall => write!(f, "stack storage is smaller than the initial capacity"),
    }
  }
}

impl core::error::Error for StackError {}

impl From<TryReserveError> for StackError {
  fn from(_: TryReserveError) -> Self {
    StackError::AllocError
  }
}
