use core::{fmt, marker::PhantomData};

use super::{PushOutcome, StackError, StackGrowthProfile, StackStorage, VecStackStorage};


/// `tracing` target used for events emitted by [`GrowableStack`].
pub const LOG_TARGET: &str = "growable_stack::stack";

/// LIFO stack of borrowed handles with automatic capacity growth.
///
/// The stack never owns its elements. It stores `&'a T` handles, so every pushed element must outlive the
/// stack, and dropping the stack only releases the slot buffer.
///
/// Capacity starts at the profile's initial capacity ([`StackGrowthProfile::MIN_CAPACITY`] by default)
/// and is multiplied by the grow factor when a push finds every slot occupied. It never shrinks.
pub struct GrowableStack<'a, T: ?Sized, S = VecStackStorage<&'a T>>
where
  S: StackStorage<&'a T>, {
  storage: S,
  profile: StackGrowthProfile,
  _pd:     PhantomData<&'a T>,
}

impl<'a, T: ?Sized> GrowableStack<'a, T> {
  /// Creates an empty stack with the standard profile.
  #[must_use]
  pub fn new() -> Self {
    Self::with_profile(StackGrowthProfile::standard())
  }

  /// Creates an empty stack with a custom growth profile.
  #[must_use]
  pub fn with_profile(profile: StackGrowthProfile) -> Self {
    Self { storage: VecStackStorage::with_capacity(profile.initial_capacity()), profile, _pd: PhantomData }
  }
}

impl<'a, T: ?Sized, S> GrowableStack<'a, T, S>
where
  S: StackStorage<&'a T>,
{
  /// Creates an empty stack on top of the provided storage.
  ///
  /// The storage is raised to the profile's initial capacity if it is smaller.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::StorageNotEmpty`] when `storage` already holds elements,
  /// [`StackError::AllocError`] when it cannot be raised to the initial capacity, and
  /// [`StackError::StorageTooSmall`] when it reports success but still has fewer slots than the profile
  /// requires.
  pub fn with_storage(mut storage: S, profile: StackGrowthProfile) -> Result<Self, StackError> {
    if !storage.is_empty() {
      return Err(StackError::StorageNotEmpty);
    }
    storage.try_grow(profile.initial_capacity())?;
    if storage.capacity() < profile.initial_capacity() {
      return Err(StackError::StorageTooSmall);
    }
    Ok(Self { storage, profile, _pd: PhantomData })
  }

  /// Pushes a handle onto the top of the stack, growing the storage first when it is full.
  ///
  /// # Panics
  ///
  /// Panics when the grown capacity would overflow `usize`. Allocation failure aborts the process.
  pub fn push(&mut self, element: &'a T) {
    if self.is_full() {
      self.grow();
    }
    self.storage.push(element);
  }

  /// Pushes a handle onto the top of the stack, reporting growth failures instead of aborting.
  ///
  /// On error the stack is left exactly as it was.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::CapacityOverflow`] when the grown capacity does not fit in `usize` and
  /// [`StackError::AllocError`] when the allocator refuses the grown buffer.
  pub fn try_push(&mut self, element: &'a T) -> Result<PushOutcome, StackError> {
    let outcome = if self.is_full() {
      let capacity = self.try_grow()?;
      PushOutcome::GrewTo { capacity }
    } else {
      PushOutcome::Pushed
    };
    self.storage.push(element);
    Ok(outcome)
  }

  /// Removes and returns the top handle, or `None` when the stack is empty.
  pub fn pop(&mut self) -> Option<&'a T> {
    let popped = self.storage.pop();
    if popped.is_none() {
      tracing::trace!(target: LOG_TARGET, "pop on empty stack");
    }
    popped
  }

  /// Returns the top handle without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&'a T> {
    self.storage.peek().copied()
  }

  /// Removes every handle. Capacity is kept.
  pub fn clear(&mut self) {
    self.storage.clear();
  }

  /// Number of allocated slots.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.storage.capacity()
  }

  /// Number of handles on the stack, which is also the position of the top element.
  #[must_use]
  pub fn len(&self) -> usize {
    self.storage.len()
  }

  /// Indicates whether the stack holds no handles.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.storage.is_empty()
  }

  /// Indicates whether the next push has to grow the storage.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.len() == self.capacity()
  }

  /// Growth profile the stack was created with.
  #[must_use]
  pub const fn profile(&self) -> StackGrowthProfile {
    self.profile
  }

  fn grow(&mut self) {
    let from = self.capacity();
    let Some(to) = self.profile.next_capacity(from) else {
      panic!("stack capacity overflow");
    };
    self.storage.grow(to);
    self.log_growth(from, to);
  }

  fn try_grow(&mut self) -> Result<usize, StackError> {
    let from = self.capacity();
    let to = self.profile.next_capacity(from).ok_or(StackError::CapacityOverflow)?;
    self.storage.try_grow(to)?;
    self.log_growth(from, to);
    Ok(to)
  }

  fn log_growth(&self, from: usize, to: usize) {
    tracing::debug!(target: LOG_TARGET, from, to, len = self.len(), "stack storage grown");
  }
}

impl<T: ?Sized> Default for GrowableStack<'_, T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<'a, T, S> fmt::Debug for GrowableStack<'a, T, S>
where
  T: ?Sized + fmt::Debug,
  S: StackStorage<&'a T>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GrowableStack")
      .field("len", &self.len())
      .field("capacity", &self.capacity())
      .field("top", &self.peek())
      .finish()
  }
}
