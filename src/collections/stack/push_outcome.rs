/// Result of a successful [`GrowableStack::try_push`](crate::GrowableStack::try_push).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
  /// The element was stored in an already allocated slot.
  Pushed,
  /// The storage had to grow before the element could be stored.
  GrewTo {
    /// Capacity after growth.
    capacity: usize,
  },
}
