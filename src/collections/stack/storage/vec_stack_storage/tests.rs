use super::*;

#[test]
fn with_capacity_creates_empty_storage() {
  let storage: VecStackStorage<i32> = VecStackStorage::with_capacity(10);
  assert_eq!(storage.len(), 0);
  assert_eq!(storage.capacity(), 10);
  assert!(storage.is_empty());
}

#[test]
fn push_and_pop_follow_lifo_order() {
  let mut storage = VecStackStorage::with_capacity(5);

  storage.push(1);
  storage.push(2);
  storage.push(3);

  assert_eq!(storage.len(), 3);
  assert!(!storage.is_empty());

  assert_eq!(storage.pop(), Some(3));
  assert_eq!(storage.pop(), Some(2));
  assert_eq!(storage.pop(), Some(1));
  assert_eq!(storage.pop(), None);
  assert!(storage.is_empty());
}

#[test]
fn peek_returns_last_occupied_slot() {
  let mut storage = VecStackStorage::with_capacity(5);

  assert_eq!(storage.peek(), None);

  storage.push(10);
  assert_eq!(storage.peek(), Some(&10));

  storage.push(20);
  assert_eq!(storage.peek(), Some(&20));

  storage.pop();
  assert_eq!(storage.peek(), Some(&10));
}

#[test]
fn try_grow_sets_exact_capacity_and_keeps_slots() {
  let mut storage = VecStackStorage::with_capacity(5);

  storage.push(1);
  storage.push(2);

  assert!(storage.try_grow(10).is_ok());
  assert_eq!(storage.capacity(), 10);

  // shrinking requests are ignored
  assert!(storage.try_grow(8).is_ok());
  assert_eq!(storage.capacity(), 10);

  assert_eq!(storage.len(), 2);
  assert_eq!(storage.pop(), Some(2));
  assert_eq!(storage.pop(), Some(1));
}

#[test]
fn try_grow_reports_unsatisfiable_request_without_side_effects() {
  let mut storage = VecStackStorage::with_capacity(4);
  storage.push(7_u64);

  assert!(storage.try_grow(usize::MAX).is_err());
  assert_eq!(storage.capacity(), 4);
  assert_eq!(storage.len(), 1);
  assert_eq!(storage.peek(), Some(&7));
}

#[test]
fn grow_allows_filling_the_new_slots() {
  let mut storage = VecStackStorage::with_capacity(2);
  storage.push('a');
  storage.push('b');

  storage.grow(4);
  assert_eq!(storage.capacity(), 4);
  storage.push('c');
  storage.push('d');

  assert_eq!(storage.len(), 4);
  assert_eq!(storage.pop(), Some('d'));
  assert_eq!(storage.pop(), Some('c'));
  assert_eq!(storage.pop(), Some('b'));
  assert_eq!(storage.pop(), Some('a'));
}

#[test]
fn clear_vacates_slots_but_keeps_capacity() {
  let mut storage = VecStackStorage::with_capacity(3);
  storage.push(1);
  storage.push(2);
  storage.grow(6);

  storage.clear();

  assert!(storage.is_empty());
  assert_eq!(storage.capacity(), 6);
  assert_eq!(storage.peek(), None);
}

#[test]
#[should_panic(expected = "stack storage is full")]
fn push_into_full_storage_panics() {
  let mut storage = VecStackStorage::with_capacity(1);
  storage.push(1);
  storage.push(2);
}
