use super::{GrowableStack, StackGrowthProfile};

#[test]
fn console_walkthrough_accounting() {
  let arr: [i32; 12] = core::array::from_fn(|i| i as i32);
  let mut stack = GrowableStack::new();
  assert_eq!((stack.capacity(), stack.len()), (StackGrowthProfile::MIN_CAPACITY, 0));

  stack.push(&arr[1]);
  assert_eq!(stack.peek(), Some(&1));
  assert_eq!(stack.pop(), Some(&1));

  stack.push(&arr[1]);
  stack.push(&arr[2]);
  assert_eq!(stack.peek(), Some(&2));
  stack.push(&arr[3]);
  assert_eq!(stack.pop(), Some(&3));
  assert_eq!(stack.pop(), Some(&2));
  assert_eq!(stack.pop(), Some(&1));
  assert_eq!((stack.capacity(), stack.len()), (10, 0));

  assert_eq!(stack.pop(), None);
  assert_eq!((stack.capacity(), stack.len()), (10, 0));

  for value in &arr {
    stack.push(value);
  }
  assert_eq!((stack.capacity(), stack.len()), (20, 12));
  assert_eq!(stack.pop(), Some(&11));
  assert_eq!(stack.peek(), Some(&10));
}
