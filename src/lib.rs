//! Growable LIFO stack that stores borrowed handles to caller-owned elements.
//!
//! The stack starts with [`StackGrowthProfile::MIN_CAPACITY`] slots and multiplies its capacity by the
//! profile's grow factor whenever a push finds every slot occupied. Elements are never owned: the stack
//! keeps `&'a T` handles and the borrow checker guarantees that each element outlives the stack.
//!
//! ```
//! use growable_stack_rs::GrowableStack;
//!
//! let values = [1, 2, 3];
//! let mut stack = GrowableStack::new();
//! for value in &values {
//!   stack.push(value);
//! }
//!
//! assert_eq!(stack.peek(), Some(&3));
//! assert_eq!(stack.pop(), Some(&3));
//! assert_eq!(stack.len(), 2);
//! assert_eq!(stack.capacity(), 10);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod collections;

pub use collections::stack::{
  GrowableStack, LOG_TARGET, PushOutcome, StackError, StackGrowthProfile, StackProfileError, StackStorage,
  VecStackStorage,
};

#[cfg(test)]
mod tests;
