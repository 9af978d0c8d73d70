//! Collection types provided by this crate.

pub mod stack;
