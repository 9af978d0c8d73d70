//! Growable stack built on a storage layer with an explicit capacity limit.

mod growable_stack;
mod push_outcome;
mod stack_error;
mod stack_growth_profile;
mod stack_profile_error;
pub mod storage;

pub use growable_stack::{GrowableStack, LOG_TARGET};
pub use push_outcome::PushOutcome;
pub use stack_error::StackError;
pub use stack_growth_profile::StackGrowthProfile;
pub use stack_profile_error::StackProfileError;
pub use storage::{StackStorage, VecStackStorage};
