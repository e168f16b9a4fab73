//! A fixed-capacity, generic last-in-first-out stack.
//!
//! Pushing onto a full stack or popping from an empty one is refused with a
//! [`StackError`]; the stack is never modified by a refused call.

mod debug;
mod stack;

pub use stack::{BoundedStack, StackError, DEFAULT_CAPACITY};
