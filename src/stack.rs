mod error;

pub use error::StackError;

use crate::debug::{write_top_down, DebugFill};
use log::{debug, trace};
use std::fmt::{self, Debug};

/// Capacity used by [`BoundedStack::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// A last-in-first-out stack that never holds more than `capacity` elements.
///
/// Storage for up to [`DEFAULT_CAPACITY`] elements is reserved at
/// construction; larger bounds grow the storage on demand.
#[derive(Clone)]
pub struct BoundedStack<T> {
    values: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty stack that holds at most `capacity` elements.
    ///
    /// A capacity of zero gives a stack that refuses every push. Any `usize`
    /// is accepted; the bound is not allocated up front.
    pub fn with_capacity(capacity: usize) -> Self {
        trace!("new bounded stack, capacity {capacity}");
        Self {
            values: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Fails with [`StackError::CapacityExceeded`] if the stack is full,
    /// in which case `value` is dropped and the stack is left as it was.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.is_full() {
            debug!("push rejected: {} of {} slots used", self.size(), self.capacity);
            return Err(StackError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.values.push(value);
        Ok(())
    }

    /// Remove and return the most recently pushed element.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.values.pop().ok_or_else(|| {
            debug!("pop rejected: stack is empty");
            StackError::EmptyContainer
        })
    }

    /// The most recently pushed element, left in place.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.values.last().ok_or_else(|| {
            debug!("peek rejected: stack is empty");
            StackError::EmptyContainer
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.values.len() >= self.capacity
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f
                .debug_struct("BoundedStack")
                .field("values", &self.values)
                .field("fill", &self.fill())
                .finish();
        }

        writeln!(f, "BoundedStack {:?}", self.fill())?;
        write_top_down(f, &self.values)
    }
}

impl<T> BoundedStack<T> {
    /// Helper for <BoundedStack as Debug>::fmt
    fn fill(&self) -> DebugFill {
        DebugFill {
            size: self.size(),
            capacity: self.capacity,
        }
    }
}
