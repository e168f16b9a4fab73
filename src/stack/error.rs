use thiserror::Error;

/// Why a stack operation was refused. The stack is unchanged in both cases.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// Push onto a stack that already holds `capacity` elements.
    #[error("stack is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    /// Pop or peek on a stack with no elements.
    #[error("stack is empty")]
    EmptyContainer,
}
