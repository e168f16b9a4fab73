//! Helpers for Debug impls.

use std::fmt::{self, Debug};

/// Occupancy, printed as `size/capacity`.
pub(crate) struct DebugFill {
    pub size: usize,
    pub capacity: usize,
}

impl Debug for DebugFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.size, self.capacity)
    }
}

/// Write one element per line, top of the stack first.
///
/// Each line is prefixed with the element's position from the bottom.
pub(crate) fn write_top_down<T: Debug>(f: &mut fmt::Formatter<'_>, elements: &[T]) -> fmt::Result {
    let width = elements.len().saturating_sub(1).to_string().len();
    for (i, element) in elements.iter().enumerate().rev() {
        write!(f, "{i:>width$}: {element:?}")?;
        if i + 1 == elements.len() {
            write!(f, " <- top")?;
        }
        writeln!(f)?;
    }
    Ok(())
}
