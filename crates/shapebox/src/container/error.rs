use std::fmt;

use crate::shapes::ShapeKind;

/// Errors surfaced by `ShapeBox` operations.
///
/// Every failing operation leaves the box exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxError {
    /// `add` on a box already holding `capacity` shapes.
    CapacityExceeded { capacity: usize },
    /// Index not allocated (`index >= len`).
    IndexOutOfRange { index: usize, len: usize },
    /// Index allocated but the slot holds no shape.
    SlotEmpty { index: usize },
    /// Filtered removal matched nothing.
    NoneFound { kind: ShapeKind },
}

impl fmt::Display for BoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxError::CapacityExceeded { capacity } => {
                write!(f, "box is full (capacity {capacity})")
            }
            BoxError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for box of length {len}")
            }
            BoxError::SlotEmpty { index } => write!(f, "no shape stored at index {index}"),
            BoxError::NoneFound { kind } => write!(f, "box contains no {kind} shapes"),
        }
    }
}

impl std::error::Error for BoxError {}
