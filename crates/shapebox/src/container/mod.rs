//! `ShapeBox`: fixed-capacity, index-addressable storage for owned shapes.
//!
//! Contract
//! - `len() <= capacity()` at all times; capacity never changes.
//! - Indices are 0-based positions. `extract` and `remove_all_of_kind`
//!   compact the sequence, so indices stay contiguous.
//! - Slots are `Option<Box<dyn Shape>>`. The public insertion path never
//!   stores `None`, but lookups still distinguish an empty slot
//!   (`SlotEmpty`) from an unallocated index (`IndexOutOfRange`).
//! - Operations are atomic: on error the box is unchanged.
//!
//! Code cross-refs: `shapes::Shape`, `BoxError`

mod error;

pub use error::BoxError;

use crate::shapes::{Shape, ShapeKind};

/// Ordered box of shapes with a fixed upper bound on its length.
#[derive(Debug)]
pub struct ShapeBox {
    slots: Vec<Option<Box<dyn Shape>>>,
    capacity: usize,
}

impl ShapeBox {
    /// Empty box. `capacity == 0` is allowed; such a box rejects every `add`.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Append `shape` at the end.
    pub fn add(&mut self, shape: Box<dyn Shape>) -> Result<(), BoxError> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity, kind = %shape.kind(), "add rejected");
            return Err(BoxError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        tracing::debug!(index = self.slots.len(), kind = %shape.kind(), "add");
        self.slots.push(Some(shape));
        Ok(())
    }

    /// Borrow the shape at `index`.
    pub fn get(&self, index: usize) -> Result<&dyn Shape, BoxError> {
        self.check_index(index)?;
        self.slots[index]
            .as_deref()
            .ok_or(BoxError::SlotEmpty { index })
    }

    /// Remove and return the shape at `index`; later shapes shift left by one.
    pub fn extract(&mut self, index: usize) -> Result<Box<dyn Shape>, BoxError> {
        self.check_index(index)?;
        // `take` on an empty slot is a no-op, so the error path leaves the box as is.
        let shape = self.slots[index]
            .take()
            .ok_or(BoxError::SlotEmpty { index })?;
        self.slots.remove(index);
        tracing::debug!(index, kind = %shape.kind(), len = self.slots.len(), "extract");
        Ok(shape)
    }

    /// Store `shape` at `index` and hand back the shape it displaces.
    pub fn replace(
        &mut self,
        index: usize,
        shape: Box<dyn Shape>,
    ) -> Result<Box<dyn Shape>, BoxError> {
        let slot = self.occupied_mut(index)?;
        let old = std::mem::replace(slot, shape);
        tracing::debug!(index, old = %old.kind(), "replace");
        Ok(old)
    }

    /// Sum of perimeters over stored shapes; `0.0` when empty.
    pub fn sum_perimeter(&self) -> f64 {
        self.iter().map(|s| s.perimeter()).sum()
    }

    /// Sum of areas over stored shapes; `0.0` when empty.
    pub fn sum_area(&self) -> f64 {
        self.iter().map(|s| s.area()).sum()
    }

    /// Drop every shape of `kind`, keeping the others in their original order.
    /// Returns how many shapes were removed.
    pub fn remove_all_of_kind(&mut self, kind: ShapeKind) -> Result<usize, BoxError> {
        let matches = self.count_of_kind(kind);
        if matches == 0 {
            tracing::debug!(%kind, "remove_all_of_kind: none found");
            return Err(BoxError::NoneFound { kind });
        }
        self.slots
            .retain(|slot| !slot.as_deref().is_some_and(|s| s.is_kind(kind)));
        tracing::debug!(%kind, removed = matches, len = self.slots.len(), "remove_all_of_kind");
        Ok(matches)
    }

    /// Shorthand for `remove_all_of_kind(ShapeKind::Circle)`.
    pub fn remove_all_circles(&mut self) -> Result<usize, BoxError> {
        self.remove_all_of_kind(ShapeKind::Circle)
    }

    pub fn count_of_kind(&self, kind: ShapeKind) -> usize {
        self.iter().filter(|s| s.is_kind(kind)).count()
    }

    /// Stored shapes in index order. Empty slots are skipped.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Shape> + '_ {
        self.slots.iter().filter_map(|slot| slot.as_deref())
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), BoxError> {
        if index >= self.slots.len() {
            return Err(BoxError::IndexOutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        Ok(())
    }

    #[inline]
    fn occupied_mut(&mut self, index: usize) -> Result<&mut Box<dyn Shape>, BoxError> {
        self.check_index(index)?;
        self.slots[index]
            .as_mut()
            .ok_or(BoxError::SlotEmpty { index })
    }
}

#[cfg(test)]
mod tests;
