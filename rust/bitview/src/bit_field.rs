//! The read-only bit-field contract shared by leaves and composite views.

use std::sync::Arc;

use bitview_common::{Error, Result, result::verify_index};

use crate::merge;

/// Shared handle to a bit-field, as held by composite views.
pub type SharedBitField = Arc<dyn BitField>;

/// A read-only predicate over the domain `[0, max_size())`.
///
/// Implementations keep no cursor between calls: every query is answered from the
/// current state of the backing data. For fixed backing data all queries are
/// deterministic, and scans never return a position below their start.
pub trait BitField: Send + Sync {
    /// Size of the domain. Valid positions are `[0, max_size())`.
    fn max_size(&self) -> u32;

    /// Membership of `index`. Positions outside the domain are reported as clear.
    fn contains(&self, index: u32) -> bool;

    /// Smallest set position `>= start`, or `None` if there is none below `max_size()`.
    fn next_set_bit(&self, start: u32) -> Option<u32>;

    /// Smallest clear position `>= start`, or `None` if there is none below `max_size()`.
    fn next_clear_bit(&self, start: u32) -> Option<u32>;

    /// Number of set positions in the domain.
    fn cardinality(&self) -> u32;

    /// Bounds-checked membership of `index`.
    ///
    /// Fails with [`ErrorKind::IndexOutOfBounds`](crate::ErrorKind::IndexOutOfBounds)
    /// when `index >= max_size()`.
    fn get(&self, index: u32) -> Result<bool> {
        verify_index(index, self.max_size())?;
        Ok(self.contains(index))
    }
}

/// Convenience queries available on every [`BitField`], trait objects included.
pub trait BitFieldExt: BitField {
    /// Iterates over set positions in ascending order.
    fn set_bits(&self) -> SetBits<'_, Self> {
        SetBits {
            field: self,
            next: Some(0),
        }
    }

    /// Iterates over clear positions in ascending order.
    fn clear_bits(&self) -> ClearBits<'_, Self> {
        ClearBits {
            field: self,
            next: Some(0),
        }
    }

    /// True when no position in the domain is set.
    fn is_empty(&self) -> bool {
        self.next_set_bit(0).is_none()
    }

    /// True when every position in the domain is set.
    fn is_full(&self) -> bool {
        self.next_clear_bit(0).is_none()
    }

    /// True when some position is set in both `self` and `other`.
    ///
    /// Fails when the two fields have different domain sizes.
    fn intersects(&self, other: &dyn BitField) -> Result<bool> {
        let max_size = self.max_size();
        if other.max_size() != max_size {
            return Err(Error::domain_mismatch(1, max_size, other.max_size()));
        }
        let found = merge::converge(2, 0, max_size, |operand, candidate| {
            if operand == 0 {
                self.next_set_bit(candidate)
            } else {
                other.next_set_bit(candidate)
            }
        });
        Ok(found.is_some())
    }

    /// Collects the set positions.
    fn to_vec(&self) -> Vec<u32> {
        self.set_bits().collect()
    }
}

impl<T: BitField + ?Sized> BitFieldExt for T {}

/// Iterator over the set positions of a bit-field.
pub struct SetBits<'a, F: ?Sized> {
    field: &'a F,
    next: Option<u32>,
}

impl<F: BitField + ?Sized> Iterator for SetBits<'_, F> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let pos = self.field.next_set_bit(self.next?)?;
        self.next = pos.checked_add(1);
        Some(pos)
    }
}

/// Iterator over the clear positions of a bit-field.
pub struct ClearBits<'a, F: ?Sized> {
    field: &'a F,
    next: Option<u32>,
}

impl<F: BitField + ?Sized> Iterator for ClearBits<'_, F> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let pos = self.field.next_clear_bit(self.next?)?;
        self.next = pos.checked_add(1);
        Some(pos)
    }
}
