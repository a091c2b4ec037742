//! Complement of a bit-field.

use crate::{BitField, SharedBitField};

/// A position is set iff it is clear in the operand.
///
/// Scans swap roles: the next set position of the complement is the next clear
/// position of the operand and vice versa. Typical use is masking out what is already
/// known, e.g. `AndView::new(available, [Arc::new(NotView::new(verified))])`.
#[derive(Clone)]
pub struct NotView {
    operand: SharedBitField,
}

impl NotView {
    pub fn new(operand: SharedBitField) -> NotView {
        NotView { operand }
    }

    pub fn operand(&self) -> &SharedBitField {
        &self.operand
    }
}

impl BitField for NotView {
    #[inline]
    fn max_size(&self) -> u32 {
        self.operand.max_size()
    }

    fn contains(&self, index: u32) -> bool {
        index < self.max_size() && !self.operand.contains(index)
    }

    fn next_set_bit(&self, start: u32) -> Option<u32> {
        self.operand.next_clear_bit(start)
    }

    fn next_clear_bit(&self, start: u32) -> Option<u32> {
        self.operand.next_set_bit(start)
    }

    fn cardinality(&self) -> u32 {
        self.max_size().saturating_sub(self.operand.cardinality())
    }
}

impl std::fmt::Debug for NotView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotView")
            .field("max_size", &self.max_size())
            .finish_non_exhaustive()
    }
}
