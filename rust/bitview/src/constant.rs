//! Bit-fields whose every position has the same value.

use crate::BitField;

/// A bit-field that is either all clear or all set.
///
/// Built by [`empty`] and [`full`]. Holds no storage, so instances are cheap to create
/// for any domain size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantBitField {
    max_size: u32,
    value: bool,
}

/// All-clear bit-field over `[0, max_size)`.
pub fn empty(max_size: u32) -> ConstantBitField {
    ConstantBitField {
        max_size,
        value: false,
    }
}

/// All-set bit-field over `[0, max_size)`.
pub fn full(max_size: u32) -> ConstantBitField {
    ConstantBitField {
        max_size,
        value: true,
    }
}

impl ConstantBitField {
    pub fn value(&self) -> bool {
        self.value
    }

    fn first_with(&self, value: bool, start: u32) -> Option<u32> {
        (self.value == value && start < self.max_size).then_some(start)
    }
}

impl BitField for ConstantBitField {
    fn max_size(&self) -> u32 {
        self.max_size
    }

    fn contains(&self, index: u32) -> bool {
        self.value && index < self.max_size
    }

    fn next_set_bit(&self, start: u32) -> Option<u32> {
        self.first_with(true, start)
    }

    fn next_clear_bit(&self, start: u32) -> Option<u32> {
        self.first_with(false, start)
    }

    fn cardinality(&self) -> u32 {
        if self.value { self.max_size } else { 0 }
    }
}
