//! Bit-field over a native bit-set.

use std::sync::Arc;

use crate::{BitField, store::BitStore};

/// Forwards bit-field queries to a shared native bit-set.
///
/// The domain size is declared by the caller and is independent of the store's
/// physical capacity. Store positions beyond the store's capacity read as clear, and
/// store content at or beyond `max_size` is invisible through this field: scans stop
/// at `max_size` and the cardinality only counts `[0, max_size)`.
///
/// The store is shared, not owned. Changes its owner makes (for example through
/// [`AtomicBitSet::set`](bitview_collections::AtomicBitSet::set)) are visible on the
/// next query.
pub struct BitFieldSet<S: ?Sized> {
    store: Arc<S>,
    max_size: u32,
}

impl<S: BitStore + ?Sized> BitFieldSet<S> {
    pub fn new(store: Arc<S>, max_size: u32) -> BitFieldSet<S> {
        BitFieldSet { store, max_size }
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

impl<S: BitStore + ?Sized> BitField for BitFieldSet<S> {
    #[inline]
    fn max_size(&self) -> u32 {
        self.max_size
    }

    #[inline]
    fn contains(&self, index: u32) -> bool {
        index < self.max_size && self.store.contains(index)
    }

    fn next_set_bit(&self, start: u32) -> Option<u32> {
        self.store.next_set_bit(start, self.max_size)
    }

    fn next_clear_bit(&self, start: u32) -> Option<u32> {
        self.store.next_clear_bit(start, self.max_size)
    }

    fn cardinality(&self) -> u32 {
        self.store.count_ones_below(self.max_size)
    }
}

impl<S: ?Sized> Clone for BitFieldSet<S> {
    fn clone(&self) -> Self {
        BitFieldSet {
            store: self.store.clone(),
            max_size: self.max_size,
        }
    }
}

impl<S: ?Sized> std::fmt::Debug for BitFieldSet<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitFieldSet")
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}
