//! Bit-field over a collection of set indices.

use std::sync::Arc;

use roaring::RoaringBitmap;

use crate::{
    BitField,
    indices::{IndexCollection, Indices, OrderedIndexCollection},
};

/// Adapts a shared collection of indices to the bit-field contract.
///
/// The collection lists the set positions. Whether it is ordered is decided at
/// construction:
///
/// - [`ordered`](Self::ordered): `next_set_bit` asks the collection for its smallest
///   element `>= start`, O(log n) for `BTreeSet`.
/// - [`unordered`](Self::unordered): `next_set_bit` checks `start` directly and
///   otherwise traverses the whole collection, O(n).
///
/// `next_clear_bit` probes positions one by one from `start` in both cases.
///
/// Stored indices at or beyond `max_size` are ignored by every query, including
/// [`cardinality`](BitField::cardinality), which counts each distinct index once.
#[derive(Clone, Debug)]
pub struct CollectionBitField {
    indices: Indices,
    max_size: u32,
}

impl CollectionBitField {
    /// Field over a sorted collection, using the ordered fast path for scans.
    pub fn ordered<C>(indices: Arc<C>, max_size: u32) -> CollectionBitField
    where
        C: OrderedIndexCollection + 'static,
    {
        Self::from_indices(Indices::Ordered(indices), max_size)
    }

    /// Field over any collection of indices.
    pub fn unordered<C>(indices: Arc<C>, max_size: u32) -> CollectionBitField
    where
        C: IndexCollection + 'static,
    {
        Self::from_indices(Indices::Unordered(indices), max_size)
    }

    pub fn from_indices(indices: Indices, max_size: u32) -> CollectionBitField {
        CollectionBitField { indices, max_size }
    }

    pub fn indices(&self) -> &Indices {
        &self.indices
    }

    /// Linear scan for the smallest stored index in `[start, max_size)`.
    fn scan_min_from(&self, start: u32) -> Option<u32> {
        let mut min: Option<u32> = None;
        self.indices.for_each_index(&mut |index| {
            if index >= start && index < self.max_size && min.is_none_or(|m| index < m) {
                min = Some(index);
            }
        });
        min
    }
}

impl BitField for CollectionBitField {
    #[inline]
    fn max_size(&self) -> u32 {
        self.max_size
    }

    #[inline]
    fn contains(&self, index: u32) -> bool {
        index < self.max_size && self.indices.contains_index(index)
    }

    fn next_set_bit(&self, start: u32) -> Option<u32> {
        if start >= self.max_size {
            return None;
        }
        match &self.indices {
            Indices::Ordered(indices) => indices
                .first_at_or_after(start)
                .filter(|&pos| pos < self.max_size),
            Indices::Unordered(indices) => {
                if indices.contains_index(start) {
                    return Some(start);
                }
                self.scan_min_from(start)
            }
        }
    }

    fn next_clear_bit(&self, start: u32) -> Option<u32> {
        (start..self.max_size).find(|&index| !self.indices.contains_index(index))
    }

    fn cardinality(&self) -> u32 {
        if let Indices::Ordered(indices) = &self.indices {
            match indices.last_index() {
                None => return 0,
                Some(last) if last < self.max_size => return indices.len() as u32,
                Some(_) => {}
            }
        }
        // Unordered collections may repeat an index (`Vec<u32>`).
        let mut distinct = RoaringBitmap::new();
        self.indices.for_each_index(&mut |index| {
            if index < self.max_size {
                distinct.insert(index);
            }
        });
        distinct.len() as u32
    }
}
