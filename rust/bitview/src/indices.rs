//! Index collections behind [`CollectionBitField`](crate::CollectionBitField).
//!
//! A collection of `u32` indices describes the set positions of a bit-field. Two
//! capabilities are distinguished:
//!
//! - [`IndexCollection`] - membership, size and unordered traversal.
//! - [`OrderedIndexCollection`] - additionally answers "smallest element `>= start`"
//!   without a full traversal.
//!
//! The capability is fixed when the field is built (see [`Indices`]), so the ordered
//! fast path is chosen once rather than rediscovered on every query.

use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
    sync::{Arc, PoisonError, RwLock},
};

use roaring::RoaringBitmap;

/// Membership and traversal over a collection of set indices.
pub trait IndexCollection: Send + Sync {
    /// True when `index` is stored in the collection.
    fn contains_index(&self, index: u32) -> bool;

    /// Number of stored entries. Collections that may repeat an index count every
    /// occurrence.
    fn len(&self) -> usize;

    /// True when the collection stores no index.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits every stored index, in no particular order.
    fn for_each_index(&self, f: &mut dyn FnMut(u32));
}

/// An [`IndexCollection`] that keeps its indices sorted, each stored once.
pub trait OrderedIndexCollection: IndexCollection {
    /// Smallest stored index `>= start`.
    fn first_at_or_after(&self, start: u32) -> Option<u32>;

    /// Largest stored index.
    fn last_index(&self) -> Option<u32>;
}

/// Backing collection of a [`CollectionBitField`](crate::CollectionBitField), tagged
/// with its capability.
#[derive(Clone)]
pub enum Indices {
    Ordered(Arc<dyn OrderedIndexCollection>),
    Unordered(Arc<dyn IndexCollection>),
}

impl Indices {
    pub fn contains_index(&self, index: u32) -> bool {
        match self {
            Indices::Ordered(indices) => indices.contains_index(index),
            Indices::Unordered(indices) => indices.contains_index(index),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Indices::Ordered(indices) => indices.len(),
            Indices::Unordered(indices) => indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn for_each_index(&self, f: &mut dyn FnMut(u32)) {
        match self {
            Indices::Ordered(indices) => indices.for_each_index(f),
            Indices::Unordered(indices) => indices.for_each_index(f),
        }
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self, Indices::Ordered(_))
    }
}

impl std::fmt::Debug for Indices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_ordered() {
            "Ordered"
        } else {
            "Unordered"
        };
        f.debug_struct("Indices")
            .field("kind", &kind)
            .field("len", &self.len())
            .finish()
    }
}

impl<S: BuildHasher + Send + Sync> IndexCollection for HashSet<u32, S> {
    #[inline]
    fn contains_index(&self, index: u32) -> bool {
        self.contains(&index)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn for_each_index(&self, f: &mut dyn FnMut(u32)) {
        self.iter().copied().for_each(f);
    }
}

/// An unsorted list of indices, possibly with repeats. Membership is a linear search.
impl IndexCollection for Vec<u32> {
    fn contains_index(&self, index: u32) -> bool {
        self.contains(&index)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn for_each_index(&self, f: &mut dyn FnMut(u32)) {
        self.iter().copied().for_each(f);
    }
}

impl IndexCollection for BTreeSet<u32> {
    #[inline]
    fn contains_index(&self, index: u32) -> bool {
        self.contains(&index)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn for_each_index(&self, f: &mut dyn FnMut(u32)) {
        self.iter().copied().for_each(f);
    }
}

impl OrderedIndexCollection for BTreeSet<u32> {
    fn first_at_or_after(&self, start: u32) -> Option<u32> {
        self.range(start..).next().copied()
    }

    fn last_index(&self) -> Option<u32> {
        self.last().copied()
    }
}

impl IndexCollection for RoaringBitmap {
    #[inline]
    fn contains_index(&self, index: u32) -> bool {
        self.contains(index)
    }

    fn len(&self) -> usize {
        RoaringBitmap::len(self) as usize
    }

    fn for_each_index(&self, f: &mut dyn FnMut(u32)) {
        self.iter().for_each(f);
    }
}

impl OrderedIndexCollection for RoaringBitmap {
    fn first_at_or_after(&self, start: u32) -> Option<u32> {
        let preceding = match start.checked_sub(1) {
            Some(last) => self.rank(last),
            None => 0,
        };
        u32::try_from(preceding)
            .ok()
            .and_then(|preceding| self.select(preceding))
    }

    fn last_index(&self) -> Option<u32> {
        self.max()
    }
}

/// Collections behind a lock. The read lock is held for one call only.
impl<C: IndexCollection> IndexCollection for RwLock<C> {
    fn contains_index(&self, index: u32) -> bool {
        self.read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_index(index)
    }

    fn len(&self) -> usize {
        self.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn for_each_index(&self, f: &mut dyn FnMut(u32)) {
        self.read()
            .unwrap_or_else(PoisonError::into_inner)
            .for_each_index(f)
    }
}

impl<C: OrderedIndexCollection> OrderedIndexCollection for RwLock<C> {
    fn first_at_or_after(&self, start: u32) -> Option<u32> {
        self.read()
            .unwrap_or_else(PoisonError::into_inner)
            .first_at_or_after(start)
    }

    fn last_index(&self) -> Option<u32> {
        self.read()
            .unwrap_or_else(PoisonError::into_inner)
            .last_index()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use roaring::RoaringBitmap;

    use super::{IndexCollection, OrderedIndexCollection};

    #[test]
    fn test_ordered_first_at_or_after() {
        let tree: BTreeSet<u32> = [3, 10, 40].into_iter().collect();
        let bitmap: RoaringBitmap = [3u32, 10, 40].into_iter().collect();
        let collections: [&dyn OrderedIndexCollection; 2] = [&tree, &bitmap];
        for indices in collections {
            assert_eq!(indices.first_at_or_after(0), Some(3));
            assert_eq!(indices.first_at_or_after(3), Some(3));
            assert_eq!(indices.first_at_or_after(4), Some(10));
            assert_eq!(indices.first_at_or_after(40), Some(40));
            assert_eq!(indices.first_at_or_after(41), None);
            assert_eq!(indices.last_index(), Some(40));
            assert_eq!(indices.len(), 3);
        }
    }

    #[test]
    fn test_unordered_traversal_visits_everything() {
        let hashed: HashSet<u32> = [7, 1, 99].into_iter().collect();
        let listed = vec![99u32, 7, 1];
        let collections: [&dyn IndexCollection; 2] = [&hashed, &listed];
        for indices in collections {
            let mut seen = Vec::new();
            indices.for_each_index(&mut |index| seen.push(index));
            seen.sort_unstable();
            assert_eq!(seen, vec![1, 7, 99]);
            assert!(indices.contains_index(7));
            assert!(!indices.contains_index(8));
            assert!(!indices.is_empty());
        }
    }
}
