//! Native bit-set capability behind [`BitFieldSet`](crate::BitFieldSet).
//!
//! [`BitStore`] is the minimal read interface a concrete bit-set must offer so that a
//! leaf field can forward queries to it. Stores have their own physical capacity, which
//! is unrelated to the domain size of the fields built over them: positions beyond
//! the capacity are simply clear.

use std::sync::{PoisonError, RwLock};

use bitview_collections::AtomicBitSet;
use roaring::RoaringBitmap;

/// Read access to a concrete bit-set.
///
/// All positions not explicitly stored as set are clear, including positions beyond
/// the store's capacity.
pub trait BitStore: Send + Sync {
    /// Membership of `index`.
    fn contains(&self, index: u32) -> bool;

    /// Smallest set position in `[start, end)`.
    fn next_set_bit(&self, start: u32, end: u32) -> Option<u32>;

    /// Smallest clear position in `[start, end)`. The cost must not depend on the
    /// content at or beyond `end`.
    fn next_clear_bit(&self, start: u32, end: u32) -> Option<u32>;

    /// Number of set positions in `[0, end)`.
    fn count_ones_below(&self, end: u32) -> u32;
}

impl BitStore for AtomicBitSet {
    #[inline]
    fn contains(&self, index: u32) -> bool {
        let index = index as usize;
        index < self.len() && self.get(index, std::sync::atomic::Ordering::Relaxed)
    }

    fn next_set_bit(&self, start: u32, end: u32) -> Option<u32> {
        self.next_set_bit_in(start as usize, end as usize)
            .map(|pos| pos as u32)
    }

    fn next_clear_bit(&self, start: u32, end: u32) -> Option<u32> {
        self.next_clear_bit_in(start as usize, end as usize)
            .map(|pos| pos as u32)
    }

    fn count_ones_below(&self, end: u32) -> u32 {
        AtomicBitSet::count_ones_below(self, end as usize) as u32
    }
}

impl BitStore for RoaringBitmap {
    #[inline]
    fn contains(&self, index: u32) -> bool {
        RoaringBitmap::contains(self, index)
    }

    fn next_set_bit(&self, start: u32, end: u32) -> Option<u32> {
        if start >= end {
            return None;
        }
        // Everything ranked below `start` precedes it; the next one in order is the answer.
        let preceding = u32::try_from(rank_below(self, start)).ok()?;
        self.select(preceding).filter(|&pos| pos < end)
    }

    /// Binary search over `[start, end)` for the first position at which the set count
    /// since `start` falls behind the distance, O(log² n) whatever the run lengths.
    fn next_clear_bit(&self, start: u32, end: u32) -> Option<u32> {
        if start >= end {
            return None;
        }
        let preceding = rank_below(self, start);
        let all_set_through = |pos: u32| self.rank(pos) - preceding == (pos - start) as u64 + 1;
        if all_set_through(end - 1) {
            return None;
        }
        let (mut low, mut high) = (start, end - 1);
        while low < high {
            let mid = low + (high - low) / 2;
            if all_set_through(mid) {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        Some(low)
    }

    fn count_ones_below(&self, end: u32) -> u32 {
        rank_below(self, end) as u32
    }
}

/// Number of set positions in `[0, end)`.
fn rank_below(bitmap: &RoaringBitmap, end: u32) -> u64 {
    match end.checked_sub(1) {
        Some(last) => bitmap.rank(last),
        None => 0,
    }
}

/// A store guarded by a lock, for owners that mutate plain bit-sets.
///
/// The read lock is taken for the duration of a single primitive query only. A poisoned
/// lock still serves reads.
impl<S: BitStore> BitStore for RwLock<S> {
    fn contains(&self, index: u32) -> bool {
        self.read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(index)
    }

    fn next_set_bit(&self, start: u32, end: u32) -> Option<u32> {
        self.read()
            .unwrap_or_else(PoisonError::into_inner)
            .next_set_bit(start, end)
    }

    fn next_clear_bit(&self, start: u32, end: u32) -> Option<u32> {
        self.read()
            .unwrap_or_else(PoisonError::into_inner)
            .next_clear_bit(start, end)
    }

    fn count_ones_below(&self, end: u32) -> u32 {
        self.read()
            .unwrap_or_else(PoisonError::into_inner)
            .count_ones_below(end)
    }
}
