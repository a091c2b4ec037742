//! A thread-safe fixed-capacity bit set implementation using atomic operations.

use std::sync::atomic::{AtomicU64, Ordering};

/// A thread-safe fixed-capacity bit set implementation using atomic operations.
///
/// `AtomicBitSet` stores a fixed-size collection of bits where each bit can be atomically
/// read, set, or cleared through a shared reference. This makes it suitable as the backing
/// storage of a read-only view that its owner keeps updating: the owner holds an
/// `Arc<AtomicBitSet>`, flips bits as data arrives, and every view built over the same
/// `Arc` sees the new state on its next query.
///
/// # Design and Implementation
///
/// The bit set is backed by a `Vec<AtomicU64>` where each `u64` stores 64 bits. Bit index
/// `i` is stored in:
/// - Array element: `i / 64` (or `i >> 6`)
/// - Bit position within element: `i % 64` (or `i & 63`)
///
/// Bits in the final word beyond `len()` are never set.
///
/// ## Memory Ordering
///
/// - Write operations use `SeqCst` ordering
/// - Scan and count operations use `Relaxed` ordering
///
/// ## Concurrency Considerations
///
/// Scans and counts load one word at a time. A scan that runs concurrently with writers
/// observes each word at some point during the scan, but not a single consistent snapshot
/// of the whole set.
pub struct AtomicBitSet(Vec<AtomicU64>, usize);

impl AtomicBitSet {
    /// Creates a new `AtomicBitSet` with the specified number of bits.
    ///
    /// All bits are initially unset (false).
    pub fn new(size: usize) -> Self {
        let vec_len = size.div_ceil(64);
        AtomicBitSet((0..vec_len).map(|_| AtomicU64::new(0)).collect(), size)
    }

    /// Creates a new `AtomicBitSet` of `size` bits with the given positions set.
    ///
    /// # Panics
    ///
    /// Panics if any position is `>= size`.
    pub fn from_positions(size: usize, positions: impl IntoIterator<Item = usize>) -> Self {
        let set = Self::new(size);
        for pos in positions {
            set.set(pos);
        }
        set
    }

    /// Returns the number of bits in the bit set.
    #[inline]
    pub fn len(&self) -> usize {
        self.1
    }

    /// Checks whether the bit set has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Atomically reads the value of a bit at the specified index.
    ///
    /// The result may become stale immediately after the method returns if another
    /// thread changes the bit.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize, ordering: Ordering) -> bool {
        assert!(index < self.len());
        let (num, pos) = self.bit_location(index);
        (num.load(ordering) & (1 << pos)) != 0
    }

    /// Atomically sets a bit to the specified value and returns its previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn set_value(&self, index: usize, value: bool) -> bool {
        if value {
            self.set(index)
        } else {
            self.reset(index)
        }
    }

    /// Atomically sets a bit to true and returns its previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn set(&self, index: usize) -> bool {
        assert!(index < self.len());
        let (num, pos) = self.bit_location(index);
        (num.fetch_or(1 << pos, Ordering::SeqCst) & (1 << pos)) != 0
    }

    /// Atomically sets a bit to false and returns its previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn reset(&self, index: usize) -> bool {
        assert!(index < self.len());
        let (num, pos) = self.bit_location(index);
        (num.fetch_and(!(1 << pos), Ordering::SeqCst) & (1 << pos)) != 0
    }

    /// Counts the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.0
            .iter()
            .map(|num| num.load(Ordering::Relaxed).count_ones() as usize)
            .sum()
    }

    /// Counts the number of set bits in `[0, end)`.
    ///
    /// `end` may exceed `len()`; positions past the end of the set are unset.
    pub fn count_ones_below(&self, end: usize) -> usize {
        let end = end.min(self.len());
        let full_words = end >> 6;
        let mut count = self.0[..full_words]
            .iter()
            .map(|num| num.load(Ordering::Relaxed).count_ones() as usize)
            .sum::<usize>();
        let tail = end & 63;
        if tail != 0 {
            let word = self.0[full_words].load(Ordering::Relaxed);
            count += (word & ((1u64 << tail) - 1)).count_ones() as usize;
        }
        count
    }

    /// Returns the index of the first set bit at or after `start`, or `None` if there
    /// is no set bit in `[start, len())`.
    pub fn next_set_bit(&self, start: usize) -> Option<usize> {
        self.scan_words(start, self.len(), 0)
    }

    /// Returns the index of the first set bit in `[start, end)`.
    ///
    /// Only the words overlapping the range are read, whatever the content past `end`.
    pub fn next_set_bit_in(&self, start: usize, end: usize) -> Option<usize> {
        self.scan_words(start, end.min(self.len()), 0)
    }

    /// Returns the index of the first unset bit at or after `start`.
    ///
    /// Positions at or beyond `len()` are treated as unset, so a set with no unset bit
    /// in `[start, len())` returns `max(start, len())`.
    pub fn next_clear_bit(&self, start: usize) -> usize {
        self.scan_words(start, self.len(), u64::MAX)
            .unwrap_or_else(|| start.max(self.len()))
    }

    /// Returns the index of the first unset bit in `[start, end)`, treating positions
    /// at or beyond `len()` as unset.
    pub fn next_clear_bit_in(&self, start: usize, end: usize) -> Option<usize> {
        if start >= end {
            return None;
        }
        self.scan_words(start, end.min(self.len()), u64::MAX)
            .or_else(|| Some(start.max(self.len())).filter(|&pos| pos < end))
    }

    /// First position in `[start, end)` whose bit, xor-ed with `flip`, is one.
    /// `end` must not exceed `len()`.
    fn scan_words(&self, start: usize, end: usize, flip: u64) -> Option<usize> {
        if start >= end {
            return None;
        }
        let last_word = (end - 1) >> 6;
        let mut word_index = start >> 6;
        let mut word =
            (self.0[word_index].load(Ordering::Relaxed) ^ flip) & (u64::MAX << (start & 63));
        loop {
            if word != 0 {
                let pos = (word_index << 6) + word.trailing_zeros() as usize;
                return (pos < end).then_some(pos);
            }
            if word_index == last_word {
                return None;
            }
            word_index += 1;
            word = self.0[word_index].load(Ordering::Relaxed) ^ flip;
        }
    }

    fn bit_location(&self, index: usize) -> (&AtomicU64, usize) {
        (&self.0[index >> 6], index & 63)
    }
}

impl std::fmt::Debug for AtomicBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtomicBitSet")
            .field("len", &self.len())
            .field("ones", &self.count_ones())
            .finish()
    }
}
