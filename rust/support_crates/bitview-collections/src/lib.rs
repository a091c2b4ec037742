//! Concrete bit storage used as backing data for bitview leaf fields.

pub mod atomic_bit_set;

pub use atomic_bit_set::AtomicBitSet;
