//! Composable read-only views over fixed-size bit-fields.
//!
//! A [`BitField`] is a predicate over the domain `[0, max_size)` that supports random
//! access and forward scans (`next_set_bit`, `next_clear_bit`) plus a `cardinality`
//! count. Leaf fields adapt concrete storage:
//!
//! - [`BitFieldSet`] - a native bit-set behind the [`BitStore`] capability
//!   ([`AtomicBitSet`](bitview_collections::AtomicBitSet), `RoaringBitmap`, ...).
//! - [`CollectionBitField`] - a collection of set indices (`BTreeSet<u32>`,
//!   `HashSet<u32>`, ...), with a fast path for ordered collections.
//!
//! Composite views combine other fields without materializing the result:
//!
//! - [`AndView`] - all operands set; scans use a convergence merge.
//! - [`OrView`] - any operand set; the dual of [`AndView`].
//! - [`NotView`] - complement of a single operand.
//!
//! Composites are themselves bit-fields and nest freely.

pub mod and_view;
pub mod bit_field;
pub mod boolean_function;
pub mod config;
pub mod constant;
pub mod indices;
pub mod leaf;
mod merge;
pub mod not_view;
pub mod or_view;
pub mod store;
#[cfg(test)]
mod tests;

pub use and_view::AndView;
pub use bit_field::{BitField, BitFieldExt, SharedBitField};
pub use bitview_common::{Error, ErrorKind, Result};
pub use boolean_function::BooleanFunction;
pub use config::{CardinalityStrategy, ViewConfig};
pub use constant::{ConstantBitField, empty, full};
pub use indices::{IndexCollection, Indices, OrderedIndexCollection};
pub use leaf::{BitFieldSet, CollectionBitField};
pub use not_view::NotView;
pub use or_view::OrView;
pub use store::BitStore;
