//! Leaf bit-fields, backed directly by externally-owned storage.

pub mod bit_field_set;
pub mod collection_bit_field;

pub use bit_field_set::BitFieldSet;
pub use collection_bit_field::CollectionBitField;
