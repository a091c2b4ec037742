use std::sync::Arc;

use roaring::RoaringBitmap;

use crate::{BitField, BitFieldSet, SharedBitField};

mod collection_bit_field_tests;

/// Leaf field over a roaring bitmap holding `positions`.
pub(crate) fn field_of(max_size: u32, positions: &[u32]) -> SharedBitField {
    let bitmap: RoaringBitmap = positions.iter().copied().collect();
    Arc::new(BitFieldSet::new(Arc::new(bitmap), max_size))
}

/// Random positions in `[0, max_size)`, each present with probability `density`.
pub(crate) fn random_positions(max_size: u32, density: f64) -> Vec<u32> {
    (0..max_size).filter(|_| fastrand::f64() < density).collect()
}

/// Membership vector of `positions` over `[0, max_size)`.
pub(crate) fn to_bools(max_size: u32, positions: &[u32]) -> Vec<bool> {
    let mut bools = vec![false; max_size as usize];
    for &pos in positions {
        bools[pos as usize] = true;
    }
    bools
}

/// Checks every query of `field` against the expected membership vector.
pub(crate) fn assert_matches(field: &dyn BitField, expected: &[bool]) {
    let max_size = expected.len() as u32;
    assert_eq!(field.max_size(), max_size);
    for index in 0..max_size {
        assert_eq!(
            field.get(index).unwrap(),
            expected[index as usize],
            "get({index})"
        );
    }
    assert!(field.get(max_size).is_err());
    for start in 0..=max_size + 1 {
        let next_set = (start..max_size).find(|&i| expected[i as usize]);
        let next_clear = (start..max_size).find(|&i| !expected[i as usize]);
        assert_eq!(field.next_set_bit(start), next_set, "next_set_bit({start})");
        assert_eq!(
            field.next_clear_bit(start),
            next_clear,
            "next_clear_bit({start})"
        );
    }
    let count = expected.iter().filter(|&&bit| bit).count() as u32;
    assert_eq!(field.cardinality(), count, "cardinality");
}
