use std::{
    collections::{BTreeSet, HashSet},
    sync::{Arc, RwLock},
};

use roaring::RoaringBitmap;

use crate::{
    AndView, BitField, CardinalityStrategy, CollectionBitField, ErrorKind, NotView,
    SharedBitField, ViewConfig,
    tests::{assert_matches, field_of, random_positions, to_bools},
};

#[test]
fn test_ordered_collection() {
    let tree: BTreeSet<u32> = [0, 3, 4, 7].into_iter().collect();
    let field = CollectionBitField::ordered(Arc::new(tree), 8);
    assert!(field.indices().is_ordered());
    assert_eq!(field.next_set_bit(1), Some(3));
    assert_eq!(field.next_clear_bit(3), Some(5));
    assert_matches(&field, &to_bools(8, &[0, 3, 4, 7]));
}

#[test]
fn test_unordered_collection() {
    let hashed: HashSet<u32> = [0, 3, 4, 7].into_iter().collect();
    let field = CollectionBitField::unordered(Arc::new(hashed), 8);
    assert!(!field.indices().is_ordered());
    assert_eq!(field.next_set_bit(4), Some(4));
    assert_eq!(field.next_set_bit(5), Some(7));
    assert_matches(&field, &to_bools(8, &[0, 3, 4, 7]));
}

#[test]
fn test_get_out_of_bounds() {
    let field = CollectionBitField::unordered(Arc::new(vec![1u32, 2]), 3);
    assert!(field.get(2).is_ok());
    let err = field.get(3).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::IndexOutOfBounds {
            index: 3,
            max_size: 3
        }
    ));
}

#[test]
fn test_indices_beyond_domain_are_ignored() {
    let tree: BTreeSet<u32> = [1, 5, 12, 40].into_iter().collect();
    let hashed: HashSet<u32> = tree.iter().copied().collect();
    let ordered = CollectionBitField::ordered(Arc::new(tree), 10);
    let unordered = CollectionBitField::unordered(Arc::new(hashed), 10);
    for field in [&ordered, &unordered] {
        assert_eq!(field.cardinality(), 2);
        assert_eq!(field.next_set_bit(6), None);
        assert!(!field.contains(12));
        assert_matches(field, &to_bools(10, &[1, 5]));
    }
}

#[test]
fn test_all_set_collection() {
    let tree: BTreeSet<u32> = (0..6).collect();
    let field = CollectionBitField::ordered(Arc::new(tree), 6);
    assert_eq!(field.next_clear_bit(0), None);
    assert_eq!(field.cardinality(), 6);
}

#[test]
fn test_empty_collection() {
    let field = CollectionBitField::ordered(Arc::new(BTreeSet::<u32>::new()), 4);
    assert_eq!(field.cardinality(), 0);
    assert_eq!(field.next_set_bit(0), None);
    assert_eq!(field.next_clear_bit(0), Some(0));
}

#[test]
fn test_ordered_and_unordered_agree() {
    fastrand::seed(4417002);
    for _ in 0..30 {
        let max_size = fastrand::u32(0..300);
        let density = fastrand::f64();
        let mut positions = random_positions(max_size, density);
        // A few out-of-domain indices must not change any answer.
        positions.extend((0..fastrand::usize(0..3)).map(|_| max_size + fastrand::u32(0..50)));

        let tree: BTreeSet<u32> = positions.iter().copied().collect();
        let hashed: HashSet<u32, ahash::RandomState> = positions.iter().copied().collect();
        let bitmap: RoaringBitmap = positions.iter().copied().collect();
        let listed = positions.clone();

        let fields = [
            CollectionBitField::ordered(Arc::new(tree), max_size),
            CollectionBitField::ordered(Arc::new(bitmap), max_size),
            CollectionBitField::unordered(Arc::new(hashed), max_size),
            CollectionBitField::unordered(Arc::new(listed), max_size),
        ];
        let in_domain = positions
            .iter()
            .copied()
            .filter(|&p| p < max_size)
            .collect::<Vec<_>>();
        let expected = to_bools(max_size, &in_domain);
        for field in &fields {
            assert_matches(field, &expected);
        }
    }
}

#[test]
fn test_locked_collection_sees_owner_updates() {
    let tree = Arc::new(RwLock::new(BTreeSet::<u32>::new()));
    let field = CollectionBitField::ordered(tree.clone(), 100);
    assert_eq!(field.next_set_bit(0), None);

    tree.write().unwrap().extend([10, 20]);
    assert_eq!(field.next_set_bit(0), Some(10));
    assert_eq!(field.next_set_bit(11), Some(20));
    assert_eq!(field.cardinality(), 2);
}

#[test]
fn test_repeated_indices_counted_once() {
    let listed: SharedBitField =
        Arc::new(CollectionBitField::unordered(Arc::new(vec![1u32, 1, 2, 9]), 4));
    assert_eq!(listed.cardinality(), 2);
    assert_matches(listed.as_ref(), &to_bools(4, &[1, 2]));

    let complement = NotView::new(listed.clone());
    assert_eq!(complement.cardinality(), 2);
    assert_matches(&complement, &to_bools(4, &[0, 3]));

    let config = ViewConfig::default()
        .with_cardinality(CardinalityStrategy::InclusionExclusion);
    let view = AndView::new(listed, [field_of(4, &[1, 2])])
        .unwrap()
        .with_config(config)
        .unwrap();
    assert_eq!(view.cardinality(), 2);
}
