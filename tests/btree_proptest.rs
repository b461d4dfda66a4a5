//! Property tests: the tree against `std::collections::BTreeSet`.

use std::collections::BTreeSet;

use interchangedb_btree::BTree;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16),
    Delete(u16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // A small key domain makes deletes of present keys (and repeated
    // inserts) common.
    prop_oneof![
        3 => (0u16..512).prop_map(Op::Insert),
        2 => (0u16..512).prop_map(Op::Delete),
    ]
}

/// A set of distinct keys plus two independent orderings of it.
fn permutations() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    prop::collection::btree_set(-5_000i32..5_000, 0..300)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_flat_map(|keys| (Just(keys.clone()).prop_shuffle(), Just(keys).prop_shuffle()))
}

proptest! {
    #[test]
    fn prop_matches_reference_set(t in 2usize..6, ops in prop::collection::vec(op_strategy(), 1..400)) {
        let mut tree = BTree::new(t).unwrap();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(k) => {
                    prop_assert_eq!(tree.insert(k), model.insert(k));
                }
                Op::Delete(k) => {
                    prop_assert_eq!(tree.delete(&k), model.remove(&k));
                }
            }
            prop_assert!(tree.check_invariants().is_ok(), "{:?}", tree.check_invariants());
        }

        prop_assert_eq!(tree.len(), model.len());
        prop_assert_eq!(tree.keys(), model.iter().copied().collect::<Vec<_>>());
        for k in 0u16..512 {
            prop_assert_eq!(tree.contains(&k), model.contains(&k));
        }
    }

    #[test]
    fn prop_round_trip_empties_tree(t in 2usize..6, (inserts, deletes) in permutations()) {
        let mut tree = BTree::new(t).unwrap();
        for &k in &inserts {
            prop_assert!(tree.insert(k));
        }
        prop_assert_eq!(tree.len(), inserts.len());

        for &k in &deletes {
            prop_assert!(tree.delete(&k));
            prop_assert!(tree.search(&k).is_none());
        }

        prop_assert_eq!(tree.len(), 0);
        prop_assert_eq!(tree.root().n(), 0);
        prop_assert!(tree.root().is_leaf());
    }

    #[test]
    fn prop_absent_delete_keeps_keys(t in 2usize..5, keys in prop::collection::btree_set(0i32..1_000, 0..200), probe in 1_000i32..2_000) {
        let mut tree = BTree::new(t).unwrap();
        for &k in &keys {
            tree.insert(k);
        }
        let before = tree.keys();

        prop_assert!(!tree.delete(&probe));

        prop_assert_eq!(tree.keys(), before);
        prop_assert!(tree.check_invariants().is_ok());
    }
}
