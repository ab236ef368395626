#![cfg(test)]

use std::collections::BTreeMap;

use proptest::prelude::*;

use super::*;
use crate::collections::traits::{Natural, Reverse};
use crate::util::alloc::DropCounter;

fn tree_of(keys: &[i32]) -> RedBlackTree<i32, i32> {
    keys.iter().map(|k| (*k, *k * 10)).collect()
}

fn visit(tree: &RedBlackTree<i32, i32>, order: Order) -> Vec<i32> {
    let mut keys = Vec::new();
    tree.for_each(order, |k, _| keys.push(*k));
    keys
}

#[test]
fn test_insert_and_remove_with_two_children() {
    let mut tree = tree_of(&[10, 5, 15, 3, 7, 13, 17]);

    assert_eq!(visit(&tree, Order::In), [3, 5, 7, 10, 13, 15, 17]);
    assert_eq!(visit(&tree, Order::Pre), [10, 5, 3, 7, 15, 13, 17]);
    assert_eq!(tree.check(), Ok(2));

    assert_eq!(tree.remove(&10), Some(100), "Removing a present key should return its value.");
    assert_eq!(visit(&tree, Order::In), [3, 5, 7, 13, 15, 17]);
    assert_eq!(tree.find(&10), None);
    assert_eq!(tree.len(), 6);
    assert!(
        tree.check().is_ok(),
        "Removing a node with two children should keep the tree balanced: {:?}", tree
    );
}

#[test]
fn test_traversal_orders() {
    let tree = tree_of(&[1, 2, 3]);

    assert_eq!(visit(&tree, Order::In), [1, 2, 3]);
    assert_eq!(visit(&tree, Order::Pre), [2, 1, 3], "Ascending inserts should rotate 2 to the root.");
    assert_eq!(visit(&tree, Order::Post), [1, 3, 2]);
    assert_eq!(Order::default(), Order::In);
}

#[test]
fn test_duplicate_insert() {
    let mut tree = RedBlackTree::new();
    assert_eq!(tree.insert("k", 1), None);
    assert_eq!(tree.insert("k", 2), Some(1), "Replacing a value should return the old one.");

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.find("k"), Some(&2));
}

#[test]
fn test_empty_boundaries() {
    let mut tree: RedBlackTree<i32, i32> = RedBlackTree::new();

    assert!(tree.is_empty());
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert_eq!(tree.find(&0), None);
    assert_eq!(tree.remove(&0), None);
    assert_eq!(tree.check(), Ok(0));

    tree.insert(1, 10);
    assert_eq!(tree.remove(&2), None, "Removing an absent key should do nothing.");
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_min_max_and_lookup() {
    let mut tree = tree_of(&[8, 4, 12, 2, 6, 10, 14, 1]);

    assert_eq!(tree.min_entry(), Some((&1, &10)));
    assert_eq!(tree.max_entry(), Some((&14, &140)));
    assert_eq!(tree.min(), Some(&10));
    assert_eq!(tree.max(), Some(&140));

    assert!(tree.contains(&6));
    assert!(!tree.contains(&7));
    assert_eq!(tree.get_entry(&12), Some((&12, &120)));

    if let Some(value) = tree.find_mut(&6) {
        *value += 1;
    }
    assert_eq!(tree.find(&6), Some(&61));
    assert_eq!(tree.remove_entry(&4), Some((4, 40)));
    assert_eq!(tree.check().map(|_| tree.len()), Ok(7));
}

#[test]
fn test_custom_comparators() {
    let mut tree = RedBlackTree::with_comparator(Reverse(Natural));
    tree.extend([(1, 'a'), (3, 'c'), (2, 'b')]);

    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(tree.min(), Some(&'c'), "The first key under a reversed order is the largest.");
    assert!(tree.check().is_ok());

    let mut tree = RedBlackTree::with_comparator(|a: &String, b: &String| a.len() < b.len());
    tree.insert(String::from("ccc"), 3);
    tree.insert(String::from("a"), 1);
    tree.insert(String::from("bb"), 2);
    assert_eq!(
        tree.insert(String::from("zz"), 4), Some(2),
        "Keys the comparator can't tell apart should be the same key."
    );

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.keys().map(String::as_str).collect::<Vec<_>>(), ["a", "bb", "ccc"]);
    assert_eq!(tree.find(&String::from("qq")), Some(&4));
}

#[test]
fn test_equals() {
    let a = tree_of(&[1, 2, 3, 4, 5]);
    let b = tree_of(&[5, 4, 3, 2, 1]);

    assert!(a.equals(&b), "Insertion order shouldn't affect equality.");
    assert_eq!(a, b);
    assert_ne!(visit(&a, Order::Pre), visit(&b, Order::Pre));

    let mut c = b.clone();
    c.insert(3, 0);
    assert_ne!(a, c, "Trees with different values shouldn't be equal.");

    c.remove(&3);
    assert!(!a.equals(&c), "Trees of different lengths shouldn't be equal.");
}

#[test]
fn test_iterators() {
    let tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);

    let mut iter = tree.iter();
    assert_eq!(iter.len(), 7);
    assert_eq!(iter.next(), Some((&1, &10)));
    assert_eq!(iter.len(), 6);

    assert_eq!(tree.values().copied().collect::<Vec<_>>(), [10, 20, 30, 40, 50, 60, 70]);
    assert_eq!(
        (&tree).into_iter().count(), tree.len(),
        "Borrowed iteration should visit every entry."
    );
    assert_eq!(
        tree.into_iter().collect::<Vec<_>>(),
        [(1, 10), (2, 20), (3, 30), (4, 40), (5, 50), (6, 60), (7, 70)]
    );
}

#[test]
fn test_drops() {
    let counter = DropCounter::new();
    let mut tree = RedBlackTree::new();
    for key in 0..10 {
        tree.insert(key, counter.clone());
    }

    tree.remove(&3);
    assert_eq!(counter.dropped(), 1);

    tree.insert(4, counter.clone());
    assert_eq!(counter.dropped(), 2, "Replaced values should be dropped by the caller.");

    let mut iter = tree.into_iter();
    iter.next();
    drop(iter);
    assert_eq!(counter.dropped(), 11, "Dropping an owned iterator should drop what's left.");

    let mut tree = RedBlackTree::new();
    tree.insert(0, counter.clone());
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(counter.dropped(), 12);
}

#[test]
fn test_slot_reuse() {
    let mut tree = tree_of(&[1, 2, 3, 4]);
    tree.remove(&2);
    tree.remove(&4);
    tree.insert(5, 50);

    assert_eq!(tree.nodes.len(), 3, "Freed slots should be reused by later inserts.");
    assert_eq!(tree.check(), Ok(1));
}

#[test]
fn test_arena() {
    let mut arena = Arena::new();
    let a = arena.alloc('a');
    let b = arena.alloc('b');

    assert_eq!(Handle::from_index(a.index()), a);
    assert_eq!(arena.take(a), 'a');
    assert_eq!(arena.alloc('c'), a, "Freed slots should be reused first.");

    let (first, second) = arena.pair_mut(b, a);
    std::mem::swap(first, second);
    assert_eq!((arena[a], arena[b]), ('b', 'c'));
    assert_eq!(arena.len(), 2);
}

#[test]
#[should_panic]
fn test_arena_freed_access() {
    let mut arena = Arena::new();
    let handle = arena.alloc(0);
    arena.take(handle);
    let _value = arena[handle];
}

#[test]
fn test_check_detects_damage() {
    let mut tree = tree_of(&[2, 1, 3]);
    if let Some(root) = tree.root {
        tree.nodes[root].color = Color::Red;
    }
    assert_eq!(tree.check(), Err(InvariantViolation::RedRoot(RedRoot)));

    let mut tree = tree_of(&[2, 1, 3]);
    if let Some(root) = tree.root {
        tree.nodes[root].key = 0;
    }
    assert!(
        tree.check().is_err_and(|e| e.is_unordered()),
        "A key out of place should be reported."
    );

    let mut tree = tree_of(&[2, 1, 3, 4]);
    if let Some(right) = tree.root.and_then(|root| tree.nodes[root][Side::Right]) {
        tree.nodes[right].color = Color::Red;
    }
    assert_eq!(
        tree.check(), Err(InvariantViolation::RedChild(RedChild { depth: 1 })),
        "A red node with a red child should be reported."
    );

    let mut tree = tree_of(&[2, 1, 3]);
    if let Some(left) = tree.root.and_then(|root| tree.nodes[root][Side::Left]) {
        tree.nodes[left].color = Color::Black;
    }
    assert_eq!(
        tree.check(),
        Err(InvariantViolation::BlackHeight(BlackHeight { depth: 0, left: 1, right: 0 }))
    );

    let mut tree = tree_of(&[2, 1, 3]);
    if let Some(left) = tree.root.and_then(|root| tree.nodes[root][Side::Left]) {
        tree.nodes[left].parent = None;
    }
    assert_eq!(tree.check(), Err(InvariantViolation::BrokenParent(BrokenParent { depth: 1 })));

    let mut tree = tree_of(&[2, 1, 3]);
    tree.len = 5;
    assert_eq!(
        tree.check(),
        Err(InvariantViolation::CountMismatch(CountMismatch { counted: 3, recorded: 5 }))
    );
}

#[test]
fn test_format() {
    let tree = tree_of(&[2, 1]);

    assert_eq!(format!("{tree}"), "{1: 10, 2: 20}");
    assert!(format!("{tree:?}").contains("(2: 20) B"));
    assert!(format!("{tree:?}").contains("(1: 10) R"));
}

#[derive(Debug, Clone)]
enum TreeOp {
    Insert(i16, i16),
    Remove(i16),
    Find(i16),
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        5 => (-200_i16..200, any::<i16>()).prop_map(|(k, v)| TreeOp::Insert(k, v)),
        3 => (-200_i16..200).prop_map(TreeOp::Remove),
        2 => (-200_i16..200).prop_map(TreeOp::Find),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_matches_btree_map(ops in proptest::collection::vec(tree_op_strategy(), 0..400)) {
        let mut tree = RedBlackTree::new();
        let mut model = BTreeMap::new();

        for op in &ops {
            match *op {
                TreeOp::Insert(k, v) => {
                    prop_assert_eq!(tree.insert(k, v), model.insert(k, v));
                },
                TreeOp::Remove(k) => {
                    prop_assert_eq!(tree.remove(&k), model.remove(&k));
                },
                TreeOp::Find(k) => {
                    prop_assert_eq!(tree.find(&k), model.get(&k));
                },
            }
            prop_assert!(tree.check().is_ok(), "invariants broken after {:?}", op);
            prop_assert_eq!(tree.len(), model.len());
        }

        prop_assert!(tree.iter().eq(model.iter()), "in-order iteration should match");
        prop_assert_eq!(tree.min_entry(), model.first_key_value());
        prop_assert_eq!(tree.max_entry(), model.last_key_value());
    }
}
