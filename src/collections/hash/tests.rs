#![cfg(test)]

use std::collections::HashMap;

use proptest::prelude::*;

use super::*;
use crate::collections::traits::{FnPolicy, TableKey};
use crate::util::alloc::DropCounter;
use crate::util::hash::FixedHash;

#[test]
fn test_small_capacity() {
    let mut table = HashTable::with_capacity(2);
    for (key, value) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
        table.insert(key, value);
    }

    assert_eq!(table.capacity(), 2);
    assert_eq!(table.len(), 4);
    for (key, value) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
        assert_eq!(table.get(key), Some(&value), "Colliding keys should keep their own values.");
    }

    assert!(table.remove("b"));
    assert!(!table.remove("b"), "Removing an absent key should report that nothing was found.");
    assert_eq!(table.get("b"), None);
    assert_eq!(table.get("a"), Some(&1));
    assert_eq!(table.get("c"), Some(&3));
    assert_eq!(table.get("d"), Some(&4));
    assert_eq!(table.len(), 3);
}

#[test]
fn test_single_bucket() {
    let mut table = HashTable::with_capacity(1);
    for key in 0..100 {
        table.insert(key, key * key);
    }

    assert_eq!(table.len(), 100);
    assert_eq!(table.load_factor(), 100.0);
    for key in 0..100 {
        assert_eq!(table.get(&key), Some(&(key * key)));
    }
    assert_eq!(
        table.keys().copied().collect::<Vec<_>>(), (0..100).collect::<Vec<_>>(),
        "A single chain should keep insertion order."
    );
}

#[test]
fn test_capacity_normalization() {
    let table: HashTable<u8, u8> = HashTable::with_capacity(0);
    assert_eq!(table.capacity(), DEFAULT_CAPACITY);
    assert_eq!(HashTable::<u8, u8>::new().capacity(), 32);
    assert_eq!(HashTable::<u8, u8>::default().capacity(), 32);
}

#[test]
fn test_bucket_placement() {
    let mut table = HashTable::with_capacity(7);
    table.insert(String::from("ab"), ());

    let index = ("ab".table_hash() % 7) as usize;
    assert_eq!(table.bucket_index("ab"), index);
    assert_eq!(table.chain(index).count(), 1, "Keys should land in hash % capacity.");
}

#[test]
fn test_hash_collisions() {
    let mut table = HashTable::with_capacity(4);
    table.insert(FixedHash::new(0, "zero"), 0);
    table.insert(FixedHash::new(0, "one"), 1);
    table.insert(FixedHash::new(2, "two"), 2);
    table.insert(FixedHash::new(0, "three"), 3);
    table.insert(FixedHash::new(4, "four"), 4);
    table.insert(FixedHash::new(1, "five"), 5);

    assert!(table.remove(&FixedHash::new(0, "zero")), "Removing the head of a chain should work.");
    assert!(table.remove(&FixedHash::new(0, "three")), "Removing inside a chain should work.");
    assert!(!table.remove(&FixedHash::new(1, "zero")));

    assert_eq!(
        table.into_iter().map(|(k, v)| (k.value(), v)).collect::<Vec<_>>(),
        [("one", 1), ("four", 4), ("five", 5), ("two", 2)],
        "HashTable should handle collisions so that no entries are lost during removal."
    );

    let mut table = HashTable::with_capacity(3);
    for (index, name) in ["a", "b", "c", "d"].into_iter().enumerate() {
        table.insert(FixedHash::new(1, name), index);
    }
    assert_eq!(table.remove_entry(&FixedHash::new(1, "b")).map(|e| e.1), Some(1));
    assert_eq!(
        table.values().copied().collect::<Vec<_>>(), [0, 2, 3],
        "Removing from the middle of a chain should relink its neighbours."
    );
}

#[test]
fn test_replace() {
    let mut table = HashTable::new();
    assert_eq!(table.insert('x', 1), None);
    assert_eq!(table.insert('x', 2), Some(1));

    assert_eq!(table.len(), 1);
    assert_eq!(table.get_entry(&'x'), Some((&'x', &2)));

    if let Some(value) = table.get_mut(&'x') {
        *value = 3;
    }
    assert_eq!(table.get(&'x'), Some(&3));
    assert!(table.contains_key(&'x'));
    assert!(!table.contains_key(&'y'));
}

#[test]
fn test_float_keys() {
    let mut table = HashTable::new();
    table.insert(f64::NAN, "nan");
    table.insert(1.5, "one and a half");

    assert_eq!(table.get(&f64::NAN), Some(&"nan"), "NaN keys should be found again.");
    assert_eq!(table.insert(f64::NAN, "again"), Some("nan"));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_composite_keys() {
    let mut table = HashTable::new();
    table.insert(vec![1, 2], "a");
    table.insert(vec![2, 1], "b");

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(&vec![2, 1]), Some(&"b"));
    assert_eq!(table.get([1, 2].as_slice()), Some(&"a"), "Vec keys should be found by slice.");

    let mut tuples = HashTable::new();
    tuples.insert((String::from("x"), 1), "c");
    assert_eq!(tuples.get(&(String::from("x"), 1)), Some(&"c"));
    assert_eq!(tuples.get(&(String::from("x"), 2)), None);
}

#[test]
fn test_custom_policy() {
    let policy = FnPolicy::new(
        |key: &&str| key.len() as u64,
        |a: &&str, b: &&str| a.eq_ignore_ascii_case(b),
    );
    let mut table: HashTable<&str, i32, _> = HashTable::with_capacity_and_policy(8, policy);

    table.insert("Key", 1);
    assert_eq!(table.insert("KEY", 2), Some(1), "The policy should decide which keys are equal.");
    assert_eq!(table.get(&"key"), Some(&2));
    assert_eq!(table.len(), 1);
    assert!(format!("{table:?}").contains("FnPolicy"));
}

#[test]
fn test_iteration() {
    let mut table: HashTable<u32, u32> = (0..10).map(|i| (i, i)).collect();

    for value in table.values_mut() {
        *value *= 2;
    }

    let mut sum = 0;
    table.for_each(|_, v| sum += v);
    assert_eq!(sum, 90);

    let mut keys = table.keys().copied().collect::<Vec<_>>();
    keys.sort();
    assert_eq!(keys, (0..10).collect::<Vec<_>>());
    assert_eq!(table.iter().len(), 10);
    assert_eq!(
        table.iter().collect::<Vec<_>>(), (&table).into_iter().collect::<Vec<_>>(),
        "Iteration should be bucket by bucket and repeatable."
    );
}

#[test]
fn test_clear_and_clone() {
    let mut table: HashTable<i32, &str> = HashTable::with_capacity(3);
    table.extend([(1, "a"), (4, "b"), (7, "c"), (2, "d")]);

    let clone = table.clone();
    table.clear();

    assert!(table.is_empty());
    assert_eq!(table.capacity(), 3, "Clearing shouldn't change the capacity.");
    assert_eq!(table.get(&1), None);

    assert_eq!(clone.len(), 4);
    assert_eq!(clone.capacity(), 3);
    assert_eq!(clone.get(&7), Some(&"c"));
}

#[test]
fn test_drops() {
    let counter = DropCounter::new();
    let mut table = HashTable::with_capacity(2);
    for key in 0..6 {
        table.insert(key, counter.clone());
    }

    table.remove(&0);
    assert_eq!(counter.dropped(), 1);

    let mut iter = table.into_iter();
    iter.next();
    drop(iter);
    assert_eq!(counter.dropped(), 6, "Dropping an owned iterator should drop what's left.");

    let mut table = HashTable::new();
    table.insert(0, counter.clone());
    drop(table);
    assert_eq!(counter.dropped(), 7);
}

#[test]
fn test_format() {
    let mut table = HashTable::with_capacity(2);
    table.insert(FixedHash::new(1, 'a'), 1);
    table.insert(FixedHash::new(1, 'b'), 2);

    let debug = format!("{table:?}");
    assert!(debug.contains("buckets: [-, "), "Empty buckets should be drawn as '-': {debug}");
    assert!(debug.contains(") -> ("), "Chains should be drawn in order: {debug}");
    assert!(debug.contains("cap: 2"));

    let table: HashTable<u8, u8> = [(1, 2)].into_iter().collect();
    assert_eq!(format!("{table}"), "#{1: 2}");
}

#[derive(Debug, Clone)]
enum TableOp {
    Insert(u16, u16),
    Remove(u16),
    Get(u16),
}

fn table_op_strategy() -> impl Strategy<Value = TableOp> {
    prop_oneof![
        5 => (0_u16..300, any::<u16>()).prop_map(|(k, v)| TableOp::Insert(k, v)),
        3 => (0_u16..300).prop_map(TableOp::Remove),
        2 => (0_u16..300).prop_map(TableOp::Get),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_matches_hash_map(
        capacity in 0_usize..16,
        ops in proptest::collection::vec(table_op_strategy(), 0..400),
    ) {
        let mut table = HashTable::with_capacity(capacity);
        let mut model = HashMap::new();

        for op in &ops {
            match *op {
                TableOp::Insert(k, v) => {
                    prop_assert_eq!(table.insert(k, v), model.insert(k, v));
                },
                TableOp::Remove(k) => {
                    prop_assert_eq!(table.remove(&k), model.remove(&k).is_some());
                },
                TableOp::Get(k) => {
                    prop_assert_eq!(table.get(&k), model.get(&k));
                },
            }
            prop_assert_eq!(table.len(), model.len(), "len mismatch after {:?}", op);
        }

        let mut entries = table.into_iter().collect::<Vec<_>>();
        let mut expected = model.into_iter().collect::<Vec<_>>();
        entries.sort();
        expected.sort();
        prop_assert_eq!(entries, expected);
    }
}
