use std::fmt::{self, Debug, Formatter};

use super::TableKey;

/// The hashing and equality capability a [`HashTable`](crate::collections::hash::HashTable) is
/// built with, similar in spirit to [`BuildHasher`](std::hash::BuildHasher) but also responsible
/// for deciding when two keys are the same.
///
/// Keys which are equal according to [`equals`](KeyPolicy::equals) must produce the same
/// [`hash`](KeyPolicy::hash).
pub trait KeyPolicy<K: ?Sized> {
    fn hash(&self, key: &K) -> u64;

    fn equals(&self, a: &K, b: &K) -> bool;
}

/// The default policy, which defers to the key's own [`TableKey`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Structural;

impl<K: TableKey + ?Sized> KeyPolicy<K> for Structural {
    fn hash(&self, key: &K) -> u64 {
        key.table_hash()
    }

    fn equals(&self, a: &K, b: &K) -> bool {
        a.table_eq(b)
    }
}

/// A policy made from a pair of closures, for keys that should be hashed or compared differently
/// from their [`TableKey`] implementation, or that don't have one.
#[derive(Clone, Copy)]
pub struct FnPolicy<H, E> {
    hash: H,
    equals: E,
}

impl<H, E> FnPolicy<H, E> {
    pub const fn new(hash: H, equals: E) -> FnPolicy<H, E> {
        FnPolicy {
            hash,
            equals,
        }
    }
}

impl<K: ?Sized, H, E> KeyPolicy<K> for FnPolicy<H, E>
where
    H: Fn(&K) -> u64,
    E: Fn(&K, &K) -> bool,
{
    fn hash(&self, key: &K) -> u64 {
        (self.hash)(key)
    }

    fn equals(&self, a: &K, b: &K) -> bool {
        (self.equals)(a, b)
    }
}

impl<H, E> Debug for FnPolicy<H, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPolicy").finish_non_exhaustive()
    }
}
