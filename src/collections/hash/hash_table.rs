use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::mem;

use super::{Iter, Keys, Values, ValuesMut};
use crate::collections::traits::{KeyPolicy, Structural};
use crate::util::fmt::DebugRaw;

/// The number of buckets used when no capacity, or a capacity of 0, is requested.
pub const DEFAULT_CAPACITY: usize = 32;

/// A map of keys to values which uses a [`KeyPolicy`] to hash and compare its keys, resolving
/// collisions by chaining.
///
/// The number of buckets is chosen at construction and never changes: the table doesn't rehash as
/// it fills up, so chains grow with the load factor instead. Pick a capacity close to the number of
/// entries you expect to store.
///
/// It is a logic error for keys in a HashTable to be manipulated in a way that changes their hash.
/// Because of this, HashTable's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashTable.
/// - `α`: The load factor, `n / capacity`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1 + α)`* |
/// | `get` | `O(1 + α)`* |
/// | `remove` | `O(1 + α)`* |
/// | `contains_key` | `O(1 + α)`* |
/// | `clear` | `O(n + capacity)` |
///
/// \* Every key that lands in the same bucket has to be compared, so in the worst case, where all
/// keys collide, these take `O(n)`.
pub struct HashTable<K, V, P = Structural> {
    pub(crate) buckets: Box<[Chain<K, V>]>,
    pub(crate) len: usize,
    pub(crate) policy: P,
}

pub(crate) type Chain<K, V> = Option<Box<HashNode<K, V>>>;

pub(crate) struct HashNode<K, V> {
    pub key: K,
    pub value: V,
    pub next: Chain<K, V>,
}

impl<K, V> HashNode<K, V> {
    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K, V> HashTable<K, V> {
    /// Creates an empty HashTable with [`DEFAULT_CAPACITY`] buckets, using the keys' own
    /// [`TableKey`](crate::collections::traits::TableKey) implementation.
    pub fn new() -> HashTable<K, V> {
        HashTable::with_capacity_and_policy(DEFAULT_CAPACITY, Structural)
    }

    /// Creates an empty HashTable with `capacity` buckets, using the keys' own
    /// [`TableKey`](crate::collections::traits::TableKey) implementation. A capacity of 0 is
    /// replaced with [`DEFAULT_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> HashTable<K, V> {
        HashTable::with_capacity_and_policy(capacity, Structural)
    }
}

impl<K, V, P> HashTable<K, V, P> {
    /// Creates an empty HashTable with [`DEFAULT_CAPACITY`] buckets and the provided `policy`.
    pub fn with_policy(policy: P) -> HashTable<K, V, P> {
        HashTable::with_capacity_and_policy(DEFAULT_CAPACITY, policy)
    }

    /// Creates an empty HashTable with `capacity` buckets and the provided `policy`. A capacity of
    /// 0 is replaced with [`DEFAULT_CAPACITY`].
    pub fn with_capacity_and_policy(capacity: usize, policy: P) -> HashTable<K, V, P> {
        let capacity = if capacity == 0 { DEFAULT_CAPACITY } else { capacity };

        HashTable {
            buckets: iter::repeat_with(|| None).take(capacity).collect(),
            len: 0,
            policy,
        }
    }

    /// Returns the number of entries in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets, which is fixed for the lifetime of the HashTable.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the average number of entries per bucket.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Returns the policy used to hash and compare keys.
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Removes every entry, leaving the capacity unchanged.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            unlink(bucket.take());
        }
        self.len = 0;
    }

    /// Calls `visit` with every entry, bucket by bucket and then in chain order within a bucket.
    /// The order has nothing to do with the keys themselves.
    pub fn for_each<F: FnMut(&K, &V)>(&self, mut visit: F) {
        for (key, value) in self {
            visit(key, value);
        }
    }

    /// Returns an iterator over all entries, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            buckets: self.buckets.iter_mut(),
            node: None,
            len: self.len,
        }
    }

    /// Returns the nodes chained from the bucket at `index`, in order.
    pub(crate) fn chain(&self, index: usize) -> impl Iterator<Item = &HashNode<K, V>> {
        iter::successors(self.buckets[index].as_deref(), |node| node.next.as_deref())
    }
}

impl<K, V, P: KeyPolicy<K>> HashTable<K, V, P> {
    /// Inserts the provided `key`-`value` pair. If an equal key is already present, its value is
    /// replaced and the previous value is returned. New keys are appended to the end of their
    /// bucket's chain.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let policy = &self.policy;
        let mut link = &mut self.buckets[index];

        while let Some(node) = link {
            if policy.equals(&node.key, &key) {
                return Some(mem::replace(&mut node.value, value));
            }
            link = &mut node.next;
        }

        *link = Some(Box::new(HashNode {
            key,
            value,
            next: None,
        }));
        self.len += 1;
        None
    }
}

impl<K, V, P> HashTable<K, V, P> {
    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        P: KeyPolicy<Q>,
        Q: ?Sized,
    {
        let index = self.bucket_index(key);
        self.chain(index)
            .find(|node| self.policy.equals(node.key.borrow(), key))
            .map(HashNode::tuple)
    }

    /// Returns a reference to the value associated with the provided `key` or None if the table
    /// contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        P: KeyPolicy<Q>,
        Q: ?Sized,
    {
        self.get_entry(key).map(|e| e.1)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// table contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        P: KeyPolicy<Q>,
        Q: ?Sized,
    {
        let (index, position) = self.locate(key)?;

        let mut node = self.buckets[index].as_deref_mut()?;
        for _ in 0..position {
            node = node.next.as_deref_mut()?;
        }
        Some(&mut node.value)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        P: KeyPolicy<Q>,
        Q: ?Sized,
    {
        self.locate(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        P: KeyPolicy<Q>,
        Q: ?Sized,
    {
        let (index, position) = self.locate(key)?;

        // Position 0 replaces the bucket's head, anything else relinks the previous node.
        let mut link = &mut self.buckets[index];
        for _ in 0..position {
            link = &mut link.as_mut()?.next;
        }

        let mut node = link.take()?;
        *link = node.next.take();
        self.len -= 1;
        Some((node.key, node.value))
    }

    /// Removes the entry associated with `key`, returning true if there was one.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        P: KeyPolicy<Q>,
        Q: ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Returns the bucket associated with the hash of `key`.
    pub(crate) fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        P: KeyPolicy<Q>,
        Q: ?Sized,
    {
        // UNCHECKED: The capacity is never 0.
        (self.policy.hash(key) % self.capacity() as u64) as usize
    }

    /// Finds the bucket of `key` and its position within that bucket's chain, or None if the
    /// table doesn't contain the key.
    pub(crate) fn locate<Q>(&self, key: &Q) -> Option<(usize, usize)>
    where
        K: Borrow<Q>,
        P: KeyPolicy<Q>,
        Q: ?Sized,
    {
        let index = self.bucket_index(key);
        self.chain(index)
            .position(|node| self.policy.equals(node.key.borrow(), key))
            .map(|position| (index, position))
    }
}

/// Drops a chain one node at a time, rather than recursively through each node's `next`.
pub(crate) fn unlink<K, V>(mut chain: Chain<K, V>) {
    while let Some(mut node) = chain {
        chain = node.next.take();
    }
}

impl<K, V, P> Drop for HashTable<K, V, P> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Clone, V: Clone, P: Clone> Clone for HashTable<K, V, P> {
    fn clone(&self) -> Self {
        let mut buckets: Box<[Chain<K, V>]> =
            iter::repeat_with(|| None).take(self.capacity()).collect();

        for (index, bucket) in buckets.iter_mut().enumerate() {
            let mut link = bucket;
            for node in self.chain(index) {
                let clone = link.insert(Box::new(HashNode {
                    key: node.key.clone(),
                    value: node.value.clone(),
                    next: None,
                }));
                link = &mut clone.next;
            }
        }

        HashTable {
            buckets,
            len: self.len,
            policy: self.policy.clone(),
        }
    }
}

impl<K, V, P: Default> Default for HashTable<K, V, P> {
    fn default() -> Self {
        HashTable::with_policy(P::default())
    }
}

impl<K, V, P: KeyPolicy<K>> Extend<(K, V)> for HashTable<K, V, P> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, P: KeyPolicy<K> + Default> FromIterator<(K, V)> for HashTable<K, V, P> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = HashTable::default();
        table.extend(iter);
        table
    }
}

impl<K: Debug, V: Debug, P: Debug> Debug for HashTable<K, V, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = (0..self.capacity())
            .map(|index| {
                let chain = self.chain(index)
                    .map(|node| format!("({:?}: {:?})", node.key, node.value))
                    .collect::<Vec<_>>();
                DebugRaw(match chain.is_empty() {
                    true => String::from("-"),
                    false => chain.join(" -> "),
                })
            })
            .collect::<Vec<_>>();

        f.debug_struct("HashTable")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<K: Debug, V: Debug, P> Display for HashTable<K, V, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
