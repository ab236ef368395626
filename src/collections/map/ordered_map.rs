use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::{IntoIter, Iter, Keys, Values};
use crate::collections::red_black::{Order, RedBlackTree};
use crate::collections::traits::{Comparator, Natural};

/// A map of keys to values, kept in key order by an internal [`RedBlackTree`].
///
/// Every operation is forwarded to the tree unchanged, so the map shares its complexity and its
/// notion of key equivalence: two keys are the same key when neither precedes the other according
/// to the map's [`Comparator`].
#[derive(Clone)]
pub struct OrderedMap<K, V, C = Natural> {
    pub(crate) tree: RedBlackTree<K, V, C>,
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Creates an empty map ordered by [`Natural`] ordering.
    pub const fn new() -> OrderedMap<K, V> {
        OrderedMap {
            tree: RedBlackTree::new(),
        }
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Creates an empty map ordered by the provided `comparator`.
    pub const fn with_comparator(comparator: C) -> OrderedMap<K, V, C> {
        OrderedMap {
            tree: RedBlackTree::with_comparator(comparator),
        }
    }

    /// Returns the number of entries in the map.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the map contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every entry from the map.
    pub fn clear(&mut self) {
        self.tree.clear()
    }

    /// Returns the entry with the first key, or None if the map is empty.
    pub fn min_entry(&self) -> Option<(&K, &V)> {
        self.tree.min_entry()
    }

    /// Returns the value associated with the first key, or None if the map is empty.
    pub fn min(&self) -> Option<&V> {
        self.tree.min()
    }

    /// Returns the entry with the last key, or None if the map is empty.
    pub fn max_entry(&self) -> Option<(&K, &V)> {
        self.tree.max_entry()
    }

    /// Returns the value associated with the last key, or None if the map is empty.
    pub fn max(&self) -> Option<&V> {
        self.tree.max()
    }

    /// Calls `visit` with every entry in ascending key order.
    pub fn for_each<F: FnMut(&K, &V)>(&self, visit: F) {
        self.tree.for_each(Order::In, visit)
    }

    /// Returns an iterator over all entries in ascending key order, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.tree.keys()
    }

    /// Returns an iterator over all values in ascending key order.
    pub fn values(&self) -> Values<'_, K, V> {
        self.tree.values()
    }
}

impl<K, V, C: Comparator<K>> OrderedMap<K, V, C> {
    /// Inserts the provided `key`-`value` pair, returning the previous value for the key if there
    /// was one.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.tree.insert(key, value)
    }

    /// Returns true if both maps hold equivalent keys mapped to equal values.
    pub fn equals<C2>(&self, other: &OrderedMap<K, V, C2>) -> bool
    where
        V: PartialEq,
    {
        self.tree.equals(&other.tree)
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Returns a reference to the value associated with `key`, or None if there is no such value.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.tree.find(key)
    }

    /// An alias of [`find`](OrderedMap::find).
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.tree.find(key)
    }

    /// Returns a mutable reference to the value associated with `key`, or None if there is no
    /// such value.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.tree.find_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.tree.contains(key)
    }

    /// Removes `key` from the map, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.tree.remove(key)
    }

    /// An alias of [`remove`](OrderedMap::remove).
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.tree.remove(key)
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.tree.remove_entry(key)
    }
}

impl<K, V, C: Default> Default for OrderedMap<K, V, C> {
    fn default() -> Self {
        OrderedMap::with_comparator(C::default())
    }
}

impl<K, V: PartialEq, C: Comparator<K>> PartialEq for OrderedMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<K, V: Eq, C: Comparator<K>> Eq for OrderedMap<K, V, C> {}

impl<K, V, C> IntoIterator for OrderedMap<K, V, C> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.iter()
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for OrderedMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.tree.extend(iter)
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for OrderedMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        OrderedMap {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<K: Debug, V: Debug, C> Debug for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedMap")
            .field("tree", &self.tree)
            .finish()
    }
}

impl<K: Debug, V: Debug, C> Display for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.tree, f)
    }
}
