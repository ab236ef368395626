use std::iter::FusedIterator;
use std::mem;
use std::slice::{Iter as SliceIter, IterMut as SliceIterMut};
use std::vec::IntoIter as VecIntoIter;

use super::hash_table::{unlink, Chain, HashNode};
use super::HashTable;

impl<K, V, P> IntoIterator for HashTable<K, V, P> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::replace(&mut self.len, 0);
        let buckets = mem::take(&mut self.buckets);

        IntoIter {
            buckets: Vec::from(buckets).into_iter(),
            node: None,
            len,
        }
    }
}

/// An owned iterator over the entries of a [`HashTable`], in bucket order.
pub struct IntoIter<K, V> {
    pub(crate) buckets: VecIntoIter<Chain<K, V>>,
    pub(crate) node: Chain<K, V>,
    pub(crate) len: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(mut node) = self.node.take() {
                self.node = node.next.take();
                self.len -= 1;
                return Some((node.key, node.value));
            }
            self.node = self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        unlink(self.node.take());
        for chain in self.buckets.by_ref() {
            unlink(chain);
        }
    }
}

impl<'a, K, V, P> IntoIterator for &'a HashTable<K, V, P> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.buckets.iter(),
            node: None,
            len: self.len(),
        }
    }
}

/// A borrowed iterator over the entries of a [`HashTable`], in bucket order.
pub struct Iter<'a, K, V> {
    pub(crate) buckets: SliceIter<'a, Chain<K, V>>,
    pub(crate) node: Option<&'a HashNode<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node {
                self.node = node.next.as_deref();
                self.len -= 1;
                return Some(node.tuple());
            }
            self.node = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            buckets: self.buckets.clone(),
            node: self.node,
            len: self.len,
        }
    }
}

/// An iterator over the values of a [`HashTable`], as mutable references.
pub struct ValuesMut<'a, K, V> {
    pub(crate) buckets: SliceIterMut<'a, Chain<K, V>>,
    pub(crate) node: Option<&'a mut HashNode<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node.take() {
                let HashNode { value, next, .. } = node;
                self.node = next.as_deref_mut();
                self.len -= 1;
                return Some(value);
            }
            self.node = self.buckets.next()?.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

/// An iterator over the keys of a [`HashTable`], as references.
pub struct Keys<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`HashTable`], as references.
pub struct Values<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}
