use std::iter::FusedIterator;
use std::vec::IntoIter as VecIntoIter;

use super::{Arena, Handle, Link, Node, RedBlackTree, Side};

impl<'a, K, V, C> IntoIterator for &'a RedBlackTree<K, V, C> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            nodes: &self.nodes,
            stack: Vec::new(),
            len: self.len,
        };
        iter.descend(self.root);
        iter
    }
}

/// An in-order iterator over the entries of a [`RedBlackTree`], holding the path from the root to
/// the next entry.
pub struct Iter<'a, K, V> {
    pub(crate) nodes: &'a Arena<Node<K, V>>,
    pub(crate) stack: Vec<Handle>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Pushes `link` and its chain of left children.
    fn descend(&mut self, mut link: Link) {
        while let Some(handle) = link {
            self.stack.push(handle);
            link = self.nodes[handle][Side::Left];
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let nodes = self.nodes;
        let node = &nodes[handle];
        self.descend(node[Side::Right]);
        self.len -= 1;
        Some(node.tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V, C> IntoIterator for RedBlackTree<K, V, C> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let order = self.iter().into_order();
        IntoIter {
            nodes: self.nodes,
            order: order.into_iter(),
        }
    }
}

impl<K, V> Iter<'_, K, V> {
    /// Collects the handles this iterator would visit, in order.
    fn into_order(mut self) -> Vec<Handle> {
        let mut order = Vec::with_capacity(self.len);
        while let Some(handle) = self.stack.pop() {
            order.push(handle);
            self.descend(self.nodes[handle][Side::Right]);
        }
        order
    }
}

/// An owned in-order iterator over the entries of a [`RedBlackTree`].
pub struct IntoIter<K, V> {
    pub(crate) nodes: Arena<Node<K, V>>,
    pub(crate) order: VecIntoIter<Handle>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.order.next().map(|handle| self.nodes.take(handle).into_tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

/// An iterator over the keys of a [`RedBlackTree`], in ascending order.
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

/// An iterator over the values of a [`RedBlackTree`], in ascending key order.
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
