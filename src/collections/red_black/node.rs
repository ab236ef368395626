use std::ops::{Index, IndexMut};

use super::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child of a node, or which way a rotation moves the rotated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

pub(crate) type Link = Option<Handle>;

#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub color: Color,
    /// Never owning, only used to walk back up the tree.
    pub parent: Link,
    pub children: [Link; 2],
}

impl<K, V> Node<K, V> {
    /// Creates a red leaf, which is how every node enters the tree.
    pub const fn leaf(key: K, value: V, parent: Link) -> Node<K, V> {
        Node {
            key,
            value,
            color: Color::Red,
            parent,
            children: [None, None],
        }
    }

    pub const fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> Index<Side> for Node<K, V> {
    type Output = Link;

    fn index(&self, side: Side) -> &Self::Output {
        match side {
            Side::Left => &self.children[0],
            Side::Right => &self.children[1],
        }
    }
}

impl<K, V> IndexMut<Side> for Node<K, V> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        match side {
            Side::Left => &mut self.children[0],
            Side::Right => &mut self.children[1],
        }
    }
}
