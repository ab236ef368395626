use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::{
    Arena, BlackHeight, BrokenParent, Color, CountMismatch, Handle, InvariantViolation, Iter, Keys,
    Link, Node, RedChild, RedRoot, Side, Unordered, Values,
};
use crate::collections::traits::{Comparator, Natural};
use crate::util::fmt::DebugRaw;

/// The order in which [`RedBlackTree::for_each`] visits nodes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Visits keys in ascending order.
    #[default]
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
}

/// A self-balancing ordered map, using a [`Comparator`] to order its keys.
///
/// Keys are kept unique: two keys are the same key if neither precedes the other, and inserting an
/// existing key replaces its value. The comparator is fixed at construction and used for every
/// operation afterwards.
///
/// It is a logic error for a key to be modified in a way that changes its ordering relative to
/// other keys, or for the comparator not to be a strict weak order. Neither is detected, but
/// [`check`](RedBlackTree::check) will usually notice the damage.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the tree.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(log n)` |
/// | `find` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `min` / `max` | `O(log n)` |
/// | `for_each` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// The height of the tree never exceeds `2 * log2(n + 1)`.
#[derive(Clone)]
pub struct RedBlackTree<K, V, C = Natural> {
    pub(crate) nodes: Arena<Node<K, V>>,
    pub(crate) root: Link,
    pub(crate) len: usize,
    pub(crate) comparator: C,
}

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Creates an empty tree ordered by [`Natural`] ordering.
    pub const fn new() -> RedBlackTree<K, V> {
        RedBlackTree::with_comparator(Natural)
    }
}

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Creates an empty tree ordered by the provided `comparator`.
    pub const fn with_comparator(comparator: C) -> RedBlackTree<K, V, C> {
        RedBlackTree {
            nodes: Arena::new(),
            root: None,
            len: 0,
            comparator,
        }
    }

    /// Returns the number of entries in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the comparator that orders this tree.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes every entry from the tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns the entry with the first key, or None if the tree is empty.
    pub fn min_entry(&self) -> Option<(&K, &V)> {
        self.extreme(self.root, Side::Left).map(|h| self.nodes[h].tuple())
    }

    /// Returns the value associated with the first key, or None if the tree is empty.
    pub fn min(&self) -> Option<&V> {
        self.min_entry().map(|e| e.1)
    }

    /// Returns the entry with the last key, or None if the tree is empty.
    pub fn max_entry(&self) -> Option<(&K, &V)> {
        self.extreme(self.root, Side::Right).map(|h| self.nodes[h].tuple())
    }

    /// Returns the value associated with the last key, or None if the tree is empty.
    pub fn max(&self) -> Option<&V> {
        self.max_entry().map(|e| e.1)
    }

    /// Calls `visit` with every entry of the tree, in the provided `order`.
    ///
    /// [`Order::In`] visits entries in ascending key order, the same order as
    /// [`iter`](RedBlackTree::iter).
    pub fn for_each<F: FnMut(&K, &V)>(&self, order: Order, mut visit: F) {
        self.walk(self.root, order, &mut visit);
    }

    /// Returns an iterator over all entries in ascending key order, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in ascending key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K, V, C: Comparator<K>> RedBlackTree<K, V, C> {
    /// Inserts the provided `key`-`value` pair. If an equivalent key is already present, its value
    /// is replaced and the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = &mut self.nodes[handle];
            if self.comparator.less(&key, &node.key) {
                side = Side::Left;
            } else if self.comparator.less(&node.key, &key) {
                side = Side::Right;
            } else {
                return Some(mem::replace(&mut node.value, value));
            }
            parent = current;
            current = node[side];
        }

        let handle = self.nodes.alloc(Node::leaf(key, value, parent));
        match parent {
            Some(parent) => self.nodes[parent][side] = Some(handle),
            None => self.root = Some(handle),
        }
        self.len += 1;

        self.fix_insert(handle);
        None
    }

    /// Returns true if the tree has compatible ordering, the same length and the same entries in
    /// the same order as `other`. Keys are compared with this tree's comparator.
    pub fn equals<C2>(&self, other: &RedBlackTree<K, V, C2>) -> bool
    where
        V: PartialEq,
    {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|((key_a, value_a), (key_b, value_b))| {
                self.comparator.equivalent(key_a, key_b) && value_a == value_b
            })
    }

    /// Verifies every red-black and search tree property, along with the tree's bookkeeping,
    /// returning the black height of the tree.
    ///
    /// The black height counts the black nodes on any path from the root to an empty subtree. A
    /// tree that has only ever been modified through its public API always passes.
    pub fn check(&self) -> Result<usize, InvariantViolation> {
        if self.is_red(self.root) {
            return Err(RedRoot.into());
        }

        let mut counted = 0;
        let height = self.check_subtree(self.root, None, 0, &mut counted)?;

        if counted != self.len || self.nodes.len() != self.len {
            return Err(CountMismatch {
                counted,
                recorded: self.len,
            }.into());
        }

        let mut previous: Option<&K> = None;
        for (index, key) in self.keys().enumerate() {
            if let Some(previous) = previous
                && !self.comparator.less(previous, key)
            {
                return Err(Unordered { index }.into());
            }
            previous = Some(key);
        }

        Ok(height)
    }
}

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Returns the entry associated with the provided `key`, or None if there is no such entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.find_handle(key).map(|h| self.nodes[h].tuple())
    }

    /// Returns a reference to the value associated with the provided `key`, or None if there is no
    /// such value.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.get_entry(key).map(|e| e.1)
    }

    /// Returns a mutable reference to the value associated with the provided `key`, or None if
    /// there is no such value.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let handle = self.find_handle(key)?;
        Some(&mut self.nodes[handle].value)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.find_handle(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let target = self.find_handle(key)?;

        // A node with two children trades entries with its successor, which has at most one
        // child, and the successor's node is removed instead.
        let removed = match self.nodes[target].children {
            [Some(_), Some(right)] => {
                let successor = self.extreme(Some(right), Side::Left).unwrap_or(right);
                let (target_node, successor_node) = self.nodes.pair_mut(target, successor);
                mem::swap(&mut target_node.key, &mut successor_node.key);
                mem::swap(&mut target_node.value, &mut successor_node.value);
                successor
            },
            _ => target,
        };

        let [left, right] = self.nodes[removed].children;
        let child = left.or(right);
        let parent = self.nodes[removed].parent;

        self.replace_child(parent, removed, child);
        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }

        let node = self.nodes.take(removed);
        self.len -= 1;

        if !node.is_red() {
            self.fix_remove(child, parent);
        }

        Some(node.into_tuple())
    }

    /// Removes the entry associated with `key`, returning the value if it exists. Removing a key
    /// that isn't present leaves the tree unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.remove_entry(key).map(|e| e.1)
    }

    pub(crate) fn find_handle<Q>(&self, key: &Q) -> Link
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let mut current = self.root;

        while let Some(handle) = current {
            let node = &self.nodes[handle];
            if self.comparator.less(key, node.key.borrow()) {
                current = node[Side::Left];
            } else if self.comparator.less(node.key.borrow(), key) {
                current = node[Side::Right];
            } else {
                return current;
            }
        }

        None
    }
}

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Absent nodes count as black.
    pub(crate) fn is_red(&self, link: Link) -> bool {
        link.is_some_and(|h| self.nodes[h].is_red())
    }

    pub(crate) fn set_color(&mut self, link: Link, color: Color) {
        if let Some(handle) = link {
            self.nodes[handle].color = color;
        }
    }

    /// Follows `side` from `link` for as long as possible.
    pub(crate) fn extreme(&self, link: Link, side: Side) -> Link {
        let mut current = link?;
        while let Some(next) = self.nodes[current][side] {
            current = next;
        }
        Some(current)
    }

    /// Returns which child of `parent` the node at `handle` is.
    pub(crate) fn side_of(&self, handle: Handle, parent: Handle) -> Side {
        if self.nodes[parent][Side::Left] == Some(handle) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Points whatever referred to `old` (its parent's child link or the root) at `new`. The
    /// parent link of `new` is left for the caller.
    pub(crate) fn replace_child(&mut self, parent: Link, old: Handle, new: Link) {
        match parent {
            Some(parent) => {
                let side = self.side_of(old, parent);
                self.nodes[parent][side] = new;
            },
            None => self.root = new,
        }
    }

    /// Rotates the subtree rooted at `handle` so that `handle` moves down towards `side`, and its
    /// child on the opposite side takes its place. In-order sequence is preserved.
    ///
    /// Rotating towards [`Side::Left`] is a left rotation.
    pub(crate) fn rotate(&mut self, handle: Handle, side: Side) {
        let Some(pivot) = self.nodes[handle][side.opposite()] else {
            return;
        };
        let middle = self.nodes[pivot][side];
        let parent = self.nodes[handle].parent;

        self.nodes[handle][side.opposite()] = middle;
        if let Some(middle) = middle {
            self.nodes[middle].parent = Some(handle);
        }

        self.replace_child(parent, handle, Some(pivot));
        self.nodes[pivot].parent = parent;

        self.nodes[pivot][side] = Some(handle);
        self.nodes[handle].parent = Some(pivot);
    }

    /// Restores the red-black properties after `handle` has been inserted as a red leaf.
    pub(crate) fn fix_insert(&mut self, mut handle: Handle) {
        while let Some(parent) = self.nodes[handle].parent
            && self.nodes[parent].is_red()
        {
            // A red parent is never the root, so there is always a grandparent.
            let Some(grandparent) = self.nodes[parent].parent else {
                break;
            };
            let side = self.side_of(parent, grandparent);
            let uncle = self.nodes[grandparent][side.opposite()];

            if self.is_red(uncle) {
                self.nodes[parent].color = Color::Black;
                self.set_color(uncle, Color::Black);
                self.nodes[grandparent].color = Color::Red;
                handle = grandparent;
                continue;
            }

            // An inner child is rotated outwards first, which swaps it with its parent.
            let parent = if self.nodes[parent][side.opposite()] == Some(handle) {
                self.rotate(parent, side);
                handle = parent;
                self.nodes[parent].parent.unwrap_or(parent)
            } else {
                parent
            };

            self.nodes[parent].color = Color::Black;
            self.nodes[grandparent].color = Color::Red;
            self.rotate(grandparent, side.opposite());
        }

        self.set_color(self.root, Color::Black);
    }

    /// Restores the red-black properties after a black node was removed from below `parent`.
    /// `handle` is the node that took its place, which may be absent.
    pub(crate) fn fix_remove(&mut self, mut handle: Link, mut parent: Link) {
        while let Some(current_parent) = parent
            && !self.is_red(handle)
        {
            let side = match handle {
                Some(handle) => self.side_of(handle, current_parent),
                // An absent child can still be told apart, its sibling carries black height so
                // it can't be absent too.
                None if self.nodes[current_parent][Side::Left].is_none() => Side::Left,
                None => Side::Right,
            };

            let Some(mut sibling) = self.nodes[current_parent][side.opposite()] else {
                break;
            };

            if self.nodes[sibling].is_red() {
                self.nodes[sibling].color = Color::Black;
                self.nodes[current_parent].color = Color::Red;
                self.rotate(current_parent, side);
                sibling = match self.nodes[current_parent][side.opposite()] {
                    Some(sibling) => sibling,
                    None => break,
                };
            }

            let near = self.nodes[sibling][side];
            let far = self.nodes[sibling][side.opposite()];

            if !self.is_red(near) && !self.is_red(far) {
                self.nodes[sibling].color = Color::Red;
                handle = parent;
                parent = self.nodes[current_parent].parent;
                continue;
            }

            if !self.is_red(far) {
                self.set_color(near, Color::Black);
                self.nodes[sibling].color = Color::Red;
                self.rotate(sibling, side.opposite());
                sibling = match self.nodes[current_parent][side.opposite()] {
                    Some(sibling) => sibling,
                    None => break,
                };
            }

            self.nodes[sibling].color = self.nodes[current_parent].color;
            self.nodes[current_parent].color = Color::Black;
            self.set_color(self.nodes[sibling][side.opposite()], Color::Black);
            self.rotate(current_parent, side);

            handle = self.root;
            parent = None;
        }

        self.set_color(handle, Color::Black);
    }

    fn walk<F: FnMut(&K, &V)>(&self, link: Link, order: Order, visit: &mut F) {
        let Some(handle) = link else {
            return;
        };
        let node = &self.nodes[handle];

        match order {
            Order::In => {
                self.walk(node[Side::Left], order, visit);
                visit(&node.key, &node.value);
                self.walk(node[Side::Right], order, visit);
            },
            Order::Pre => {
                visit(&node.key, &node.value);
                self.walk(node[Side::Left], order, visit);
                self.walk(node[Side::Right], order, visit);
            },
            Order::Post => {
                self.walk(node[Side::Left], order, visit);
                self.walk(node[Side::Right], order, visit);
                visit(&node.key, &node.value);
            },
        }
    }

    /// Returns the black height of the subtree at `link`, counting every node it visits.
    fn check_subtree(
        &self,
        link: Link,
        parent: Link,
        depth: usize,
        counted: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        let Some(handle) = link else {
            return Ok(0);
        };
        let node = &self.nodes[handle];
        *counted += 1;

        if node.parent != parent {
            return Err(BrokenParent { depth }.into());
        }
        if node.is_red() && (self.is_red(node[Side::Left]) || self.is_red(node[Side::Right])) {
            return Err(RedChild { depth }.into());
        }

        let left = self.check_subtree(node[Side::Left], link, depth + 1, counted)?;
        let right = self.check_subtree(node[Side::Right], link, depth + 1, counted)?;
        if left != right {
            return Err(BlackHeight { depth, left, right }.into());
        }

        Ok(left + usize::from(!node.is_red()))
    }

    /// Draws the subtree at `link` sideways, with left children above their parent and right
    /// children below.
    fn draw(&self, link: Link) -> String
    where
        K: Debug,
        V: Debug,
    {
        match link {
            Some(handle) => {
                let node = &self.nodes[handle];
                let color = match node.color {
                    Color::Red => 'R',
                    Color::Black => 'B',
                };
                format!(
                    "{}\n({:?}: {:?}) {color}\n{}",
                    self.draw(node[Side::Left])
                        .lines()
                        .map(|l| String::from("┌    ") + l)
                        .collect::<Vec<_>>()
                        .join("\n"),
                    node.key,
                    node.value,
                    self.draw(node[Side::Right])
                        .lines()
                        .map(|l| String::from("└    ") + l)
                        .collect::<Vec<_>>()
                        .join("\n")
                )
            },
            None => String::from("-"),
        }
    }
}

impl<K, V, C: Default> Default for RedBlackTree<K, V, C> {
    fn default() -> Self {
        RedBlackTree::with_comparator(C::default())
    }
}

impl<K, V: PartialEq, C: Comparator<K>> PartialEq for RedBlackTree<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<K, V: Eq, C: Comparator<K>> Eq for RedBlackTree<K, V, C> {}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for RedBlackTree<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for RedBlackTree<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = RedBlackTree::default();
        tree.extend(iter);
        tree
    }
}

impl<K: Debug, V: Debug, C> Debug for RedBlackTree<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedBlackTree")
            .field("nodes", &DebugRaw(format!("\n{}\n", self.draw(self.root))))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Debug, V: Debug, C> Display for RedBlackTree<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
