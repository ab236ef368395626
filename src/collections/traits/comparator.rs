/// A strict ordering predicate over `K`, answering whether one key precedes another.
///
/// Implementations must describe a strict weak order: irreflexive, transitive and with
/// transitive equivalence. Collections don't detect comparators that break these rules, doing so
/// is a logic error that can leave keys unreachable, although it won't cause undefined behaviour.
///
/// Any `Fn(&K, &K) -> bool` closure is a comparator. Closures need their argument types spelled
/// out, because nothing else drives inference for them:
/// ```
/// # use ordered_collections::collections::red_black::RedBlackTree;
/// let mut tree = RedBlackTree::with_comparator(|a: &i32, b: &i32| b < a);
/// tree.insert(1, "one");
/// tree.insert(2, "two");
/// assert_eq!(tree.min(), Some(&"two"));
/// ```
pub trait Comparator<K: ?Sized> {
    /// Returns true if `a` strictly precedes `b`.
    fn less(&self, a: &K, b: &K) -> bool;

    /// Returns true if neither key precedes the other, which is how collections decide that two
    /// keys are the same key.
    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// The natural ordering of an [`Ord`] type, `a < b`.
///
/// Types without an [`Ord`] implementation need to provide their own [`Comparator`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// Reverses the ordering of the wrapped comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reverse<C>(pub C);

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for Reverse<C> {
    fn less(&self, a: &K, b: &K) -> bool {
        self.0.less(b, a)
    }
}

impl<K: ?Sized, F: Fn(&K, &K) -> bool> Comparator<K> for F {
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}
