use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// The root of the tree is red.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedRoot;

impl Display for RedRoot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Root of the tree is red!")
    }
}

impl Error for RedRoot {}

/// A red node at `depth` has a red child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedChild {
    pub depth: usize,
}

impl Display for RedChild {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Red node at depth {} has a red child!", self.depth)
    }
}

impl Error for RedChild {}

/// The two subtrees of a node at `depth` have different black heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackHeight {
    pub depth: usize,
    pub left: usize,
    pub right: usize,
}

impl Display for BlackHeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Subtrees of node at depth {} have black heights {} and {}!",
            self.depth, self.left, self.right
        )
    }
}

impl Error for BlackHeight {}

/// The key at in-order position `index` doesn't strictly follow the previous key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unordered {
    pub index: usize,
}

impl Display for Unordered {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key at in-order position {} doesn't follow its predecessor!", self.index)
    }
}

impl Error for Unordered {}

/// A node at `depth` doesn't link back to its actual parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokenParent {
    pub depth: usize,
}

impl Display for BrokenParent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Node at depth {} has an incorrect parent link!", self.depth)
    }
}

impl Error for BrokenParent {}

/// The number of reachable nodes differs from the length the tree has recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMismatch {
    pub counted: usize,
    pub recorded: usize,
}

impl Display for CountMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found {} reachable nodes in a tree that records {}!",
            self.counted, self.recorded
        )
    }
}

impl Error for CountMismatch {}

/// A broken red-black or search tree property, as found by
/// [`RedBlackTree::check`](super::RedBlackTree::check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum InvariantViolation {
    RedRoot(RedRoot),
    RedChild(RedChild),
    BlackHeight(BlackHeight),
    Unordered(Unordered),
    BrokenParent(BrokenParent),
    CountMismatch(CountMismatch),
}
