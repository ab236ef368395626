//! A module containing [`RedBlackTree`] and associated types.
//!
//! Nodes are stored in an arena and linked by handle, including the parent link used while
//! rebalancing. The tree is the only owner of its nodes and never hands them out, callers only
//! ever see references to keys and values.
//!
//! [`InvariantViolation`] and its variants are returned by [`RedBlackTree::check`].

mod arena;
mod error;
mod iter;
mod node;
mod tests;
mod tree;

pub(crate) use arena::*;
pub use error::*;
pub use iter::*;
pub(crate) use node::*;
pub use tree::*;
