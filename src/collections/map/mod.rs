//! A module containing [`OrderedMap`], a key-value map over a
//! [`RedBlackTree`](super::red_black::RedBlackTree).
//!
//! The map adds no behaviour of its own. Its iterators are the tree's, re-exported here.

mod ordered_map;

pub use ordered_map::*;
#[doc(inline)]
pub use super::red_black::{IntoIter, Iter, Keys, Values};
