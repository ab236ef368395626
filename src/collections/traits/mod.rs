//! Capabilities that decide how a collection compares, orders and hashes its keys.
//!
//! Ordered collections take a [`Comparator`], hashed collections take a [`KeyPolicy`]. Both are
//! supplied once at construction and consulted for every operation afterwards.

mod comparator;
mod key_policy;
mod table_key;

pub use comparator::*;
pub use key_policy::*;
pub use table_key::*;
