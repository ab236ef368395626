//! A module containing [`HashTable`] and associated types.
//!
//! Other than the table itself, the included types provide owned and borrowed iteration over
//! entries, keys or values. There is no mutable iterator over keys, because mutating a key in place
//! could change its hash.
//!
//! The capabilities a table hashes and compares its keys with are in
//! [`traits`](crate::collections::traits).

mod hash_table;
mod iter;
mod tests;

pub use hash_table::*;
pub use iter::*;
