//! Map types and the key capabilities they're built on.
//!
//! # Purpose
//! [`red_black`] holds the balanced tree that everything ordered is built on, [`map`] is a
//! key-value facade over it and [`hash`] is an independent chaining hash table. The capabilities
//! they're parameterised over live in [`traits`].

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "map")]
pub mod map;
#[cfg(feature = "red-black")]
pub mod red_black;
#[cfg(feature = "traits")]
pub mod traits;
