//! This crate is a collection of ordered and hashed maps written from first principles, centred on
//! a red-black tree.
//!
//! # Purpose
//! The structures here don't wrap the standard library's containers. Each one owns its storage and
//! implements its own balancing or collision handling, so that the algorithms themselves are what
//! get exercised.
//!
//! # Key Semantics
//! Every structure is parameterised over the capability it uses to reason about keys, fixed for the
//! lifetime of the structure:
//! - [`RedBlackTree`](collections::red_black::RedBlackTree) and
//!   [`OrderedMap`](collections::map::OrderedMap) use a
//!   [`Comparator`](collections::traits::Comparator), a strict "precedes" predicate. Two keys are
//!   the same key when neither precedes the other. [`Natural`](collections::traits::Natural)
//!   ordering is only available for [`Ord`] keys, anything else has to provide a comparator.
//! - [`HashTable`](collections::hash::HashTable) uses a
//!   [`KeyPolicy`](collections::traits::KeyPolicy), which by default defers to the key's
//!   [`TableKey`](collections::traits::TableKey) implementation.
//!
//! The [`value`] module provides [`Value`](value::Value), a dynamic key type with structural
//! equality, for tables whose keys don't share a single Rust type.
//!
//! # Error Handling
//! Missing keys are never errors, lookups return [`Option`]s and removals report whether anything
//! was removed. The only typed errors are the
//! [`InvariantViolation`](collections::red_black::InvariantViolation)s reported by
//! [`RedBlackTree::check`](collections::red_black::RedBlackTree::check). These are enums of small
//! structs implementing [`Error`](std::error::Error), for static rather than dynamic dispatch.
//!
//! # Concurrency
//! None of the types here synchronise internally. Share them across threads behind a lock if you
//! need to.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "value")]
pub mod value;

pub(crate) mod util;
