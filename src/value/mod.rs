//! A module containing [`Value`], a dynamically typed key with structural equality.
//!
//! A [`HashTable`](crate::collections::hash::HashTable) keyed by [`Value`] can mix numbers, text,
//! dates, patterns, lists and records, and finds keys by content rather than by identity:
//! ```
//! # use ordered_collections::collections::hash::HashTable;
//! # use ordered_collections::value::Value;
//! let mut table = HashTable::new();
//! table.insert(Value::list([1.into(), "two".into()]), "mixed");
//! table.insert(Value::Number(f64::NAN), "not a number");
//!
//! assert_eq!(table.get(&Value::list([1.into(), "two".into()])), Some(&"mixed"));
//! assert_eq!(table.get(&Value::Number(f64::NAN)), Some(&"not a number"));
//! ```

mod value;

pub use value::*;
