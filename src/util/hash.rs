use crate::collections::traits::TableKey;

/// A key with a hash chosen by the test rather than computed from its value, for forcing
/// collisions.
#[derive(Debug, Clone)]
pub struct FixedHash<T: PartialEq> {
    hash: u64,
    value: T,
}

impl<T: PartialEq> FixedHash<T> {
    pub const fn new(hash: u64, value: T) -> FixedHash<T> {
        FixedHash {
            hash,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: PartialEq> TableKey for FixedHash<T> {
    fn table_hash(&self) -> u64 {
        self.hash
    }

    fn table_eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
