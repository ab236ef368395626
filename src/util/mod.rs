pub mod fmt;
#[cfg(test)]
pub mod alloc;
#[cfg(all(test, feature = "hash"))]
pub mod hash;
