use std::fmt::{self, Write};
use std::hash::Hasher;
use std::rc::Rc;

/// The multiplier for Knuth's multiplicative hash, `2^32 / φ`.
pub const KNUTH_MULTIPLIER: u64 = 2_654_435_761;

/// The initial state of [`Djb2a`].
pub const DJB2_SEED: u32 = 5381;

/// The largest integer that an `f64` can represent along with all smaller integers.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Mixes an integer magnitude with Knuth's multiplicative method, keeping the low 32 bits.
pub const fn knuth_mix(magnitude: u64) -> u64 {
    magnitude.wrapping_mul(KNUTH_MULTIPLIER) as u32 as u64
}

/// A [`Hasher`] implementing DJB2a (`h = h * 33 ^ byte`) over 32 bits.
///
/// Also implements [`fmt::Write`] so that a key's textual form can be hashed without allocating a
/// [`String`] for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Djb2a {
    state: u32,
}

impl Djb2a {
    pub const fn new() -> Djb2a {
        Djb2a {
            state: DJB2_SEED,
        }
    }

    /// Hashes the [`Display`](fmt::Display) form of `value`.
    pub fn hash_display<T: fmt::Display + ?Sized>(value: &T) -> u64 {
        let mut hasher = Djb2a::new();
        // Writing into a Djb2a never fails.
        let _ = write!(hasher, "{value}");
        hasher.finish()
    }

    /// Hashes the bytes of `text`.
    pub fn hash_str(text: &str) -> u64 {
        let mut hasher = Djb2a::new();
        hasher.write(text.as_bytes());
        hasher.finish()
    }
}

impl Default for Djb2a {
    fn default() -> Self {
        Djb2a::new()
    }
}

impl Hasher for Djb2a {
    fn finish(&self) -> u64 {
        self.state as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.wrapping_mul(33) ^ *byte as u32;
        }
    }
}

impl Write for Djb2a {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s.as_bytes());
        Ok(())
    }
}

/// The key capability a [`HashTable`](crate::collections::hash::HashTable) uses by default.
///
/// Provided implementations follow a fixed policy:
/// - Integers are hashed with [`knuth_mix`] over their magnitude.
/// - Text, characters and booleans hash their textual form with [`Djb2a`].
/// - Floats which hold a safe integer hash like that integer, the rest hash their textual form.
///   `NaN` is equal to `NaN`.
/// - Sequences and tuples fold the hashes of their elements through [`Djb2a`], separated by
///   commas, and compare element-wise.
/// - References and smart pointers defer to their pointee.
///
/// Types with their own idea of identity implement this trait directly. The value returned by
/// [`table_hash`](TableKey::table_hash) is used as-is, the table reduces it to a bucket itself.
///
/// As with [`Hash`](std::hash::Hash) and [`Eq`], keys that are equal must produce equal hashes.
pub trait TableKey {
    fn table_hash(&self) -> u64;

    fn table_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_table_key_int {
    ($($int:ty),*) => {
        $(
            impl TableKey for $int {
                fn table_hash(&self) -> u64 {
                    knuth_mix(self.unsigned_abs() as u64)
                }

                fn table_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! impl_table_key_uint {
    ($($uint:ty),*) => {
        $(
            impl TableKey for $uint {
                fn table_hash(&self) -> u64 {
                    knuth_mix(*self as u64)
                }

                fn table_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_table_key_int!(i8, i16, i32, i64, isize);
impl_table_key_uint!(u8, u16, u32, u64, usize);

macro_rules! impl_table_key_float {
    ($($float:ty),*) => {
        $(
            impl TableKey for $float {
                fn table_hash(&self) -> u64 {
                    hash_number(*self as f64)
                }

                fn table_eq(&self, other: &Self) -> bool {
                    self == other || (self.is_nan() && other.is_nan())
                }
            }
        )*
    };
}

impl_table_key_float!(f32, f64);

/// Hashes a number with the integer mix if it is a safe integer, otherwise its textual form.
pub(crate) fn hash_number(number: f64) -> u64 {
    if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER {
        knuth_mix(number.abs() as u64)
    } else {
        Djb2a::hash_display(&number)
    }
}

impl TableKey for bool {
    fn table_hash(&self) -> u64 {
        Djb2a::hash_display(self)
    }

    fn table_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl TableKey for char {
    fn table_hash(&self) -> u64 {
        Djb2a::hash_str(self.encode_utf8(&mut [0; 4]))
    }

    fn table_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl TableKey for str {
    fn table_hash(&self) -> u64 {
        Djb2a::hash_str(self)
    }

    fn table_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl TableKey for String {
    fn table_hash(&self) -> u64 {
        self.as_str().table_hash()
    }

    fn table_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl TableKey for () {
    fn table_hash(&self) -> u64 {
        Djb2a::hash_str("null")
    }

    fn table_eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Folds a sequence of element hashes through [`Djb2a`].
pub(crate) fn fold_hashes(hashes: impl IntoIterator<Item = u64>) -> u64 {
    let mut hasher = Djb2a::new();
    for (index, hash) in hashes.into_iter().enumerate() {
        if index != 0 {
            hasher.write_u8(b',');
        }
        hasher.write(&hash.to_le_bytes());
    }
    hasher.finish()
}

impl<T: TableKey> TableKey for [T] {
    fn table_hash(&self) -> u64 {
        fold_hashes(self.iter().map(TableKey::table_hash))
    }

    fn table_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(a, b)| a.table_eq(b))
    }
}

impl<T: TableKey, const N: usize> TableKey for [T; N] {
    fn table_hash(&self) -> u64 {
        self.as_slice().table_hash()
    }

    fn table_eq(&self, other: &Self) -> bool {
        self.as_slice().table_eq(other.as_slice())
    }
}

impl<T: TableKey> TableKey for Vec<T> {
    fn table_hash(&self) -> u64 {
        self.as_slice().table_hash()
    }

    fn table_eq(&self, other: &Self) -> bool {
        self.as_slice().table_eq(other.as_slice())
    }
}

impl<T: TableKey> TableKey for Option<T> {
    fn table_hash(&self) -> u64 {
        match self {
            Some(inner) => inner.table_hash(),
            None => ().table_hash(),
        }
    }

    fn table_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.table_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! impl_table_key_pointer {
    ($($pointer:ident),*) => {
        $(
            impl<T: TableKey + ?Sized> TableKey for $pointer<T> {
                fn table_hash(&self) -> u64 {
                    (**self).table_hash()
                }

                fn table_eq(&self, other: &Self) -> bool {
                    (**self).table_eq(&**other)
                }
            }
        )*
    };
}

impl_table_key_pointer!(Box, Rc);

impl<T: TableKey + ?Sized> TableKey for &T {
    fn table_hash(&self) -> u64 {
        (**self).table_hash()
    }

    fn table_eq(&self, other: &Self) -> bool {
        (**self).table_eq(*other)
    }
}

macro_rules! impl_table_key_tuple {
    ($(($($name:ident $index:tt),+)),*) => {
        $(
            impl<$($name: TableKey),+> TableKey for ($($name,)+) {
                fn table_hash(&self) -> u64 {
                    fold_hashes([$(self.$index.table_hash()),+])
                }

                fn table_eq(&self, other: &Self) -> bool {
                    $(self.$index.table_eq(&other.$index))&&+
                }
            }
        )*
    };
}

impl_table_key_tuple!((A 0, B 1), (A 0, B 1, C 2), (A 0, B 1, C 2, D 3));
