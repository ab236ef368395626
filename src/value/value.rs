use std::fmt::{self, Display, Formatter};

use derive_more::IsVariant;

use crate::collections::traits::{Djb2a, TableKey, fold_hashes, hash_number};

/// A dynamically typed value, usable as a [`TableKey`].
///
/// Equality is structural:
/// - `NaN` is equal to `NaN`, and `0.0` is equal to `-0.0`.
/// - Two invalid [`Date`]s are equal, valid dates are equal when their timestamps are.
/// - [`Pattern`]s are equal when they render the same, `/source/flags`.
/// - Lists are compared element by element.
/// - Records are compared field by field, regardless of the order of their fields. Records built
///   directly with a repeated name compare those fields in the order they were written.
///
/// Values of different variants are never equal, `Number(1.0)` isn't `Text("1")`.
#[derive(Debug, Clone, IsVariant)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(Date),
    Pattern(Pattern),
    List(Vec<Value>),
    Record(Vec<(String, Value)>),
}

impl Value {
    /// Creates a [`Value::List`] from the provided `items`.
    pub fn list<I: IntoIterator<Item = Value>>(items: I) -> Value {
        Value::List(items.into_iter().collect())
    }

    /// Creates a [`Value::Record`] from the provided `fields`. If a field name repeats, the last
    /// value wins and the field keeps the position of its first occurrence.
    pub fn record<N, I>(fields: I) -> Value
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Value)>,
    {
        let mut record: Vec<(String, Value)> = Vec::new();
        for (name, value) in fields {
            let name = name.into();
            match record.iter_mut().find(|f| f.0 == name) {
                Some(field) => field.1 = value,
                None => record.push((name, value)),
            }
        }
        Value::Record(record)
    }

    /// Returns the field called `name` if this is a record that has one.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields.iter().find(|f| f.0 == name).map(|f| &f.1),
            _ => None,
        }
    }

    /// Returns the fields of a record, sorted by name. Fields sharing a name keep their relative
    /// order.
    fn sorted_fields(fields: &[(String, Value)]) -> Vec<&(String, Value)> {
        let mut sorted = fields.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        sorted
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a.table_eq(b),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Pattern(a), Value::Pattern(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => {
                a.len() == b.len()
                    && Value::sorted_fields(a)
                        .into_iter()
                        .zip(Value::sorted_fields(b))
                        .all(|(a, b)| a.0 == b.0 && a.1 == b.1)
            },
            _ => false,
        }
    }
}

impl Eq for Value {}

impl TableKey for Value {
    fn table_hash(&self) -> u64 {
        match self {
            Value::Number(number) => hash_number(*number),
            Value::Date(date) => match date.millis() {
                Some(millis) => hash_number(millis),
                None => Djb2a::hash_display(date),
            },
            Value::List(items) => fold_hashes(items.iter().map(Value::table_hash)),
            Value::Record(fields) => fold_hashes(
                Value::sorted_fields(fields)
                    .into_iter()
                    .flat_map(|(name, value)| [Djb2a::hash_str(name), value.table_hash()])
            ),
            other => Djb2a::hash_display(other),
        }
    }

    fn table_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Number(value) => write!(f, "{value}"),
            Value::Text(value) => write!(f, "{value}"),
            Value::Date(value) => write!(f, "{value}"),
            Value::Pattern(value) => write!(f, "{value}"),
            Value::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index != 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            },
            Value::Record(fields) => {
                write!(f, "{{")?;
                for (index, (name, value)) in Value::sorted_fields(fields).into_iter().enumerate() {
                    if index != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}

macro_rules! impl_from {
    ($($source:ty => |$value:ident| $convert:expr),* $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from($value: $source) -> Self {
                    $convert
                }
            }
        )*
    };
}

impl_from! {
    () => |_value| Value::Null,
    bool => |value| Value::Bool(value),
    f64 => |value| Value::Number(value),
    i32 => |value| Value::Number(value as f64),
    u32 => |value| Value::Number(value as f64),
    &str => |value| Value::Text(String::from(value)),
    String => |value| Value::Text(value),
    Date => |value| Value::Date(value),
    Pattern => |value| Value::Pattern(value),
    Vec<Value> => |value| Value::List(value),
}

/// A point in time as milliseconds since the Unix epoch, which may be invalid.
///
/// All invalid dates are equal to each other and render as `Invalid Date`.
#[derive(Debug, Clone, Copy)]
pub struct Date {
    millis: f64,
}

impl Date {
    /// Creates a date `millis` milliseconds after the epoch. A non-finite `millis` creates an
    /// invalid date.
    pub const fn from_millis(millis: f64) -> Date {
        Date {
            millis,
        }
    }

    pub const fn invalid() -> Date {
        Date::from_millis(f64::NAN)
    }

    pub const fn is_valid(&self) -> bool {
        self.millis.is_finite()
    }

    /// Returns the timestamp of a valid date.
    pub const fn millis(&self) -> Option<f64> {
        if self.is_valid() { Some(self.millis) } else { None }
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.millis() == other.millis()
    }
}

impl Eq for Date {}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.millis() {
            Some(millis) => write!(f, "Date({millis})"),
            None => write!(f, "Invalid Date"),
        }
    }
}

/// A regular expression, kept only as its source and flags. Nothing here evaluates it.
///
/// Flags are stored sorted and without repeats, so patterns that only differ in how their flags
/// were written are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    flags: String,
}

impl Pattern {
    pub fn new(source: impl Into<String>, flags: &str) -> Pattern {
        let mut flags = flags.chars().collect::<Vec<_>>();
        flags.sort_unstable();
        flags.dedup();

        Pattern {
            source: source.into(),
            flags: flags.into_iter().collect(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}
