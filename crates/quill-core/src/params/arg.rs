use super::Record;
use crate::stmt::Value;

use chrono::{DateTime, FixedOffset, Utc};
use std::fmt;

/// A query argument, before flattening.
///
/// Variants are listed in the order the flattener classifies them.
pub enum Arg<'a> {
    /// Bound as NULL.
    Null,

    /// Bound as a single blob; never iterated.
    Bytes(Vec<u8>),

    /// Formatted as a date or datetime string.
    DateTime(DateTime<FixedOffset>),

    /// Expanded in place, element by element.
    List(Vec<Arg<'a>>),

    /// Replaced by the record's primary key.
    Record(&'a dyn Record),

    /// A reference or wrapper around a non-record value; unwrapped.
    Indirect(Box<Arg<'a>>),

    /// Bound unchanged.
    Scalar(Value),
}

impl<'a> Arg<'a> {
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg<'a>>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn record<T: Record>(record: &'a T) -> Self {
        Self::Record(record)
    }

    pub fn indirect(inner: impl Into<Arg<'a>>) -> Self {
        Self::Indirect(Box::new(inner.into()))
    }

    /// True for arguments that hold nothing to bind, including wrappers
    /// around such an argument.
    pub fn is_null(&self) -> bool {
        match self {
            Self::Null | Self::Scalar(Value::Null) => true,
            Self::Indirect(inner) => inner.is_null(),
            _ => false,
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => fmt.write_str("Null"),
            Self::Bytes(bytes) => fmt.debug_tuple("Bytes").field(bytes).finish(),
            Self::DateTime(ts) => fmt.debug_tuple("DateTime").field(ts).finish(),
            Self::List(items) => fmt.debug_tuple("List").field(items).finish(),
            Self::Record(record) => fmt.debug_tuple("Record").field(&record.model_name()).finish(),
            Self::Indirect(inner) => fmt.debug_tuple("Indirect").field(inner).finish(),
            Self::Scalar(value) => fmt.debug_tuple("Scalar").field(value).finish(),
        }
    }
}

macro_rules! impl_from_scalar {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Arg<'_> {
                fn from(value: $t) -> Self {
                    Self::Scalar(value.into())
                }
            }
        )+
    };
}

impl_from_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, &str, &String);

impl From<Value> for Arg<'_> {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bytes(bytes) => Self::Bytes(bytes),
            value => Self::Scalar(value),
        }
    }
}

impl From<Vec<u8>> for Arg<'_> {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for Arg<'_> {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<DateTime<FixedOffset>> for Arg<'_> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Utc>> for Arg<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value.fixed_offset())
    }
}

impl<'a> From<&'a dyn Record> for Arg<'a> {
    fn from(value: &'a dyn Record) -> Self {
        Self::Record(value)
    }
}

impl<'a, T: Into<Arg<'a>>> From<Option<T>> for Arg<'a> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
