/// Storage shape of a primitive column.
///
/// Every primitive field has exactly one shape. Relations are described by
/// [`FieldTy`](crate::schema::FieldTy) instead, so a field can never be both
/// a scalar column and a multi-valued relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    F32,

    F64,

    /// Fixed-point number stored from a float field.
    Decimal { digits: u32, decimals: u32 },

    /// Bounded string (`VARCHAR(size)`).
    Char(u32),

    /// Unbounded string.
    Text,

    /// Calendar date with no time-of-day component.
    Date,

    /// Full timestamp.
    DateTime,

    /// Opaque byte sequence.
    Bytes,
}

impl Type {
    /// Default size of a string column without an explicit `size(..)`.
    pub const DEFAULT_CHAR_SIZE: u32 = 255;

    pub fn is_integer(&self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64)
    }

    /// `Char` and `Text`.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Char(_) | Self::Text)
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date)
    }

    /// `Date` and `DateTime`.
    pub fn is_time(&self) -> bool {
        matches!(self, Self::Date | Self::DateTime)
    }

    /// Whether values of this shape can identify a record.
    pub fn is_key(&self) -> bool {
        self.is_integer() || self.is_string()
    }
}
