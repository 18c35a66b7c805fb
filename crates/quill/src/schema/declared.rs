use crate::Model;
use std::any::type_name;

/// The Rust type a field is declared with.
///
/// Together with the field's tag this decides the storage shape. Model
/// references carry the target's fully-qualified type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredTy {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Bytes,

    /// A timestamp. Stored as a datetime unless tagged `type(date)`.
    Time,

    /// A reference to one record of another model.
    Model(String),

    /// A collection of records of another model.
    ModelList(String),

    /// Anything else. Registering a field of this type fails.
    Other(&'static str),
}

impl DeclaredTy {
    pub fn model<T: Model>() -> Self {
        Self::Model(type_name::<T>().to_string())
    }

    pub fn model_list<T: Model>() -> Self {
        Self::ModelList(type_name::<T>().to_string())
    }

    pub fn other<T: ?Sized>() -> Self {
        Self::Other(type_name::<T>())
    }

    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(_) | Self::ModelList(_))
    }
}
