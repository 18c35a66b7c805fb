use super::Record;
use crate::schema::Model;
use crate::stmt::Value;
use crate::{Error, Result};

/// Primary key of a record instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity<'a> {
    /// Primary key column
    pub column: &'a str,

    /// Key value as read from the record
    pub value: Value,

    /// True if the key holds an assigned value: a positive integer or a
    /// non-empty string. Records without one have not been persisted yet.
    pub exists: bool,
}

/// Reads the primary key off `record`.
///
/// Fails if the value the record reports does not match the key's declared
/// shape.
pub fn resolve_identity<'a>(model: &'a Model, record: &dyn Record) -> Result<Identity<'a>> {
    let field = model.primary_key_field();
    let value = record.field_value(field.field_index);

    let exists = match (&value, field.storage_ty()) {
        (Value::I64(v), Some(ty)) if ty.is_integer() => *v > 0,
        (Value::U64(v), Some(ty)) if ty.is_integer() => *v > 0,
        (Value::String(v), Some(ty)) if ty.is_string() => !v.is_empty(),
        (Value::Null, _) => false,
        (value, ty) => {
            return Err(Error::invalid_argument(format!(
                "primary key `{}` of `{}` is declared as {:?} but the record holds {}",
                field.name.app_name,
                model.full_name,
                ty,
                value.kind_name(),
            )));
        }
    };

    Ok(Identity {
        column: field.column(),
        value,
        exists,
    })
}

impl Model {
    /// Reads the primary key off `record`. See [`resolve_identity`].
    pub fn identity_of(&self, record: &dyn Record) -> Result<Identity<'_>> {
        resolve_identity(self, record)
    }
}
