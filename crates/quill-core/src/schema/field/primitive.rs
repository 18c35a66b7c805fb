use super::FieldTy;
use crate::stmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPrimitive {
    /// The field's storage shape
    pub ty: stmt::Type,
}

impl From<stmt::Type> for FieldPrimitive {
    fn from(ty: stmt::Type) -> Self {
        Self { ty }
    }
}

impl From<FieldPrimitive> for FieldTy {
    fn from(value: FieldPrimitive) -> Self {
        Self::Primitive(value)
    }
}

impl From<stmt::Type> for FieldTy {
    fn from(ty: stmt::Type) -> Self {
        Self::Primitive(FieldPrimitive { ty })
    }
}
