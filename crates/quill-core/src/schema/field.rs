mod primitive;
pub use primitive::FieldPrimitive;

use super::{
    AutoStrategy, BelongsTo, HasMany, HasOne, ManyToMany, ModelId, RelationKind, Schema,
};
use crate::stmt;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the containing model.
    pub id: FieldId,

    /// The field name
    pub name: FieldName,

    /// Position of the field's value in the record, used with
    /// [`Record::field_value`](crate::Record::field_value). Skipped fields
    /// still occupy a position, so this can differ from `id.index`.
    pub field_index: usize,

    /// Primitive or relation
    pub ty: FieldTy,

    /// True if the column accepts NULL.
    pub nullable: bool,

    /// True if the field is the primary key
    pub primary_key: bool,

    /// True if the column carries a unique constraint
    pub unique: bool,

    /// True if the column is indexed
    pub index: bool,

    /// Default value, as written in the field's tag
    pub default: Option<String>,

    /// Specified if and how the field is populated automatically
    pub auto: Option<AutoStrategy>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct FieldName {
    pub app_name: String,
    pub storage_name: Option<String>,
}

impl FieldName {
    pub fn storage_name(&self) -> &str {
        self.storage_name.as_ref().unwrap_or(&self.app_name)
    }
}

#[derive(Clone)]
pub enum FieldTy {
    Primitive(FieldPrimitive),
    BelongsTo(BelongsTo),
    HasOne(HasOne),
    HasMany(HasMany),
    ManyToMany(ManyToMany),
}

impl Field {
    /// Creates a non-key, non-null field. The `id` is assigned when the owning
    /// model is registered.
    pub fn new(app_name: impl Into<String>, field_index: usize, ty: impl Into<FieldTy>) -> Self {
        Self {
            id: FieldId::placeholder(),
            name: FieldName {
                app_name: app_name.into(),
                storage_name: None,
            },
            field_index,
            ty: ty.into(),
            nullable: false,
            primary_key: false,
            unique: false,
            index: false,
            default: None,
            auto: None,
        }
    }

    /// Gets the id.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Gets the name.
    pub fn name(&self) -> &FieldName {
        &self.name
    }

    /// Storage column name.
    pub fn column(&self) -> &str {
        self.name.storage_name()
    }

    /// Gets the type.
    pub fn ty(&self) -> &FieldTy {
        &self.ty
    }

    /// Gets whether the field is nullable.
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Gets the primary key.
    pub fn primary_key(&self) -> bool {
        self.primary_key
    }

    /// Gets the [`AutoStrategy`].
    pub fn auto(&self) -> Option<&AutoStrategy> {
        self.auto.as_ref()
    }

    pub fn is_auto_increment(&self) -> bool {
        self.auto().map(|auto| auto.is_increment()).unwrap_or(false)
    }

    pub fn is_relation(&self) -> bool {
        self.ty.is_relation()
    }

    /// True if the field is stored as a column of the owning table.
    pub fn has_column(&self) -> bool {
        matches!(self.ty, FieldTy::Primitive(_) | FieldTy::BelongsTo(_))
    }

    /// The shape of the stored column. For `BelongsTo` this is the target's
    /// key shape, known once the schema is built.
    pub fn storage_ty(&self) -> Option<stmt::Type> {
        match &self.ty {
            FieldTy::Primitive(primitive) => Some(primitive.ty),
            FieldTy::BelongsTo(belongs_to) => belongs_to.key_ty,
            _ => None,
        }
    }

    /// True if values for this field are formatted as dates only.
    pub fn is_date(&self) -> bool {
        self.storage_ty().is_some_and(|ty| ty.is_date())
    }

    pub fn relation_kind(&self) -> Option<RelationKind> {
        self.ty.relation_kind()
    }

    /// Returns a fully qualified name for the field.
    pub fn full_name(&self, schema: &Schema) -> String {
        let model = schema.model(self.id.model);
        format!("{}::{}", model.name.upper_camel_case(), self.name.app_name)
    }

    /// If the field is a relation, the fully-qualified name of its target.
    pub fn relation_target_name(&self) -> Option<&str> {
        match &self.ty {
            FieldTy::Primitive(_) => None,
            FieldTy::BelongsTo(rel) => Some(&rel.target_name),
            FieldTy::HasOne(rel) => Some(&rel.target_name),
            FieldTy::HasMany(rel) => Some(&rel.target_name),
            FieldTy::ManyToMany(rel) => Some(&rel.target_name),
        }
    }

    /// If the field is a relation, return the relation's target ModelId.
    pub fn relation_target_id(&self) -> Option<ModelId> {
        match &self.ty {
            FieldTy::Primitive(_) => None,
            FieldTy::BelongsTo(rel) => Some(rel.target),
            FieldTy::HasOne(rel) => Some(rel.target),
            FieldTy::HasMany(rel) => Some(rel.target),
            FieldTy::ManyToMany(rel) => Some(rel.target),
        }
    }

    /// The field on the target model that describes the same relation from
    /// the other side.
    pub fn pair(&self) -> Option<FieldId> {
        match &self.ty {
            FieldTy::Primitive(_) => None,
            FieldTy::BelongsTo(rel) => rel.pair,
            FieldTy::HasOne(rel) => Some(rel.pair),
            FieldTy::HasMany(rel) => Some(rel.pair),
            FieldTy::ManyToMany(rel) => rel.pair,
        }
    }
}

impl FieldTy {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(..))
    }

    pub fn as_primitive(&self) -> Option<&FieldPrimitive> {
        match self {
            Self::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    pub fn is_relation(&self) -> bool {
        !self.is_primitive()
    }

    pub fn relation_kind(&self) -> Option<RelationKind> {
        match self {
            Self::Primitive(_) => None,
            Self::BelongsTo(rel) if rel.unique => Some(RelationKind::OneToOne),
            Self::BelongsTo(_) => Some(RelationKind::ForeignKey),
            Self::HasOne(_) => Some(RelationKind::ReverseOne),
            Self::HasMany(_) => Some(RelationKind::ReverseMany),
            Self::ManyToMany(_) => Some(RelationKind::ManyToMany),
        }
    }

    pub fn is_belongs_to(&self) -> bool {
        matches!(self, Self::BelongsTo(..))
    }

    pub fn as_belongs_to(&self) -> Option<&BelongsTo> {
        match self {
            Self::BelongsTo(belongs_to) => Some(belongs_to),
            _ => None,
        }
    }

    pub fn as_has_one(&self) -> Option<&HasOne> {
        match self {
            Self::HasOne(has_one) => Some(has_one),
            _ => None,
        }
    }

    pub fn as_has_many(&self) -> Option<&HasMany> {
        match self {
            Self::HasMany(has_many) => Some(has_many),
            _ => None,
        }
    }

    pub fn as_many_to_many(&self) -> Option<&ManyToMany> {
        match self {
            Self::ManyToMany(many_to_many) => Some(many_to_many),
            _ => None,
        }
    }

    pub(crate) fn set_target(&mut self, target: ModelId) {
        match self {
            Self::Primitive(_) => {}
            Self::BelongsTo(rel) => rel.target = target,
            Self::HasOne(rel) => rel.target = target,
            Self::HasMany(rel) => rel.target = target,
            Self::ManyToMany(rel) => rel.target = target,
        }
    }
}

impl fmt::Debug for FieldTy {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(ty) => ty.fmt(fmt),
            Self::BelongsTo(ty) => ty.fmt(fmt),
            Self::HasOne(ty) => ty.fmt(fmt),
            Self::HasMany(ty) => ty.fmt(fmt),
            Self::ManyToMany(ty) => ty.fmt(fmt),
        }
    }
}

impl FieldId {
    pub(crate) fn placeholder() -> Self {
        Self {
            model: ModelId::placeholder(),
            index: usize::MAX,
        }
    }
}

impl From<&Self> for FieldId {
    fn from(val: &Self) -> Self {
        *val
    }
}

impl From<&Field> for FieldId {
    fn from(val: &Field) -> Self {
        val.id
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}
