use super::*;

#[derive(Debug, Clone)]
pub struct BelongsTo {
    /// Model the stored key refers to
    pub target: ModelId,

    /// Fully-qualified name of the target, resolved to `target` when the
    /// schema is built.
    pub target_name: String,

    /// True for one-to-one relations
    pub unique: bool,

    /// What happens to this record when the target is deleted
    pub on_delete: OnDelete,

    /// Shape of the stored key; the target's primary key shape.
    pub key_ty: Option<stmt::Type>,

    /// The `HasMany` or `HasOne` association that pairs with this
    pub pair: Option<FieldId>,
}

/// Referential action when the referenced record is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnDelete {
    #[default]
    Cascade,
    SetNull,
    SetDefault,
    DoNothing,
}

impl BelongsTo {
    pub fn new(target_name: impl Into<String>) -> Self {
        Self {
            target: ModelId::placeholder(),
            target_name: target_name.into(),
            unique: false,
            on_delete: OnDelete::default(),
            key_ty: None,
            pair: None,
        }
    }

    /// A unique `BelongsTo`, i.e. the owning side of a one-to-one relation.
    pub fn one(target_name: impl Into<String>) -> Self {
        Self {
            unique: true,
            ..Self::new(target_name)
        }
    }

    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Model {
        schema.model(self.target)
    }
}

impl From<BelongsTo> for FieldTy {
    fn from(value: BelongsTo) -> Self {
        Self::BelongsTo(value)
    }
}
