use super::*;

#[derive(Debug, Clone)]
pub struct HasMany {
    /// Associated model
    pub target: ModelId,

    /// Fully-qualified name of the target
    pub target_name: String,

    /// The `BelongsTo` or `ManyToMany` association on the target that pairs
    /// with this
    pub pair: FieldId,
}

impl HasMany {
    pub fn new(target_name: impl Into<String>) -> Self {
        Self {
            target: ModelId::placeholder(),
            target_name: target_name.into(),
            pair: FieldId::placeholder(),
        }
    }

    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Model {
        schema.model(self.target)
    }
}

impl From<HasMany> for FieldTy {
    fn from(value: HasMany) -> Self {
        Self::HasMany(value)
    }
}
