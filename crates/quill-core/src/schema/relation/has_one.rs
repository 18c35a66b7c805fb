use super::*;

#[derive(Debug, Clone)]
pub struct HasOne {
    /// Associated model
    pub target: ModelId,

    /// Fully-qualified name of the target
    pub target_name: String,

    /// The unique `BelongsTo` association on the target that pairs with this
    pub pair: FieldId,
}

impl HasOne {
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

    pub fn pair<'a>(&self, schema: &'a Schema) -> Option<&'a BelongsTo> {
        schema.field(self.pair).ty.as_belongs_to()
    }
}

impl From<HasOne> for FieldTy {
    fn from(value: HasOne) -> Self {
        Self::HasOne(value)
    }
}
