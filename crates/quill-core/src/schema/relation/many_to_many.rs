use super::*;

#[derive(Debug, Clone)]
pub struct ManyToMany {
    /// Associated model
    pub target: ModelId,

    /// Fully-qualified name of the target
    pub target_name: String,

    /// Table holding the links. When not given explicitly it is derived from
    /// both table names as the schema is built.
    pub link_table: Option<String>,

    /// The `HasMany` association on the target, if the target declares one
    pub pair: Option<FieldId>,
}

impl ManyToMany {
    pub fn new(target_name: impl Into<String>) -> Self {
        Self {
            target: ModelId::placeholder(),
            target_name: target_name.into(),
            link_table: None,
            pair: None,
        }
    }

    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Model {
        schema.model(self.target)
    }

    /// Name of the link table. Always set on a built schema.
    pub fn link_table(&self) -> &str {
        self.link_table.as_deref().unwrap_or_default()
    }
}

impl From<ManyToMany> for FieldTy {
    fn from(value: ManyToMany) -> Self {
        Self::ManyToMany(value)
    }
}
