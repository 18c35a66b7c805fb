//! Model registry.
//!
//! Registration happens on a [`Builder`], which is owned by a single caller
//! during bootstrap. [`Builder::build`] links relations across models and
//! returns a [`Schema`], which has no mutating API and can be shared freely
//! between threads.

mod auto;
pub use auto::AutoStrategy;

mod builder;
pub use builder::Builder;

mod field;
pub use field::{Field, FieldId, FieldName, FieldPrimitive, FieldTy};

mod model;
pub use model::{Model, ModelId};

mod name;
pub use name::Name;

mod pk;
pub use pk::PrimaryKey;

mod relation;
pub use relation::{BelongsTo, HasMany, HasOne, ManyToMany, OnDelete, RelationKind};

mod tz;
pub use tz::TimeZones;

use indexmap::IndexMap;

/// Read-only view of every registered model.
#[derive(Debug)]
pub struct Schema {
    /// Models keyed by fully-qualified type name, in registration order.
    /// `ModelId` is the position in this map.
    pub(crate) models: IndexMap<String, Model>,

    /// Timezones used when binding date and time values.
    pub(crate) tz: TimeZones,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Get a model by ID
    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        let id = id.into();
        self.models
            .get_index(id.0)
            .map(|(_, model)| model)
            .expect("invalid model ID")
    }

    /// Look up a model by fully-qualified type name.
    pub fn model_by_name(&self, full_name: &str) -> Option<&Model> {
        self.models.get(full_name)
    }

    pub fn model_by_table(&self, table_name: &str) -> Option<&Model> {
        self.models
            .values()
            .find(|model| model.table_name == table_name)
    }

    /// Get a field by ID
    #[track_caller]
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model).field(id)
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> {
        self.models.values()
    }

    pub fn timezones(&self) -> &TimeZones {
        &self.tz
    }
}
