use super::{Field, FieldId, Name, PrimaryKey};
use indexmap::IndexMap;
use std::fmt;

/// Descriptor for one record type and the table it maps to.
#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Fully-qualified type name. This is the registry key.
    pub full_name: String,

    /// Short type name
    pub name: Name,

    /// Storage table name
    pub table_name: String,

    /// Fields in declaration order
    pub fields: Vec<Field>,

    /// The model's primary key
    pub primary_key: PrimaryKey,

    /// Field position by declared name
    by_name: IndexMap<String, usize>,

    /// Field position by column name, for column-bearing fields only
    by_column: IndexMap<String, usize>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl Model {
    /// Creates an unregistered model. The id, primary key and lookup indexes
    /// are filled in by [`Builder::register`](super::Builder::register).
    pub fn new(
        full_name: impl Into<String>,
        name: &str,
        table_name: impl Into<String>,
        fields: Vec<Field>,
    ) -> Self {
        Self {
            id: ModelId::placeholder(),
            full_name: full_name.into(),
            name: Name::new(name),
            table_name: table_name.into(),
            fields,
            primary_key: PrimaryKey::placeholder(),
            by_name: IndexMap::new(),
            by_column: IndexMap::new(),
        }
    }

    #[track_caller]
    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.by_name.get(name).map(|index| &self.fields[*index])
    }

    pub fn field_by_column(&self, column: &str) -> Option<&Field> {
        self.by_column.get(column).map(|index| &self.fields[*index])
    }

    /// The primary key field.
    pub fn primary_key_field(&self) -> &Field {
        &self.fields[self.primary_key.field.index]
    }

    /// Fields stored as columns of the model's table, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &Field> + '_ {
        self.by_column.values().map(|index| &self.fields[*index])
    }

    /// Relation fields, in declaration order.
    pub fn relations(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_relation())
    }

    /// Assigns ids and builds the lookup indexes. Callers validate the field
    /// list first; this only records it.
    pub(crate) fn index(&mut self, id: ModelId, primary_key: usize) {
        self.id = id;
        self.primary_key = PrimaryKey {
            field: id.field(primary_key),
        };

        self.by_name.clear();
        self.by_column.clear();

        for (index, field) in self.fields.iter_mut().enumerate() {
            field.id = id.field(index);
            self.by_name.insert(field.name.app_name.clone(), index);

            if field.has_column() {
                self.by_column.insert(field.column().to_string(), index);
            }
        }
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }

    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
