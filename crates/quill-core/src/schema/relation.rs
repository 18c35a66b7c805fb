mod belongs_to;
pub use belongs_to::{BelongsTo, OnDelete};

mod has_many;
pub use has_many::HasMany;

mod has_one;
pub use has_one::HasOne;

mod many_to_many;
pub use many_to_many::ManyToMany;

use super::{FieldId, FieldTy, Model, ModelId, Schema};
use crate::stmt;

/// Relation classification of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// `rel(fk)`: this table stores the target's key.
    ForeignKey,

    /// `rel(one)`: like `ForeignKey`, but unique.
    OneToOne,

    /// `rel(m2m)`: linked through a separate table.
    ManyToMany,

    /// `reverse(one)`: the target stores this model's key, uniquely.
    ReverseOne,

    /// `reverse(many)`: the target stores this model's key, or links to it
    /// through a many-to-many table.
    ReverseMany,
}

impl RelationKind {
    /// True if relations of this kind store a column on the owning table.
    pub fn has_column(self) -> bool {
        matches!(self, Self::ForeignKey | Self::OneToOne)
    }

    /// True if the field refers to a collection of target records.
    pub fn is_many(self) -> bool {
        matches!(self, Self::ManyToMany | Self::ReverseMany)
    }
}
