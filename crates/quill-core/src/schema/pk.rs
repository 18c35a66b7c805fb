use super::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryKey {
    /// The single field identifying a record
    pub field: FieldId,
}

impl PrimaryKey {
    pub(crate) fn placeholder() -> Self {
        Self {
            field: FieldId::placeholder(),
        }
    }
}
