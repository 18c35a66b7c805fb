use crate::schema::ModelDef;
use quill_core::Record;

/// A record type that can be registered.
pub trait Model: Record + 'static {
    /// Describes the model's fields, in the order [`Record::field_value`]
    /// addresses them.
    fn schema() -> ModelDef;
}
