use crate::stmt::Value;

/// A record instance whose fields can be read by position.
///
/// Positions are the `field_index` of each [`Field`](crate::schema::Field),
/// fixed when the model is registered, so reading a value never needs to
/// inspect the type again.
pub trait Record {
    /// Fully-qualified type name, matching the name the model was registered
    /// under.
    fn model_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Value of the field at `index`. Positions without a stored value, such
    /// as relations the record does not hold, return [`Value::Null`].
    fn field_value(&self, index: usize) -> Value;
}

impl<T: Record + ?Sized> Record for &T {
    fn model_name(&self) -> &'static str {
        (**self).model_name()
    }

    fn field_value(&self, index: usize) -> Value {
        (**self).field_value(index)
    }
}
