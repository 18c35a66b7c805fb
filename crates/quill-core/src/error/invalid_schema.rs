use super::Error;

/// Error when a model definition cannot be registered.
///
/// This occurs when:
/// - A model has no primary key, or more than one
/// - The primary key has a shape that cannot identify a record
/// - A relation references a type that is not a model, or a model that was
///   never registered
/// - Two models claim the same table, or two fields the same column
/// - A field tag contains an unknown or malformed directive
///
/// These errors are raised while the registry is being built, before any
/// query runs.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or its cause, is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidSchema(_)))
    }
}
