use super::Error;

/// Error when a query argument cannot be reduced to a bindable value.
///
/// The typical case is a record passed as an argument before it has been
/// persisted: it has no primary key to stand in for it, and binding a null or
/// zero key instead would silently change the meaning of the statement.
#[derive(Debug)]
pub(super) struct InvalidArgument {
    message: Box<str>,
}

impl std::error::Error for InvalidArgument {}

impl core::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid argument: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidArgument(InvalidArgument {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or its cause, is an invalid argument
    /// error.
    pub fn is_invalid_argument(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidArgument(_)))
    }
}
