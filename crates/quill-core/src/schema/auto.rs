/// How the value of a field is populated without the caller setting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoStrategy {
    /// Database-generated, monotonically increasing key.
    Increment,

    /// Set to the current time on every save.
    Now,

    /// Set to the current time when the record is first inserted.
    NowAdd,
}

impl AutoStrategy {
    /// Returns `true` if the auto is [`Increment`].
    ///
    /// [`Increment`]: AutoStrategy::Increment
    #[must_use]
    pub fn is_increment(&self) -> bool {
        matches!(self, Self::Increment)
    }

    /// Returns `true` for the two timestamp strategies.
    #[must_use]
    pub fn is_timestamp(&self) -> bool {
        matches!(self, Self::Now | Self::NowAdd)
    }
}
