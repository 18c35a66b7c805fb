use crate::Result;
use chrono::{FixedOffset, Offset, Utc};

/// Timezone policy for binding date and time values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeZones {
    /// Timezone datetime values are converted to before formatting, unless a
    /// call supplies its own.
    pub working: FixedOffset,

    /// Fixed timezone date-only values are converted to, so a date column
    /// never shifts with the working timezone.
    pub reference: FixedOffset,
}

impl TimeZones {
    pub fn new(working: FixedOffset, reference: FixedOffset) -> Self {
        Self { working, reference }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix(), Utc.fix())
    }

    /// Parses both timezones from `%z`-style offsets such as `+10:00` or
    /// `-0530`.
    pub fn parse(working: &str, reference: &str) -> Result<Self> {
        Ok(Self::new(working.parse()?, reference.parse()?))
    }
}

impl Default for TimeZones {
    fn default() -> Self {
        Self::utc()
    }
}
