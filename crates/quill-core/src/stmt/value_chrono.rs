use super::Value;
use chrono::{DateTime, FixedOffset};

/// Format for values bound to `Date` columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format for every other timestamp.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Value {
    /// Renders a timestamp as a date string in `tz`.
    pub fn date(value: &DateTime<FixedOffset>, tz: &FixedOffset) -> Self {
        Self::String(value.with_timezone(tz).format(DATE_FORMAT).to_string())
    }

    /// Renders a timestamp as a date-and-time string in `tz`.
    pub fn date_time(value: &DateTime<FixedOffset>, tz: &FixedOffset) -> Self {
        Self::String(value.with_timezone(tz).format(DATETIME_FORMAT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_drops_time_of_day() {
        let plus_ten = FixedOffset::east_opt(10 * 3600).unwrap();
        let utc = FixedOffset::east_opt(0).unwrap();
        let ts = plus_ten.with_ymd_and_hms(2024, 3, 15, 23, 30, 0).unwrap();

        assert_eq!(Value::date(&ts, &utc), Value::from("2024-03-15"));
        assert_eq!(Value::date(&ts, &plus_ten), Value::from("2024-03-15"));
        assert_eq!(Value::date_time(&ts, &utc), Value::from("2024-03-15 13:30:00"));
    }
}
