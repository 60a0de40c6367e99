//! Timestamp formatting for report tables.

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// "2017-03-05 07:08:09"
pub const DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";

/// "07:08:09"
pub const TIME_ONLY: &str = "%H:%M:%S";

/// Time zone used to render timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    #[default]
    Local,
    Utc,
}

impl Zone {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "local" | "system" => Some(Self::Local),
            "utc" | "z" => Some(Self::Utc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Utc => "utc",
        }
    }
}

/// Format epoch milliseconds as `YYYY-MM-DD HH:mm:ss`
pub fn format_date(ms: i64, zone: Zone) -> Result<String> {
    format_timestamp(ms, zone, DATE_TIME)
}

/// Format epoch milliseconds as `HH:mm:ss`
pub fn format_time(ms: i64, zone: Zone) -> Result<String> {
    format_timestamp(ms, zone, TIME_ONLY)
}

/// Format epoch milliseconds with a chrono pattern.
/// Only years 0 through 9999 (in the target zone) are accepted, so `%Y` stays four digits.
pub fn format_timestamp(ms: i64, zone: Zone, pattern: &str) -> Result<String> {
    let rendered = DateTime::<Utc>::from_timestamp_millis(ms).and_then(|utc| match zone {
        Zone::Local => render(&utc, &Local, pattern),
        Zone::Utc => render(&utc, &Utc, pattern),
    });
    rendered.ok_or_else(|| {
        tracing::warn!(ms, "timestamp outside the representable range");
        Error::TimestampOutOfRange { ms }
    })
}

fn render<Tz>(utc: &DateTime<Utc>, tz: &Tz, pattern: &str) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = utc.with_timezone(tz);
    (0..=9999)
        .contains(&local.year())
        .then(|| local.format(pattern).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2017-03-05T07:08:09.000Z
    const MARCH_5: i64 = 1_488_697_689_000;

    #[test]
    fn test_format_date_utc() {
        assert_eq!(
            format_date(MARCH_5, Zone::Utc).unwrap(),
            "2017-03-05 07:08:09"
        );
    }

    #[test]
    fn test_format_time_utc() {
        assert_eq!(format_time(MARCH_5, Zone::Utc).unwrap(), "07:08:09");
        assert_eq!(format_time(MARCH_5 + 999, Zone::Utc).unwrap(), "07:08:09");
    }

    #[test]
    fn test_epoch_and_negative() {
        assert_eq!(format_date(0, Zone::Utc).unwrap(), "1970-01-01 00:00:00");
        assert_eq!(
            format_date(-1_000, Zone::Utc).unwrap(),
            "1969-12-31 23:59:59"
        );
    }

    #[test]
    fn test_local_is_fixed_width() {
        let date = format_date(MARCH_5, Zone::Local).unwrap();
        assert_eq!(date.len(), 19);
        assert_eq!(&date[4..5], "-");
        assert_eq!(&date[10..11], " ");
        assert_eq!(format_time(MARCH_5, Zone::Local).unwrap().len(), 8);
    }

    #[test]
    fn test_out_of_range() {
        let err = format_date(i64::MAX, Zone::Utc).unwrap_err();
        assert!(matches!(err, Error::TimestampOutOfRange { ms } if ms == i64::MAX));
    }

    #[test]
    fn test_four_digit_year_bounds() {
        // 9999-12-31T23:59:59.999Z
        let last = 253_402_300_799_999;
        assert_eq!(format_date(last, Zone::Utc).unwrap(), "9999-12-31 23:59:59");
        assert!(matches!(
            format_date(last + 1, Zone::Utc),
            Err(Error::TimestampOutOfRange { .. })
        ));

        // 0000-01-01T00:00:00Z
        let first = -62_167_219_200_000;
        assert_eq!(format_date(first, Zone::Utc).unwrap(), "0000-01-01 00:00:00");
        assert!(format_time(first - 1, Zone::Utc).is_err());
    }

    #[test]
    fn test_zone_from_str() {
        assert_eq!(Zone::from_str("UTC"), Some(Zone::Utc));
        assert_eq!(Zone::from_str("local"), Some(Zone::Local));
        assert_eq!(Zone::from_str("mars"), None);
    }
}
