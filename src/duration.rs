//! Human readable durations.
//!
//! The clock style follows the default template of the duration formatter
//! the report UI was built with: the largest non-zero calendar unit decides
//! whether the output is a clock (`1:02:03`) or a unit list (`1 day, 3 hours`).
//! Only the smallest unit of the chosen template is rounded; the rounding
//! carries into the larger units.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const SECOND: u64 = 1_000;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// How to render a duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationStyle {
    /// `0:05`, `1:02:03`, `2 days`, `1 year, 0 months, 4 days`
    #[default]
    Clock,
    /// `1h 2m 3s 456ms`
    Compact,
}

impl DurationStyle {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clock" | "default" => Some(Self::Clock),
            "compact" | "human" => Some(Self::Compact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Compact => "compact",
        }
    }
}

/// Format a duration given in milliseconds.
/// Negative durations render as the magnitude with a leading `-`.
pub fn format_duration(ms: i64, style: DurationStyle) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let magnitude = ms.unsigned_abs();
    let body = match style {
        DurationStyle::Clock => clock(magnitude),
        DurationStyle::Compact => {
            humantime::format_duration(Duration::from_millis(magnitude)).to_string()
        }
    };
    format!("{}{}", sign, body)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
    Millis,
}

/// Calendar breakdown of a millisecond count.
/// Days fold into months at the mean Gregorian month length.
#[derive(Debug, Default, PartialEq, Eq)]
struct Breakdown {
    years: u64,
    months: u64,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
    millis: u64,
}

impl Breakdown {
    fn of(ms: u64) -> Self {
        let (months, days) = fold_days(ms / DAY);
        Self {
            years: months / 12,
            months: months % 12,
            days,
            hours: ms / HOUR % 24,
            minutes: ms / MINUTE % 60,
            seconds: ms / SECOND % 60,
            millis: ms % SECOND,
        }
    }

    fn units(&self) -> [(Unit, u64); 7] {
        [
            (Unit::Years, self.years),
            (Unit::Months, self.months),
            (Unit::Days, self.days),
            (Unit::Hours, self.hours),
            (Unit::Minutes, self.minutes),
            (Unit::Seconds, self.seconds),
            (Unit::Millis, self.millis),
        ]
    }

    fn largest(&self) -> Option<Unit> {
        self.units().into_iter().find(|(_, v)| *v > 0).map(|(u, _)| u)
    }

    fn smallest(&self) -> Option<Unit> {
        self.units().into_iter().rev().find(|(_, v)| *v > 0).map(|(u, _)| u)
    }
}

/// Split whole days into (months, remaining days)
fn fold_days(days: u64) -> (u64, u64) {
    let months = (days as f64 * 4800.0 / 146_097.0).floor() as u64;
    let consumed = (months as f64 * 146_097.0 / 4800.0).ceil() as u64;
    (months, days.saturating_sub(consumed))
}

fn clock(ms: u64) -> String {
    let parts = Breakdown::of(ms);
    let (Some(largest), Some(smallest)) = (parts.largest(), parts.smallest()) else {
        return plural(0, "second");
    };

    match largest {
        Unit::Millis => plural(ms, "millisecond"),
        Unit::Seconds | Unit::Minutes => {
            let s = round_div(ms, SECOND);
            format!("{}:{:02}", s / 60, s % 60)
        }
        Unit::Hours => {
            let s = round_div(ms, SECOND);
            format!("{}:{:02}:{:02}", s / 3600, s / 60 % 60, s % 60)
        }
        Unit::Days if smallest == Unit::Days => plural(parts.days, "day"),
        Unit::Days => {
            let h = round_div(ms, HOUR);
            let d = h / 24;
            unit_list(&[(d / 7, "week"), (d % 7, "day"), (h % 24, "hour")])
        }
        Unit::Months if smallest == Unit::Months => plural(parts.months, "month"),
        Unit::Years if smallest == Unit::Years => plural(parts.years, "year"),
        Unit::Months | Unit::Years => {
            let (months, days) = months_and_days(ms);
            unit_list(&[(months / 12, "year"), (months % 12, "month"), (days, "day")])
        }
    }
}

/// Whole months plus rounded remaining days, measured the way the template
/// tokens are: month lengths round to the nearest day.
fn months_and_days(ms: u64) -> (u64, u64) {
    let total_days = ms as f64 / DAY as f64;
    let months = (total_days * 4800.0 / 146_097.0).floor();
    let month_days = (months * 146_097.0 / 4800.0).round();
    let days = (total_days - month_days + 0.5).floor().max(0.0);
    (months as u64, days as u64)
}

fn round_div(value: u64, unit: u64) -> u64 {
    (value + unit / 2) / unit
}

fn plural(value: u64, unit: &str) -> String {
    if value == 1 {
        format!("{} {}", value, unit)
    } else {
        format!("{} {}s", value, unit)
    }
}

/// Join `value unit` pairs, dropping zero values at both ends
fn unit_list(values: &[(u64, &str)]) -> String {
    let first = values.iter().position(|(v, _)| *v > 0);
    let last = values.iter().rposition(|(v, _)| *v > 0);
    let kept = match (first, last) {
        (Some(first), Some(last)) => &values[first..=last],
        _ => &values[values.len() - 1..],
    };
    kept.iter()
        .map(|(v, unit)| plural(*v, unit))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(ms: i64) -> String {
        format_duration(ms, DurationStyle::Clock)
    }

    #[test]
    fn test_zero_and_millis() {
        assert_eq!(clock(0), "0 seconds");
        assert_eq!(clock(1), "1 millisecond");
        assert_eq!(clock(500), "500 milliseconds");
    }

    #[test]
    fn test_minutes_clock() {
        assert_eq!(clock(5_000), "0:05");
        assert_eq!(clock(5_500), "0:06");
        assert_eq!(clock(123_456), "2:03");
        assert_eq!(clock(59_999), "1:00");
    }

    #[test]
    fn test_hours_clock() {
        assert_eq!(clock(3_723_456), "1:02:03");
        assert_eq!(clock(3_600_000), "1:00:00");
    }

    #[test]
    fn test_days() {
        assert_eq!(clock(86_400_000), "1 day");
        assert_eq!(clock(172_800_000), "2 days");
        // 1 day 2h30m rounds to the hour
        assert_eq!(clock(95_400_000), "1 day, 3 hours");
        assert_eq!(clock(694_800_000), "1 week, 1 day, 1 hour");
        assert_eq!(clock(1_213_200_000), "2 weeks, 0 days, 1 hour");
    }

    #[test]
    fn test_months_and_years() {
        assert_eq!(clock(31 * 86_400_000), "1 month");
        assert_eq!(clock(365 * 86_400_000), "11 months, 30 days");
        assert_eq!(clock(366 * 86_400_000), "1 year");
        assert_eq!(clock(369 * 86_400_000), "1 year, 0 months, 4 days");
        assert_eq!(clock(45 * 86_400_000), "1 month, 15 days");
    }

    #[test]
    fn test_month_remainder_rounds_to_nearest_day() {
        // 31 days 12 hours
        assert_eq!(clock(2_721_600_000), "1 month, 2 days");
        assert_eq!(months_and_days(2_721_600_000), (1, 2));
        assert_eq!(months_and_days(369 * DAY), (12, 4));
    }

    #[test]
    fn test_negative() {
        assert_eq!(clock(-3_723_456), "-1:02:03");
        assert_eq!(
            format_duration(-1_500, DurationStyle::Compact),
            "-1s 500ms"
        );
    }

    #[test]
    fn test_compact() {
        assert_eq!(
            format_duration(3_723_456, DurationStyle::Compact),
            "1h 2m 3s 456ms"
        );
        assert_eq!(format_duration(0, DurationStyle::Compact), "0s");
    }

    #[test]
    fn test_breakdown_folds_days() {
        let parts = Breakdown::of(369 * DAY + 5 * HOUR);
        assert_eq!(parts.years, 1);
        assert_eq!(parts.months, 0);
        assert_eq!(parts.days, 3);
        assert_eq!(parts.hours, 5);
        assert_eq!(parts.largest(), Some(Unit::Years));
        assert_eq!(parts.smallest(), Some(Unit::Hours));
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!(
            DurationStyle::from_str("Compact"),
            Some(DurationStyle::Compact)
        );
        assert_eq!(DurationStyle::from_str("clock"), Some(DurationStyle::Clock));
        assert_eq!(DurationStyle::from_str("iso"), None);
    }
}
