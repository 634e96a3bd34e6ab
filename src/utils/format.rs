// src/utils/format.rs

//! Display formatting for course-section fields.
//!
//! None of these fail: missing values become `N/A` and values that do not
//! parse are shown as they came from the store.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::models::CourseSection;

/// Shown for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown when credits carry the zero sentinel.
pub const CREDITS_HIDDEN: &str = "not publicly displayed";

/// Format a 24-hour `HHMM` value as `H:MM AM|PM`.
///
/// Short values are zero-padded, so `"930"` is 9:30 AM and `"0"` is midnight.
pub fn format_time(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };
    if raw.len() > 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    let padded = format!("{raw:0>4}");
    let (Ok(hours), Ok(minutes)) = (padded[..2].parse::<u32>(), padded[2..].parse::<u32>())
    else {
        return raw.to_string();
    };
    if hours > 23 || minutes > 59 {
        return raw.to_string();
    }

    let period = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = match hours {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{display_hours}:{minutes:02} {period}")
}

/// Format a `YYYYMMDD` value as `Month D, YYYY`.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };
    match parse_compact_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_compact_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = raw[..4].parse().ok()?;
    let month = raw[4..6].parse().ok()?;
    let day = raw[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format a timestamp in the local timezone as `M/D/YYYY, H:MM:SS AM|PM`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    format_timestamp_in(ts, &Local)
}

/// [`format_timestamp`] for an explicit timezone.
pub fn format_timestamp_in<Tz>(ts: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    ts.with_timezone(tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// Resolved credit value of a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Credits {
    /// The store reports 0, which means the value is not published
    Hidden,
    Hours(f64),
}

impl Credits {
    /// `"3 credits"`, `"1 credit"`, or the hidden sentinel text.
    pub fn label(&self) -> String {
        match self {
            Credits::Hidden => CREDITS_HIDDEN.to_string(),
            Credits::Hours(h) if *h == 1.0 => format!("{self} credit"),
            Credits::Hours(_) => format!("{self} credits"),
        }
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credits::Hidden => f.write_str(CREDITS_HIDDEN),
            Credits::Hours(h) if h.fract() == 0.0 => write!(f, "{h:.0}"),
            Credits::Hours(h) => write!(f, "{h}"),
        }
    }
}

/// Pick the credit value to show: `credits_high` wins over `credits_low`.
pub fn resolve_credits(section: &CourseSection) -> Option<Credits> {
    let value = section.credits_high.or(section.credits_low)?;
    if value == 0.0 {
        Some(Credits::Hidden)
    } else {
        Some(Credits::Hours(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(Some("1330")), "1:30 PM");
        assert_eq!(format_time(Some("0")), "12:00 AM");
        assert_eq!(format_time(Some("0000")), "12:00 AM");
        assert_eq!(format_time(Some("1200")), "12:00 PM");
        assert_eq!(format_time(Some("930")), "9:30 AM");
        assert_eq!(format_time(Some("2359")), "11:59 PM");
        assert_eq!(format_time(None), "N/A");
        assert_eq!(format_time(Some("")), "N/A");
    }

    #[test]
    fn test_format_time_passes_through_garbage() {
        assert_eq!(format_time(Some("TBA")), "TBA");
        assert_eq!(format_time(Some("2575")), "2575");
        assert_eq!(format_time(Some("13300")), "13300");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("20240115")), "January 15, 2024");
        assert_eq!(format_date(Some("20251201")), "December 1, 2025");
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("not-a-date")), "not-a-date");
        assert_eq!(format_date(Some("20241345")), "20241345");
    }

    #[test]
    fn test_format_timestamp_in_utc() {
        let ts = DateTime::parse_from_rfc3339("2025-11-14T15:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp_in(ts, &Utc), "11/14/2025, 3:04:05 PM");
    }

    #[test]
    fn test_resolve_credits() {
        let hidden = CourseSection {
            credits_high: Some(0.0),
            credits_low: Some(3.0),
            ..Default::default()
        };
        assert_eq!(resolve_credits(&hidden), Some(Credits::Hidden));
        assert_eq!(resolve_credits(&hidden).unwrap().to_string(), CREDITS_HIDDEN);

        let low_only = CourseSection {
            credits_low: Some(4.0),
            ..Default::default()
        };
        assert_eq!(resolve_credits(&low_only), Some(Credits::Hours(4.0)));

        let high_wins = CourseSection {
            credits_high: Some(5.0),
            credits_low: Some(3.0),
            ..Default::default()
        };
        assert_eq!(resolve_credits(&high_wins), Some(Credits::Hours(5.0)));

        assert_eq!(resolve_credits(&CourseSection::default()), None);
    }

    #[test]
    fn test_credit_labels() {
        assert_eq!(Credits::Hours(1.0).label(), "1 credit");
        assert_eq!(Credits::Hours(3.0).label(), "3 credits");
        assert_eq!(Credits::Hours(2.5).label(), "2.5 credits");
        assert_eq!(Credits::Hidden.label(), CREDITS_HIDDEN);
    }
}
