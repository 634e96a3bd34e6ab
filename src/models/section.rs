// src/models/section.rs

//! Course-section record as stored in the remote `courses` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seat or capacity values at or above this mark flag a section reserved for
/// disability or special-program accommodation.
pub const RESERVED_SEAT_THRESHOLD: i64 = 9000;

/// One row of the course catalog.
///
/// Every column is optional. Loosely typed upstream values (numbers stored as
/// strings and the reverse) are normalised here, once, when a page is decoded.
/// A scalar that does not parse as its column type decodes as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseSection {
    /// Course reference number, unique per term
    #[serde(default, deserialize_with = "de::opt_text")]
    pub crn: Option<String>,

    #[serde(default, deserialize_with = "de::opt_text")]
    pub subject: Option<String>,

    #[serde(default, deserialize_with = "de::opt_text")]
    pub course_number: Option<String>,

    #[serde(default, deserialize_with = "de::opt_text")]
    pub section: Option<String>,

    #[serde(default, deserialize_with = "de::opt_text")]
    pub title: Option<String>,

    /// Term code (e.g. "202540")
    #[serde(default, deserialize_with = "de::opt_text")]
    pub term: Option<String>,

    /// Human-readable term (e.g. "Spring 2026")
    #[serde(default, deserialize_with = "de::opt_text")]
    pub term_desc: Option<String>,

    #[serde(default, deserialize_with = "de::opt_number")]
    pub credits_low: Option<f64>,

    #[serde(default, deserialize_with = "de::opt_number")]
    pub credits_high: Option<f64>,

    #[serde(default, deserialize_with = "de::opt_text")]
    pub instructor_name: Option<String>,

    #[serde(default, deserialize_with = "de::opt_text")]
    pub instructor_email: Option<String>,

    /// Comma-separated day letters (e.g. "M,W")
    #[serde(default, deserialize_with = "de::opt_text")]
    pub meeting_days: Option<String>,

    /// 24-hour `HHMM`
    #[serde(default, deserialize_with = "de::opt_text")]
    pub meeting_time_start: Option<String>,

    /// 24-hour `HHMM`
    #[serde(default, deserialize_with = "de::opt_text")]
    pub meeting_time_end: Option<String>,

    #[serde(default, deserialize_with = "de::opt_text")]
    pub meeting_building: Option<String>,

    #[serde(default, deserialize_with = "de::opt_text")]
    pub meeting_room: Option<String>,

    #[serde(default, deserialize_with = "de::opt_text")]
    pub campus: Option<String>,

    #[serde(default, deserialize_with = "de::opt_text")]
    pub schedule_type: Option<String>,

    #[serde(default, deserialize_with = "de::opt_text")]
    pub instructional_method: Option<String>,

    #[serde(default, deserialize_with = "de::opt_bool")]
    pub open_section: Option<bool>,

    #[serde(default, deserialize_with = "de::opt_int")]
    pub seats_available: Option<i64>,

    #[serde(default, deserialize_with = "de::opt_int")]
    pub max_enrollment: Option<i64>,

    #[serde(default, deserialize_with = "de::opt_int")]
    pub current_enrollment: Option<i64>,

    #[serde(default, deserialize_with = "de::opt_int")]
    pub waitlist_capacity: Option<i64>,

    #[serde(default, deserialize_with = "de::opt_int")]
    pub waitlist_count: Option<i64>,

    /// `YYYYMMDD`
    #[serde(default, deserialize_with = "de::opt_text")]
    pub start_date: Option<String>,

    /// `YYYYMMDD`
    #[serde(default, deserialize_with = "de::opt_text")]
    pub end_date: Option<String>,

    #[serde(default, deserialize_with = "de::opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CourseSection {
    /// Whether the section is open for registration. Missing means closed.
    pub fn is_open(&self) -> bool {
        self.open_section.unwrap_or(false)
    }

    /// Whether seat counts carry the reserved-section sentinel.
    pub fn is_reserved(&self) -> bool {
        self.seats_available
            .is_some_and(|v| v >= RESERVED_SEAT_THRESHOLD)
            || self
                .max_enrollment
                .is_some_and(|v| v >= RESERVED_SEAT_THRESHOLD)
    }

    /// "SUBJ NUM" display code; absent parts render empty.
    pub fn course_code(&self) -> String {
        format!(
            "{} {}",
            self.subject.as_deref().unwrap_or(""),
            self.course_number.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    /// Percentage of capacity taken, rounded. Zero when capacity is unknown.
    pub fn enrollment_percent(&self) -> i64 {
        match self.max_enrollment {
            Some(max) if max != 0 => {
                let current = self.current_enrollment.unwrap_or(0) as f64;
                (current / max as f64 * 100.0).round() as i64
            }
            _ => 0,
        }
    }
}

/// Lenient column decoders. Only arrays and objects are rejected.
mod de {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::de::{self, Deserializer};
    use serde::Deserialize;
    use serde_json::Value;

    fn scalar<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(v @ (Value::Array(_) | Value::Object(_))) => Err(de::Error::custom(format!(
                "expected a scalar column value, found {v}"
            ))),
            Some(v) => Ok(Some(v)),
        }
    }

    pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(scalar(deserializer)?.map(|v| match v {
            Value::String(s) => s,
            Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
                _ => n.to_string(),
            },
            other => other.to_string(),
        }))
    }

    /// Parse a trimmed string column; blank is `None`, unparseable is logged
    /// and dropped.
    fn parse_or_drop<T>(
        raw: &str,
        kind: &str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Option<T> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let parsed = parse(trimmed);
        if parsed.is_none() {
            log::debug!("Ignoring malformed {kind} value {raw:?}");
        }
        parsed
    }

    fn dropped<T>(value: &Value, kind: &str) -> Option<T> {
        log::debug!("Ignoring malformed {kind} value {value}");
        None
    }

    pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match scalar(deserializer)? {
            None => None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => parse_or_drop(&s, "number", |t| t.parse().ok()),
            Some(other) => dropped(&other, "number"),
        })
    }

    pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match scalar(deserializer)? {
            None => None,
            Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Some(Value::String(s)) => parse_or_drop(&s, "integer", |t| t.parse().ok()),
            Some(other) => dropped(&other, "integer"),
        })
    }

    pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match scalar(deserializer)? {
            None => None,
            Some(Value::Bool(b)) => Some(b),
            Some(Value::String(s)) => parse_or_drop(&s, "boolean", |t| {
                match t.to_ascii_lowercase().as_str() {
                    "true" | "t" | "y" | "yes" => Some(true),
                    "false" | "f" | "n" | "no" => Some(false),
                    _ => None,
                }
            }),
            Some(other) => dropped(&other, "boolean"),
        })
    }

    pub fn opt_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = opt_text(deserializer)? else {
            return Ok(None);
        };

        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(Some(dt.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Some(naive.and_utc()));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f") {
            return Ok(Some(naive.and_utc()));
        }

        log::debug!("Ignoring unparseable updated_at value {raw:?}");
        Ok(None)
    }
}
