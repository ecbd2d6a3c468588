use crate::utils::date::{hours_between, local_date_of};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One closed work session.
///
/// Immutable once created: `earnings` is the pay computed at clock-out time
/// and is never recomputed from later settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: i64,
    /// Local calendar date of `start_time`; partition key of "today" queries.
    pub date: NaiveDate,
    pub start_time: i64,
    pub end_time: i64,
    /// Hours, fractional.
    pub duration: f64,
    pub earnings: f64,
}

impl TimeEntry {
    pub fn new(id: i64, start_time: i64, end_time: i64, earnings: f64) -> Self {
        Self {
            id,
            date: local_date_of(start_time),
            start_time,
            end_time,
            duration: hours_between(start_time, end_time),
            earnings,
        }
    }

    /// Decode one persisted entry, accepting partial records.
    ///
    /// `startTime` and `endTime` are mandatory; `id` falls back to the end
    /// instant, `date` and `duration` are derived when missing or malformed,
    /// and a missing `earnings` counts as zero. Numbers written as floats
    /// (the legacy browser format) are accepted.
    pub fn from_value_lenient(value: &Value) -> Option<TimeEntry> {
        let obj = value.as_object()?;

        let int = |key: &str| obj.get(key).and_then(as_i64);
        let float = |key: &str| obj.get(key).and_then(Value::as_f64).filter(|f| f.is_finite());

        let start_time = int("startTime")?;
        let end_time = int("endTime")?;
        let id = int("id").unwrap_or(end_time);

        let date = obj
            .get("date")
            .and_then(Value::as_str)
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            .unwrap_or_else(|| local_date_of(start_time));

        let duration = float("duration").unwrap_or_else(|| hours_between(start_time, end_time));
        let earnings = float("earnings").unwrap_or(0.0);

        Some(TimeEntry {
            id,
            date,
            start_time,
            end_time,
            duration,
            earnings,
        })
    }
}

fn as_i64(v: &Value) -> Option<i64> {
    v.as_i64().or_else(|| {
        v.as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}
