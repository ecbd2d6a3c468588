// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime};

/// Excel serial number and number format for a `YYYY-MM-DD HH:MM` or
/// `YYYY-MM-DD` string.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return excel_serial(&dt).map(|v| ("yyyy-mm-dd hh:mm", v));
    }

    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let dt = d.and_hms_opt(0, 0, 0)?;
    excel_serial(&dt).map(|v| ("yyyy-mm-dd", v))
}

fn excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let duration = *dt - epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}
