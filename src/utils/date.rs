//! Calendar helpers. All partitioning happens in local time: an entry's
//! `date` is the local date of its start instant, and weeks start on
//! Sunday 00:00 local time.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone};

pub const MS_PER_HOUR: f64 = 3_600_000.0;
pub const MS_PER_DAY: i64 = 86_400_000;

/// Local date of an epoch-milliseconds instant.
pub fn local_date_of(ms: i64) -> NaiveDate {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.date_naive(),
        None => DateTime::from_timestamp_millis(ms)
            .map(|dt| dt.date_naive())
            .unwrap_or_default(),
    }
}

pub fn local_datetime_of(ms: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(ms).single()
}

/// Epoch milliseconds of local midnight at the start of `date`.
pub fn local_midnight_ms(date: NaiveDate) -> i64 {
    let naive = date.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&naive).earliest() {
        Some(dt) => dt.timestamp_millis(),
        // midnight skipped by a DST jump: fall back to the UTC reading
        None => naive.and_utc().timestamp_millis(),
    }
}

/// Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(back)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `offset` months away from the month of `date`.
pub fn shift_month(date: NaiveDate, offset: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + offset;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Week start (local midnight, Sunday) of the week containing instant `ms`.
pub fn week_start_ms(ms: i64) -> i64 {
    local_midnight_ms(start_of_week(local_date_of(ms)))
}

/// Fractional hours between two instants. Not clamped: a backward clock
/// yields a negative value. Computed in floating point so that any pair of
/// stored instants is accepted.
pub fn hours_between(start_ms: i64, end_ms: i64) -> f64 {
    (end_ms as f64 - start_ms as f64) / MS_PER_HOUR
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

pub fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}
