//! Parsing of inclusive date ranges given on the command line.

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

fn bad(r: &str, what: &str) -> AppError {
    AppError::InvalidPeriod(format!("{r}: {what}"))
}

fn year(r: &str, s: &str) -> AppResult<i32> {
    s.parse().map_err(|_| bad(r, "invalid year"))
}

fn month(r: &str, s: &str) -> AppResult<u32> {
    s.parse().map_err(|_| bad(r, "invalid month"))
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn bounds_of(r: &str, part: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match part.len() {
        4 => {
            let y = year(r, part)?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad(r, "invalid date"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad(r, "invalid date"))?;
            Ok((d1, d2))
        }
        7 if part.as_bytes()[4] == b'-' => {
            let y = year(r, &part[0..4])?;
            let m = month(r, &part[5..7])?;
            let last = month_last_day(y, m).ok_or_else(|| bad(r, "invalid month"))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| bad(r, "invalid date"))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| bad(r, "invalid date"))?;
            Ok((d1, d2))
        }
        10 => {
            let d = NaiveDate::parse_from_str(part, "%Y-%m-%d")
                .map_err(|_| bad(r, "invalid date"))?;
            Ok((d, d))
        }
        _ => Err(bad(r, "unsupported range format")),
    }
}

/// Parse a range expression into inclusive `(first_day, last_day)`.
///
/// Accepted:
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - `START:END` where both sides use one of the forms above (same form)
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    let Some((start_raw, end_raw)) = r.split_once(':') else {
        return bounds_of(r, r);
    };

    let start = start_raw.trim();
    let end = end_raw.trim();

    if start.len() != end.len() {
        return Err(bad(r, "start and end must have same format"));
    }

    let (d1, _) = bounds_of(r, start)?;
    let (_, d2) = bounds_of(r, end)?;

    if d2 < d1 {
        return Err(bad(r, "end precedes start"));
    }

    Ok((d1, d2))
}
