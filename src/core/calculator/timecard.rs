use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::time_entry::TimeEntry;
use crate::utils::date::{MS_PER_DAY, local_date_of};
use chrono::Datelike;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimecardFilter {
    Today,
    /// Rolling last seven days.
    #[default]
    Week,
    /// Same calendar month as now.
    Month,
    All,
}

impl FromStr for TimecardFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(TimecardFilter::Today),
            "week" => Ok(TimecardFilter::Week),
            "month" => Ok(TimecardFilter::Month),
            "all" => Ok(TimecardFilter::All),
            other => Err(AppError::InvalidPeriod(format!(
                "unknown timecard filter '{other}' (today, week, month, all)"
            ))),
        }
    }
}

impl fmt::Display for TimecardFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimecardFilter::Today => "today",
            TimecardFilter::Week => "week",
            TimecardFilter::Month => "month",
            TimecardFilter::All => "all",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timecard {
    pub filter: TimecardFilter,
    /// Newest first.
    pub entries: Vec<TimeEntry>,
    pub total_hours: f64,
    pub total_earnings: f64,
}

impl TimecardFilter {
    /// Selection is by start instant.
    pub fn matches(&self, entry: &TimeEntry, now_ms: i64) -> bool {
        match self {
            TimecardFilter::Today => local_date_of(entry.start_time) == local_date_of(now_ms),
            TimecardFilter::Week => entry.start_time >= now_ms - 7 * MS_PER_DAY,
            TimecardFilter::Month => {
                let d = local_date_of(entry.start_time);
                let n = local_date_of(now_ms);
                d.year() == n.year() && d.month() == n.month()
            }
            TimecardFilter::All => true,
        }
    }
}

pub fn build_timecard(entries: &[TimeEntry], filter: TimecardFilter, now_ms: i64) -> Timecard {
    let mut selected: Vec<TimeEntry> = entries
        .iter()
        .filter(|e| filter.matches(e, now_ms))
        .cloned()
        .collect();

    selected.sort_by(|a, b| b.start_time.cmp(&a.start_time));

    Timecard {
        filter,
        total_hours: selected.iter().fold(0.0, |acc, e| acc + e.duration),
        total_earnings: selected.iter().fold(0.0, |acc, e| acc + e.earnings),
        entries: selected,
    }
}
