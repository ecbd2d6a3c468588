//! Payroll periods and their regular/overtime summary.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};

use crate::core::calculator::engine::EarningsEngine;
use crate::core::calculator::overtime::{OvertimeSplit, split_hours};
use crate::errors::AppError;
use crate::models::time_entry::TimeEntry;
use crate::utils::date::{local_date_of, shift_month, start_of_month, start_of_week};
use crate::utils::range::parse_range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayrollPeriod {
    CurrentWeek,
    LastWeek,
    #[default]
    CurrentMonth,
    LastMonth,
    Ytd,
    All,
    Custom {
        from: NaiveDate,
        to: NaiveDate,
    },
}

impl FromStr for PayrollPeriod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current-week" | "week" => Ok(PayrollPeriod::CurrentWeek),
            "last-week" => Ok(PayrollPeriod::LastWeek),
            "current-month" | "month" => Ok(PayrollPeriod::CurrentMonth),
            "last-month" => Ok(PayrollPeriod::LastMonth),
            "ytd" | "year" => Ok(PayrollPeriod::Ytd),
            "all" => Ok(PayrollPeriod::All),
            other => {
                let (from, to) = parse_range(other)?;
                Ok(PayrollPeriod::Custom { from, to })
            }
        }
    }
}

impl fmt::Display for PayrollPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayrollPeriod::CurrentWeek => f.write_str("Current Week"),
            PayrollPeriod::LastWeek => f.write_str("Last Week"),
            PayrollPeriod::CurrentMonth => f.write_str("Current Month"),
            PayrollPeriod::LastMonth => f.write_str("Last Month"),
            PayrollPeriod::Ytd => f.write_str("Year to Date"),
            PayrollPeriod::All => f.write_str("All Time"),
            PayrollPeriod::Custom { from, to } => write!(f, "{from} → {to}"),
        }
    }
}

impl PayrollPeriod {
    /// Inclusive date bounds relative to `today`; `None` for all time.
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            PayrollPeriod::CurrentWeek => {
                let sow = start_of_week(today);
                Some((sow, sow + Duration::days(6)))
            }
            PayrollPeriod::LastWeek => {
                let sow = start_of_week(today) - Duration::days(7);
                Some((sow, sow + Duration::days(6)))
            }
            PayrollPeriod::CurrentMonth => {
                let first = start_of_month(today);
                Some((first, shift_month(first, 1) - Duration::days(1)))
            }
            PayrollPeriod::LastMonth => {
                let first = shift_month(today, -1);
                Some((first, start_of_month(today) - Duration::days(1)))
            }
            PayrollPeriod::Ytd => {
                let first = NaiveDate::from_ymd_opt(today.year(), 1, 1)?;
                Some((first, today))
            }
            PayrollPeriod::All => None,
            PayrollPeriod::Custom { from, to } => Some((from, to)),
        }
    }

    /// Entries are selected by the local date of their start instant.
    pub fn contains(&self, entry: &TimeEntry, today: NaiveDate) -> bool {
        match self.bounds(today) {
            Some((from, to)) => {
                let d = local_date_of(entry.start_time);
                d >= from && d <= to
            }
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayrollSummary {
    pub period: PayrollPeriod,
    pub bounds: Option<(NaiveDate, NaiveDate)>,
    pub entries: Vec<TimeEntry>,
    pub split: OvertimeSplit,
    /// Regular hours priced at the current rate.
    pub regular_pay: f64,
    /// Overtime hours priced at the current overtime rate.
    pub overtime_pay: f64,
    /// Sum of the earnings frozen into each entry.
    pub gross_pay: f64,
    pub hourly_rate: f64,
    pub overtime_rate: f64,
}

impl PayrollSummary {
    pub fn total_hours(&self) -> f64 {
        self.split.hours()
    }
}

/// Summarize a payroll period. Each entry's split is recomputed from the
/// closed hours that preceded it in its own week and the current threshold;
/// gross pay is what was actually settled.
pub fn summarize(engine: &EarningsEngine<'_>, period: PayrollPeriod) -> PayrollSummary {
    let today = engine.today();
    let settings = engine.settings();

    let mut entries: Vec<TimeEntry> = engine
        .entries()
        .iter()
        .filter(|e| period.contains(e, today))
        .cloned()
        .collect();
    entries.sort_by_key(|e| e.start_time);

    let mut split = OvertimeSplit::default();
    let mut gross = 0.0;

    for e in &entries {
        split.add(split_hours(
            engine.prior_weekly_hours(e.start_time),
            e.duration,
            settings.overtime_threshold,
        ));
        gross += e.earnings;
    }

    PayrollSummary {
        period,
        bounds: period.bounds(today),
        regular_pay: split.regular_pay(settings),
        overtime_pay: split.overtime_pay(settings),
        gross_pay: gross,
        hourly_rate: settings.hourly_rate,
        overtime_rate: settings.overtime_rate(),
        split,
        entries,
    }
}
