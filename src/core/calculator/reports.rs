//! Long-range statistics: totals, the last 30 days and a 12-month series.

use std::collections::BTreeSet;

use chrono::Datelike;

use crate::core::calculator::engine::{EarningsEngine, average_per_day};
use crate::utils::date::{MS_PER_DAY, local_date_of, month_label, shift_month};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthPoint {
    pub year: i32,
    pub month: u32,
    pub label: &'static str,
    pub hours: f64,
    pub earnings: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub total_hours: f64,
    pub total_earnings: f64,
    pub days_worked_30: usize,
    /// Average hours per worked day over the last 30 days.
    pub avg_hours_30: f64,
    /// Average hours per worked day over all entries.
    pub avg_daily_hours: f64,
    /// Oldest month first, the current month last.
    pub monthly: Vec<MonthPoint>,
}

pub fn build_report(engine: &EarningsEngine<'_>) -> Report {
    let entries = engine.entries();
    let now = engine.now();
    let cutoff = now - 30 * MS_PER_DAY;

    let recent: Vec<_> = entries.iter().filter(|e| e.start_time >= cutoff).collect();
    let days: BTreeSet<_> = recent.iter().map(|e| local_date_of(e.start_time)).collect();
    let recent_hours = recent.iter().fold(0.0, |acc, e| acc + e.duration);

    let avg_hours_30 = if days.is_empty() {
        0.0
    } else {
        recent_hours / days.len() as f64
    };

    let today = engine.today();
    let monthly = (0..12)
        .rev()
        .map(|back| {
            let first = shift_month(today, -back);
            let in_month = entries.iter().filter(|e| {
                let d = local_date_of(e.start_time);
                d.year() == first.year() && d.month() == first.month()
            });

            let (hours, earnings) = in_month.fold((0.0, 0.0), |(h, m), e| {
                (h + e.duration, m + e.earnings)
            });

            MonthPoint {
                year: first.year(),
                month: first.month(),
                label: month_label(first.month()),
                hours,
                earnings,
            }
        })
        .collect();

    Report {
        total_hours: entries.iter().fold(0.0, |acc, e| acc + e.duration),
        total_earnings: entries.iter().fold(0.0, |acc, e| acc + e.earnings),
        days_worked_30: days.len(),
        avg_hours_30,
        avg_daily_hours: average_per_day(entries.iter()),
        monthly,
    }
}
