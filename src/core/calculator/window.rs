use chrono::NaiveDate;

use crate::utils::date::{start_of_month, start_of_week};

/// Aggregation window, always evaluated relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Today,
    /// From Sunday of the current week.
    Week,
    /// From the first day of the current month.
    Month,
    /// Inclusive calendar range.
    Range { from: NaiveDate, to: NaiveDate },
}

impl Window {
    /// Whether an entry partitioned on `date` falls in the window.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Window::Today => date == today,
            Window::Week => date >= start_of_week(today),
            Window::Month => date >= start_of_month(today),
            Window::Range { from, to } => date >= *from && date <= *to,
        }
    }

    /// Whether the current instant lies inside the window, i.e. whether an
    /// open session contributes live hours.
    pub fn includes_today(&self, today: NaiveDate) -> bool {
        match self {
            Window::Today | Window::Week | Window::Month => true,
            Window::Range { from, to } => today >= *from && today <= *to,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Window::Today => "Today".to_string(),
            Window::Week => "This Week".to_string(),
            Window::Month => "This Month".to_string(),
            Window::Range { from, to } => format!("{from} → {to}"),
        }
    }
}
