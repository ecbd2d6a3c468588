//! Read-only earnings and hours queries over a fixed view of the state.

use chrono::{Datelike, Duration, NaiveDate};

use crate::core::calculator::overtime::{OvertimeSplit, split_hours};
use crate::core::calculator::window::Window;
use crate::models::session::SessionState;
use crate::models::settings::Settings;
use crate::models::time_entry::TimeEntry;
use crate::utils::date::{hours_between, local_date_of, start_of_week, week_start_ms};

/// Hours the dashboard treats as a full day.
pub const DAILY_GOAL_HOURS: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowTotals {
    pub hours: f64,
    pub earnings: f64,
}

/// Goal completion in percent, each capped at 100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GoalProgress {
    pub today: f64,
    pub week: f64,
    pub month: f64,
}

/// This week's hours seen against the overtime threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution {
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub regular_percent: f64,
    pub overtime_percent: f64,
}

/// Every query is a pure function of the borrowed entries, the settings,
/// the session and `now`. Nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct EarningsEngine<'a> {
    entries: &'a [TimeEntry],
    settings: &'a Settings,
    session: SessionState,
    now: i64,
}

impl<'a> EarningsEngine<'a> {
    pub fn new(
        entries: &'a [TimeEntry],
        settings: &'a Settings,
        session: SessionState,
        now: i64,
    ) -> Self {
        Self {
            entries,
            settings,
            session,
            now,
        }
    }

    pub fn entries(&self) -> &'a [TimeEntry] {
        self.entries
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn now(&self) -> i64 {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        local_date_of(self.now)
    }

    /// Hours of the open session so far, 0 when idle.
    pub fn live_hours(&self) -> f64 {
        match self.session {
            SessionState::Working { since } => hours_between(since, self.now),
            SessionState::Idle => 0.0,
        }
    }

    fn matching(&self, window: Window) -> impl Iterator<Item = &'a TimeEntry> + use<'a> {
        let today = self.today();
        self.entries
            .iter()
            .filter(move |e| window.contains(e.date, today))
    }

    /// Closed hours in the window plus the live session when the window
    /// includes now.
    pub fn hours(&self, window: Window) -> f64 {
        let closed = self.matching(window).fold(0.0, |acc, e| acc + e.duration);

        if window.includes_today(self.today()) {
            closed + self.live_hours()
        } else {
            closed
        }
    }

    /// Settled earnings only. The open session adds nothing until it closes.
    pub fn earnings(&self, window: Window) -> f64 {
        self.matching(window).fold(0.0, |acc, e| acc + e.earnings)
    }

    pub fn totals(&self, window: Window) -> WindowTotals {
        WindowTotals {
            hours: self.hours(window),
            earnings: self.earnings(window),
        }
    }

    /// Closed hours in the week of `start_ms` that started strictly before it.
    pub fn prior_weekly_hours(&self, start_ms: i64) -> f64 {
        let week_start = week_start_ms(start_ms);
        self.entries
            .iter()
            .filter(|e| e.start_time >= week_start && e.start_time < start_ms)
            .fold(0.0, |acc, e| acc + e.duration)
    }

    /// Split of a session running from `start_ms` to `end_ms`.
    pub fn split_session(&self, start_ms: i64, end_ms: i64) -> OvertimeSplit {
        split_hours(
            self.prior_weekly_hours(start_ms),
            hours_between(start_ms, end_ms),
            self.settings.overtime_threshold,
        )
    }

    /// Split and pay of a session under the current settings.
    pub fn price_session(&self, start_ms: i64, end_ms: i64) -> (OvertimeSplit, f64) {
        let split = self.split_session(start_ms, end_ms);
        (split, split.pay(self.settings))
    }

    /// Closed hours per weekday of the current week, Sunday first, rounded
    /// to one decimal.
    pub fn week_breakdown(&self) -> [f64; 7] {
        let sow = start_of_week(self.today());
        let eow = sow + Duration::days(7);
        let mut days = [0.0_f64; 7];

        for e in self
            .entries
            .iter()
            .filter(|e| e.date >= sow && e.date < eow)
        {
            days[e.date.weekday().num_days_from_sunday() as usize] += e.duration;
        }

        days.map(|h| (h * 10.0).round() / 10.0)
    }

    pub fn goal_progress(&self) -> GoalProgress {
        let target = self.settings.weekly_target;

        GoalProgress {
            today: percent_of(self.hours(Window::Today), DAILY_GOAL_HOURS),
            week: percent_of(self.hours(Window::Week), target),
            month: percent_of(self.hours(Window::Month), target * 4.0),
        }
    }

    /// `None` when nothing has been worked this week.
    pub fn distribution(&self) -> Option<Distribution> {
        let week = self.hours(Window::Week);
        let threshold = self.settings.overtime_threshold;

        let regular = week.min(threshold).max(0.0);
        let overtime = (week - threshold).max(0.0);
        let total = regular + overtime;

        if total <= 0.0 {
            return None;
        }

        Some(Distribution {
            regular_hours: regular,
            overtime_hours: overtime,
            regular_percent: regular / total * 100.0,
            overtime_percent: overtime / total * 100.0,
        })
    }

    /// Hours left before this week's hours reach the threshold (negative
    /// once in overtime).
    pub fn hours_until_overtime(&self) -> f64 {
        self.settings.overtime_threshold - self.hours(Window::Week)
    }

    /// Average hours per distinct local day with at least one entry.
    pub fn average_daily_hours(&self) -> f64 {
        average_per_day(self.entries.iter())
    }
}

fn percent_of(value: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (value / target * 100.0).clamp(0.0, 100.0)
}

pub(crate) fn average_per_day<'e>(entries: impl Iterator<Item = &'e TimeEntry>) -> f64 {
    let mut days = std::collections::BTreeSet::new();
    let mut total = 0.0;

    for e in entries {
        days.insert(local_date_of(e.start_time));
        total += e.duration;
    }

    if days.is_empty() {
        0.0
    } else {
        total / days.len() as f64
    }
}
