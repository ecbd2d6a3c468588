//! Context-aware hints shown next to the dashboard.

use chrono::{Datelike, Timelike};

use crate::core::calculator::EarningsEngine;
use crate::core::calculator::Window;
use crate::utils::date::local_datetime_of;
use crate::utils::formatting::currency;

pub const MAX_SUGGESTIONS: usize = 3;

/// Hours in one session after which a break is suggested.
const LONG_SESSION_HOURS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionAction {
    ClockIn,
    ClockOut,
    Break,
    ViewPayroll,
    ViewReports,
}

impl SuggestionAction {
    /// CLI command that carries the action out.
    pub fn command_hint(&self) -> &'static str {
        match self {
            SuggestionAction::ClockIn => "timevault in",
            SuggestionAction::ClockOut => "timevault out",
            SuggestionAction::Break => "take a short break",
            SuggestionAction::ViewPayroll => "timevault payroll",
            SuggestionAction::ViewReports => "timevault report",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: String,
    pub action: SuggestionAction,
}

/// Up to three suggestions, in priority order.
pub fn generate(engine: &EarningsEngine<'_>) -> Vec<Suggestion> {
    let Some(now) = local_datetime_of(engine.now()) else {
        return Vec::new();
    };

    let settings = engine.settings();
    let hour = now.hour();
    let weekday = now.weekday().num_days_from_sunday();
    let working = engine.session().is_working();
    let week_hours = engine.hours(Window::Week);
    let today_hours = engine.hours(Window::Today);

    let mut out = Vec::new();

    if (7..=9).contains(&hour) && !working {
        out.push(Suggestion {
            icon: "☀️",
            title: "Good Morning!",
            text: "Ready to start your day? Clock in to begin tracking.".into(),
            action: SuggestionAction::ClockIn,
        });
    }

    if (12..=13).contains(&hour) && working && today_hours >= 4.0 {
        out.push(Suggestion {
            icon: "🍽️",
            title: "Lunch Break?",
            text: "You've worked 4+ hours. Consider taking a break!".into(),
            action: SuggestionAction::Break,
        });
    }

    if (17..=18).contains(&hour) && working {
        out.push(Suggestion {
            icon: "🌅",
            title: "End of Day",
            text: "Wrapping up? Clock out when you're done.".into(),
            action: SuggestionAction::ClockOut,
        });
    }

    let target = settings.weekly_target;
    if target > 0.0 && weekday >= 3 {
        let progress = week_hours / target * 100.0;
        if progress < 50.0 {
            out.push(Suggestion {
                icon: "📊",
                title: "Weekly Goal",
                text: format!(
                    "{:.0}% of {}h target. You need {:.1}h more.",
                    progress,
                    target,
                    target - week_hours
                ),
                action: SuggestionAction::ViewPayroll,
            });
        }
    }

    let until_ot = engine.hours_until_overtime();
    if until_ot > 0.0 && until_ot <= 5.0 {
        out.push(Suggestion {
            icon: "⚡",
            title: "Overtime Soon!",
            text: format!(
                "Only {:.1}h until overtime at {}x rate.",
                until_ot, settings.overtime_multiplier
            ),
            action: SuggestionAction::ViewPayroll,
        });
    } else if until_ot <= 0.0 && week_hours > 0.0 {
        out.push(Suggestion {
            icon: "💰",
            title: "Overtime Active!",
            text: format!("You have {:.1}h overtime this week!", until_ot.abs()),
            action: SuggestionAction::ViewPayroll,
        });
    }

    if engine.entries().len() >= 5 {
        let projected = engine.average_daily_hours() * 5.0 * settings.hourly_rate;
        out.push(Suggestion {
            icon: "📈",
            title: "Weekly Projection",
            text: format!(
                "At your pace, you'll earn ~{} this week.",
                currency(projected, settings)
            ),
            action: SuggestionAction::ViewReports,
        });
    }

    let session = engine.live_hours();
    if working && session >= LONG_SESSION_HOURS {
        out.push(Suggestion {
            icon: "⏰",
            title: "Long Session",
            text: format!("You've been working {:.1} hours straight. Take a break!", session),
            action: SuggestionAction::Break,
        });
    }

    out.truncate(MAX_SUGGESTIONS);
    out
}
