use crate::core::calculator::{EarningsEngine, Window};
use crate::models::settings::Settings;
use crate::utils::formatting::currency;

/// Numbers the assistant may talk about, taken at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantContext {
    pub is_working: bool,
    pub session_start: Option<i64>,
    pub today_hours: f64,
    pub week_hours: f64,
    pub month_hours: f64,
    pub today_earnings: f64,
    pub week_earnings: f64,
    pub month_earnings: f64,
    pub entry_count: usize,
    pub settings: Settings,
}

impl AssistantContext {
    pub fn from_engine(engine: &EarningsEngine<'_>) -> Self {
        let session = engine.session();
        Self {
            is_working: session.is_working(),
            session_start: session.session_start(),
            today_hours: engine.hours(Window::Today),
            week_hours: engine.hours(Window::Week),
            month_hours: engine.hours(Window::Month),
            today_earnings: engine.earnings(Window::Today),
            week_earnings: engine.earnings(Window::Week),
            month_earnings: engine.earnings(Window::Month),
            entry_count: engine.entries().len(),
            settings: engine.settings().clone(),
        }
    }

    pub fn week_overtime(&self) -> f64 {
        (self.week_hours - self.settings.overtime_threshold).max(0.0)
    }

    pub fn money(&self, amount: f64) -> String {
        currency(amount, &self.settings)
    }

    /// Plain-text digest used as the backend's system prompt.
    pub fn system_prompt(&self) -> String {
        let s = &self.settings;
        format!(
            "You are TimeVault AI, a helpful assistant for time tracking and payroll.\n\
             You have access to the user's time tracking data:\n\
             - Currently clocked {}\n\
             - Today: {:.1} hours, {}\n\
             - This week: {:.1} hours, {}\n\
             - This month: {:.1} hours, {}\n\
             - Overtime this week: {:.1} hours\n\
             - Hourly rate: {} (OT: {}x)\n\
             - Weekly target: {} hours\n\
             - Total entries: {}\n\n\
             Be concise, friendly, and helpful. If asked about calculations, be precise. \
             If you don't know something, say so.",
            if self.is_working { "IN" } else { "OUT" },
            self.today_hours,
            self.money(self.today_earnings),
            self.week_hours,
            self.money(self.week_earnings),
            self.month_hours,
            self.money(self.month_earnings),
            self.week_overtime(),
            self.money(s.hourly_rate),
            s.overtime_multiplier,
            s.weekly_target,
            self.entry_count,
        )
    }
}
