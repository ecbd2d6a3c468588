use crate::core::calculator::engine::{Distribution, EarningsEngine, GoalProgress, WindowTotals};
use crate::core::calculator::window::Window;
use crate::models::session::SessionState;
use crate::models::time_entry::TimeEntry;

/// Number of entries listed under "recent".
pub const RECENT_LIMIT: usize = 5;

/// Everything the status screen shows, computed in one pass over the state.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub session: SessionState,
    pub live_hours: f64,
    pub today: WindowTotals,
    pub week: WindowTotals,
    pub month: WindowTotals,
    pub progress: GoalProgress,
    pub distribution: Option<Distribution>,
    /// Sunday first.
    pub week_breakdown: [f64; 7],
    /// Most recent first.
    pub recent: Vec<TimeEntry>,
}

pub fn build_dashboard(engine: &EarningsEngine<'_>) -> Dashboard {
    let recent = engine
        .entries()
        .iter()
        .rev()
        .take(RECENT_LIMIT)
        .cloned()
        .collect();

    Dashboard {
        session: engine.session(),
        live_hours: engine.live_hours(),
        today: engine.totals(Window::Today),
        week: engine.totals(Window::Week),
        month: engine.totals(Window::Month),
        progress: engine.goal_progress(),
        distribution: engine.distribution(),
        week_breakdown: engine.week_breakdown(),
        recent,
    }
}
