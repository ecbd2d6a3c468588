//! Clock-in / clock-out state machine with a time-boxed undo.

use tracing::debug;

use crate::core::calculator::OvertimeSplit;
use crate::core::state::AppState;
use crate::errors::{AppError, AppResult};
use crate::models::session::{SessionState, UndoClockOut};
use crate::models::time_entry::TimeEntry;

/// What a completed clock-out produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockOutReceipt {
    pub entry: TimeEntry,
    pub split: OvertimeSplit,
    pub prior_weekly_hours: f64,
    pub undo: UndoClockOut,
}

pub struct SessionLogic;

impl SessionLogic {
    /// `Idle → Working`. Returns the session start, or `None` when already
    /// working. Any pending undo is dropped.
    pub fn clock_in(state: &mut AppState, now: i64) -> Option<i64> {
        if state.session.is_working() {
            return None;
        }

        state.session = SessionState::Working { since: now };
        state.pending_undo = None;
        debug!(start = now, "clock in");
        Some(now)
    }

    /// `Working → Idle`. Prices the session against the closed hours that
    /// precede it in its week, appends the entry and arms a fresh undo that
    /// replaces any previous one. `None` when not working.
    pub fn clock_out(state: &mut AppState, now: i64, undo_window_ms: i64) -> Option<ClockOutReceipt> {
        let SessionState::Working { since } = state.session else {
            return None;
        };

        let engine = state.engine(now);
        let prior = engine.prior_weekly_hours(since);
        let (split, pay) = engine.price_session(since, now);

        let id = state.store.next_id(now);
        let entry = TimeEntry::new(id, since, now, pay);

        state.store.append(entry.clone());
        state.session = SessionState::Idle;

        let undo = UndoClockOut {
            entry_id: id,
            prior_session_start: since,
            expires_at: now.saturating_add(undo_window_ms),
        };
        state.pending_undo = Some(undo);

        debug!(id, hours = entry.duration, pay, prior, "clock out");

        Some(ClockOutReceipt {
            entry,
            split,
            prior_weekly_hours: prior,
            undo,
        })
    }

    /// Compensate the last clock-out: remove its entry by id and re-open the
    /// session at the original start. Usable once, before expiry.
    pub fn undo_clock_out(state: &mut AppState, now: i64) -> AppResult<TimeEntry> {
        let Some(undo) = state.pending_undo else {
            return Err(AppError::UndoUnavailable(
                "nothing to undo".into(),
            ));
        };

        if undo.is_expired(now) {
            state.pending_undo = None;
            return Err(AppError::UndoUnavailable(
                "the undo window has expired".into(),
            ));
        }

        if state.session.is_working() {
            return Err(AppError::UndoUnavailable(
                "a session is already open".into(),
            ));
        }

        let Some(entry) = state.store.remove_by_id(undo.entry_id) else {
            state.pending_undo = None;
            return Err(AppError::UndoUnavailable(format!(
                "entry {} no longer exists",
                undo.entry_id
            )));
        };

        state.session = SessionState::Working {
            since: undo.prior_session_start,
        };
        state.pending_undo = None;
        debug!(id = entry.id, "clock out undone");

        Ok(entry)
    }
}
