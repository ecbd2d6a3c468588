use serde::{Deserialize, Serialize};

/// Clock state. `Working` carries the only payload of an open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Working { since: i64 },
}

impl SessionState {
    /// Rebuild from the persisted pair of flags. A session counts as open
    /// only when both agree; any other combination is read as idle.
    pub fn from_flags(is_working: bool, session_start: Option<i64>) -> Self {
        match (is_working, session_start) {
            (true, Some(since)) => SessionState::Working { since },
            _ => SessionState::Idle,
        }
    }

    pub fn is_working(&self) -> bool {
        matches!(self, SessionState::Working { .. })
    }

    pub fn session_start(&self) -> Option<i64> {
        match self {
            SessionState::Working { since } => Some(*since),
            SessionState::Idle => None,
        }
    }
}

/// Compensating command for a clock-out: remove the entry it created and
/// re-open the session at its original start.
///
/// Bound to one entry id. Replaced by the next clock-out, dropped on
/// clock-in, and useless after `expires_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UndoClockOut {
    pub entry_id: i64,
    pub prior_session_start: i64,
    pub expires_at: i64,
}

impl UndoClockOut {
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at
    }

    pub fn remaining_ms(&self, now: i64) -> i64 {
        self.expires_at.saturating_sub(now).max(0)
    }
}
