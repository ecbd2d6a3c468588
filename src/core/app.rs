//! Application controller: owns the state, the storage and the clock, and
//! saves a full snapshot after every mutation.

use tracing::{debug, info, warn};

use crate::assistant::{
    AssistantAction, AssistantContext, AssistantReply, ChatBackend, ReplySource, Responder,
    RuleBasedResponder,
};
use crate::core::calculator::{
    Dashboard, EarningsEngine, PayrollPeriod, PayrollSummary, Report, Timecard, TimecardFilter,
    build_dashboard, build_report, build_timecard, summarize,
};
use crate::core::clock::Clock;
use crate::core::session::{ClockOutReceipt, SessionLogic};
use crate::core::state::AppState;
use crate::core::storage::KeyValueStore;
use crate::core::suggestions::{self, Suggestion};
use crate::core::sync;
use crate::errors::{AppError, AppResult};
use crate::models::chat::ChatRole;
use crate::models::session::UndoClockOut;
use crate::models::settings::SettingField;
use crate::models::snapshot::Snapshot;
use crate::models::time_entry::TimeEntry;

pub const DEFAULT_STORAGE_KEY: &str = "timevault_data";
pub const DEFAULT_UNDO_WINDOW_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultOptions {
    pub storage_key: String,
    pub undo_window_ms: i64,
}

impl Default for VaultOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            undo_window_ms: DEFAULT_UNDO_WINDOW_SECS as i64 * 1000,
        }
    }
}

impl VaultOptions {
    pub fn undo_key(&self) -> String {
        format!("{}_undo", self.storage_key)
    }
}

/// What happened while reading the persisted snapshot at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// A blob was present under the storage key.
    pub found: bool,
    pub source_version: Option<u32>,
    pub dropped_entries: usize,
    pub notes: Vec<String>,
    /// Storage or blob unusable; running on defaults.
    pub fell_back: bool,
}

pub struct TimeVault<S: KeyValueStore, C: Clock> {
    state: AppState,
    storage: S,
    clock: C,
    options: VaultOptions,
    responder: RuleBasedResponder,
    load_report: LoadReport,
    persist_failures: usize,
}

impl<S: KeyValueStore, C: Clock> TimeVault<S, C> {
    /// Load state from `storage`. Never fails: any storage or format problem
    /// is logged and the vault starts from defaults.
    pub fn open(storage: S, clock: C, options: VaultOptions) -> Self {
        let mut report = LoadReport::default();

        let state = match storage.get(&options.storage_key) {
            Ok(Some(blob)) => {
                report.found = true;
                match Snapshot::decode(&blob) {
                    Ok(decoded) => {
                        for note in &decoded.notes {
                            warn!(note = %note, "snapshot field fell back to default");
                        }
                        report.source_version = Some(decoded.source_version);
                        report.dropped_entries = decoded.dropped_entries;
                        report.notes = decoded.notes;
                        AppState::from_snapshot(decoded.snapshot)
                    }
                    Err(e) => {
                        warn!(error = %e, "stored snapshot unreadable; starting from defaults");
                        report.fell_back = true;
                        report.notes.push(e.to_string());
                        AppState::default()
                    }
                }
            }
            Ok(None) => AppState::default(),
            Err(e) => {
                warn!(error = %e, "storage unavailable; starting from defaults");
                report.fell_back = true;
                report.notes.push(e.to_string());
                AppState::default()
            }
        };

        let mut vault = Self {
            state,
            storage,
            clock,
            options,
            responder: RuleBasedResponder,
            load_report: report,
            persist_failures: 0,
        };
        vault.state.pending_undo = vault.load_undo();
        vault
    }

    fn load_undo(&self) -> Option<UndoClockOut> {
        let raw = self.storage.get(&self.options.undo_key()).ok().flatten()?;
        match serde_json::from_str::<UndoClockOut>(&raw) {
            Ok(undo) => Some(undo),
            Err(e) => {
                debug!(error = %e, "ignoring unreadable undo record");
                None
            }
        }
    }

    /// Write the full snapshot and the pending undo. Failures are logged and
    /// counted; the in-memory state stays authoritative.
    fn persist(&mut self) {
        let saved = self
            .state
            .to_snapshot()
            .to_json()
            .and_then(|blob| self.storage.put(&self.options.storage_key, &blob));

        if let Err(e) = saved {
            warn!(error = %e, "snapshot not saved; continuing in memory");
            self.persist_failures += 1;
        }

        let undo_key = self.options.undo_key();
        let undo_saved = match self.state.pending_undo {
            Some(undo) => serde_json::to_string(&undo)
                .map_err(AppError::from)
                .and_then(|raw| self.storage.put(&undo_key, &raw)),
            None => self.storage.remove(&undo_key),
        };

        if let Err(e) = undo_saved {
            warn!(error = %e, "undo record not saved");
            self.persist_failures += 1;
        }
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn entries(&self) -> &[TimeEntry] {
        self.state.store.entries()
    }

    pub fn is_working(&self) -> bool {
        self.state.session.is_working()
    }

    pub fn session_start(&self) -> Option<i64> {
        self.state.session.session_start()
    }

    pub fn pending_undo(&self) -> Option<UndoClockOut> {
        self.state.pending_undo
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    /// Number of saves that failed since the vault was opened.
    pub fn persist_failures(&self) -> usize {
        self.persist_failures
    }

    pub fn options(&self) -> &VaultOptions {
        &self.options
    }

    pub fn now(&self) -> i64 {
        self.clock.now_ms()
    }

    pub fn engine(&self) -> EarningsEngine<'_> {
        self.state.engine(self.clock.now_ms())
    }

    // ---------------------------------------------------------------
    // Session
    // ---------------------------------------------------------------

    pub fn clock_in(&mut self) -> Option<i64> {
        let started = SessionLogic::clock_in(&mut self.state, self.clock.now_ms());
        if started.is_some() {
            self.persist();
        }
        started
    }

    pub fn clock_out(&mut self) -> Option<ClockOutReceipt> {
        let receipt = SessionLogic::clock_out(
            &mut self.state,
            self.clock.now_ms(),
            self.options.undo_window_ms,
        );
        if let Some(r) = &receipt {
            info!(id = r.entry.id, earnings = r.entry.earnings, "session closed");
            self.persist();
        }
        receipt
    }

    pub fn undo_clock_out(&mut self) -> AppResult<TimeEntry> {
        let result = SessionLogic::undo_clock_out(&mut self.state, self.clock.now_ms());
        // a failed attempt may still have dropped a stale undo record
        self.persist();
        result
    }

    // ---------------------------------------------------------------
    // Entries
    // ---------------------------------------------------------------

    pub fn delete_entry(&mut self, id: i64) -> AppResult<TimeEntry> {
        let removed = self
            .state
            .store
            .remove_by_id(id)
            .ok_or(AppError::EntryNotFound(id))?;

        if self.state.pending_undo.is_some_and(|u| u.entry_id == id) {
            self.state.pending_undo = None;
        }

        self.persist();
        Ok(removed)
    }

    pub fn reorder(&mut self, ids: &[i64]) -> AppResult<()> {
        self.state.store.reorder(ids)?;
        self.persist();
        Ok(())
    }

    /// Reset everything to defaults.
    pub fn clear_all(&mut self) {
        self.state = AppState::default();
        self.persist();
    }

    // ---------------------------------------------------------------
    // Settings and sync
    // ---------------------------------------------------------------

    /// Apply one setting. On a validation error the previous value is kept.
    pub fn update_setting(&mut self, field: SettingField, raw: &str) -> AppResult<()> {
        if let Err(e) = self.state.settings.set(field, raw) {
            warn!(field = field.key(), value = raw, error = %e, "setting rejected; keeping previous value");
            return Err(e);
        }
        self.persist();
        Ok(())
    }

    /// Store the sync address and return the derived sync code.
    pub fn sync_with_email(&mut self, email: &str) -> AppResult<String> {
        let email = email.trim();
        sync::validate_email(email)?;

        self.state.sync.email = Some(email.to_string());
        self.state.sync.last_sync = Some(self.clock.now_ms());
        self.persist();

        Ok(sync::sync_code(email))
    }

    pub fn sync_with_pin(&mut self, pin: &str) -> AppResult<()> {
        let pin = pin.trim();
        sync::validate_pin(pin)?;

        self.state.sync.pin = Some(pin.to_string());
        self.state.sync.last_sync = Some(self.clock.now_ms());
        self.persist();
        Ok(())
    }

    // ---------------------------------------------------------------
    // Export / import
    // ---------------------------------------------------------------

    pub fn export_snapshot(&self) -> AppResult<String> {
        self.state.to_snapshot().to_json_pretty()
    }

    /// Replace the whole state with the decoded blob. An unparseable blob
    /// leaves the state untouched.
    pub fn import_snapshot(&mut self, blob: &str) -> AppResult<usize> {
        let decoded = Snapshot::decode(blob)?;

        for note in &decoded.notes {
            warn!(note = %note, "imported field fell back to default");
        }

        self.state = AppState::from_snapshot(decoded.snapshot);
        self.persist();

        Ok(self.state.store.len())
    }

    // ---------------------------------------------------------------
    // Views
    // ---------------------------------------------------------------

    pub fn dashboard(&self) -> Dashboard {
        build_dashboard(&self.engine())
    }

    pub fn timecard(&self, filter: TimecardFilter) -> Timecard {
        build_timecard(self.entries(), filter, self.clock.now_ms())
    }

    pub fn payroll(&self, period: PayrollPeriod) -> PayrollSummary {
        summarize(&self.engine(), period)
    }

    pub fn report(&self) -> Report {
        build_report(&self.engine())
    }

    /// Current suggestions; stamps the refresh time when enabled.
    pub fn suggestions(&mut self) -> Vec<Suggestion> {
        if !self.state.ai_config.suggestions_enabled {
            return Vec::new();
        }

        let list = suggestions::generate(&self.engine());
        self.state.ai_config.last_suggestion_update = Some(self.clock.now_ms());
        self.persist();
        list
    }

    // ---------------------------------------------------------------
    // Assistant
    // ---------------------------------------------------------------

    /// Answer a chat message. The backend is tried when given and enabled;
    /// any failure falls back to the rule-based responder.
    pub fn ask(&mut self, message: &str, backend: Option<&dyn ChatBackend>) -> AssistantReply {
        self.state
            .ai_memory
            .record(ChatRole::User, message, self.clock.now_ms());

        let remote = match backend {
            Some(b) if self.state.ai_config.ollama_enabled => self.ask_backend(b, message),
            _ => None,
        };

        let reply = match remote {
            Some(reply) => reply,
            None => self.ask_rules(message),
        };

        self.state
            .ai_memory
            .record(ChatRole::Ai, &reply.text, self.clock.now_ms());
        self.persist();

        reply
    }

    fn ask_backend(&mut self, backend: &dyn ChatBackend, message: &str) -> Option<AssistantReply> {
        let status = backend.probe();
        self.state.ai_config.connection_status = status;

        if !status.is_connected() {
            return None;
        }

        let system = AssistantContext::from_engine(&self.engine()).system_prompt();
        match backend.generate(status, message, &system) {
            Ok(text) => Some(AssistantReply {
                text,
                source: ReplySource::Backend(status),
                action: None,
            }),
            Err(e) => {
                debug!(error = %e, "assistant backend failed; using rules");
                None
            }
        }
    }

    fn ask_rules(&mut self, message: &str) -> AssistantReply {
        let ctx = AssistantContext::from_engine(&self.engine());
        let reply = self.responder.respond(message, &ctx);

        let mut text = reply.text;
        if let Some(action) = reply.action
            && let Err(e) = self.apply_action(action)
        {
            text = format!("⚠️ {e}");
        }

        AssistantReply {
            text,
            source: ReplySource::Rules,
            action: reply.action,
        }
    }

    fn apply_action(&mut self, action: AssistantAction) -> AppResult<()> {
        match action {
            AssistantAction::ClockIn => {
                self.clock_in();
            }
            AssistantAction::ClockOut => {
                self.clock_out();
            }
            AssistantAction::SetRate(rate) => {
                self.update_setting(SettingField::HourlyRate, &rate.to_string())?;
            }
        }
        Ok(())
    }
}
