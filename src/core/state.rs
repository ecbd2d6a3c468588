//! The single application-state value owned by the controller.

use crate::core::calculator::EarningsEngine;
use crate::core::store::EntryStore;
use crate::models::ai_config::AiConfig;
use crate::models::chat::AiMemory;
use crate::models::session::{SessionState, UndoClockOut};
use crate::models::settings::Settings;
use crate::models::snapshot::{SNAPSHOT_VERSION, Snapshot, SyncData};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub settings: Settings,
    pub store: EntryStore,
    pub session: SessionState,
    pub sync: SyncData,
    pub ai_memory: AiMemory,
    pub ai_config: AiConfig,
    /// Not part of the snapshot; kept under its own storage key.
    pub pending_undo: Option<UndoClockOut>,
}

impl AppState {
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            settings: snapshot.settings,
            store: EntryStore::new(snapshot.time_entries),
            session: SessionState::from_flags(snapshot.is_working, snapshot.session_start),
            sync: snapshot.sync_data,
            ai_memory: snapshot.ai_memory,
            ai_config: snapshot.ai_config,
            pending_undo: None,
        }
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            settings: self.settings.clone(),
            sync_data: self.sync.clone(),
            time_entries: self.store.entries().to_vec(),
            ai_memory: self.ai_memory.clone(),
            ai_config: self.ai_config.clone(),
            is_working: self.session.is_working(),
            session_start: self.session.session_start(),
        }
    }

    pub fn engine(&self, now: i64) -> EarningsEngine<'_> {
        EarningsEngine::new(self.store.entries(), &self.settings, self.session, now)
    }
}
