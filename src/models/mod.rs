pub mod ai_config;
pub mod chat;
pub mod session;
pub mod settings;
pub mod snapshot;
pub mod time_entry;

pub use ai_config::{AiConfig, ConnectionStatus};
pub use chat::{AiMemory, ChatMessage, ChatRole};
pub use session::{SessionState, UndoClockOut};
pub use settings::{SettingField, Settings, TimeFormat};
pub use snapshot::{Decoded, Snapshot, SyncData};
pub use time_entry::TimeEntry;
