//! Persisted snapshot of the whole application state.
//!
//! The blob is written in full after every mutation. Reading is lenient:
//! each section is merged key-by-key over its built-in defaults, so an old
//! or partial blob still loads and unknown keys are ignored.

use crate::errors::{AppError, AppResult};
use crate::models::ai_config::AiConfig;
use crate::models::chat::AiMemory;
use crate::models::settings::Settings;
use crate::models::time_entry::TimeEntry;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema version written by this build. Blobs without a version field are
/// the legacy browser format (version 1).
pub const SNAPSHOT_VERSION: u32 = 2;
pub const LEGACY_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncData {
    pub email: Option<String>,
    pub pin: Option<String>,
    pub last_sync: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: u32,
    pub settings: Settings,
    pub sync_data: SyncData,
    pub time_entries: Vec<TimeEntry>,
    pub ai_memory: AiMemory,
    pub ai_config: AiConfig,
    pub is_working: bool,
    pub session_start: Option<i64>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            settings: Settings::default(),
            sync_data: SyncData::default(),
            time_entries: Vec::new(),
            ai_memory: AiMemory::default(),
            ai_config: AiConfig::default(),
            is_working: false,
            session_start: None,
        }
    }
}

/// Result of a lenient decode.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub snapshot: Snapshot,
    /// Version found in the blob (before upgrade).
    pub source_version: u32,
    /// Time entries that could not be read and were left out.
    pub dropped_entries: usize,
    /// Human readable notes about every field that fell back to a default.
    pub notes: Vec<String>,
}

impl Snapshot {
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a blob, filling anything missing or unreadable with defaults.
    ///
    /// Fails only when the blob is not JSON or not a JSON object.
    pub fn decode(blob: &str) -> AppResult<Decoded> {
        let root: Value =
            serde_json::from_str(blob).map_err(|e| AppError::ImportFormat(e.to_string()))?;

        let obj = root
            .as_object()
            .ok_or_else(|| AppError::ImportFormat("top-level value is not an object".into()))?;

        let mut notes = Vec::new();

        let source_version = read_version(obj);
        if source_version > SNAPSHOT_VERSION {
            notes.push(format!(
                "snapshot version {source_version} is newer than {SNAPSHOT_VERSION}; unknown fields ignored"
            ));
        }

        let mut settings: Settings = merge_section("settings", obj.get("settings"), &mut notes);
        for field in settings.sanitize() {
            notes.push(format!("settings.{field}: out of range, default used"));
        }

        let sync_data: SyncData = merge_section("syncData", obj.get("syncData"), &mut notes);
        let ai_memory: AiMemory = merge_section("aiMemory", obj.get("aiMemory"), &mut notes);
        let ai_config: AiConfig = merge_section("aiConfig", obj.get("aiConfig"), &mut notes);

        let (time_entries, dropped_entries) = read_entries(obj.get("timeEntries"), &mut notes);

        let mut is_working = obj
            .get("isWorking")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let mut session_start = obj.get("sessionStart").and_then(|v| {
            v.as_i64()
                .or_else(|| v.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
        });

        if is_working != session_start.is_some() {
            notes.push("isWorking and sessionStart disagree; session closed".into());
            is_working = false;
            session_start = None;
        }

        Ok(Decoded {
            snapshot: Snapshot {
                version: SNAPSHOT_VERSION,
                settings,
                sync_data,
                time_entries,
                ai_memory,
                ai_config,
                is_working,
                session_start,
            },
            source_version,
            dropped_entries,
            notes,
        })
    }
}

fn read_version(obj: &Map<String, Value>) -> u32 {
    match obj.get("version") {
        Some(Value::Number(n)) => n
            .as_u64()
            .map(|v| v as u32)
            .or_else(|| n.as_f64().map(|f| f as u32))
            .unwrap_or(LEGACY_VERSION),
        // exports of the browser app wrote "1.0"
        Some(Value::String(s)) => s
            .split('.')
            .next()
            .and_then(|major| major.parse().ok())
            .unwrap_or(LEGACY_VERSION),
        _ => LEGACY_VERSION,
    }
}

fn read_entries(value: Option<&Value>, notes: &mut Vec<String>) -> (Vec<TimeEntry>, usize) {
    let Some(value) = value else {
        return (Vec::new(), 0);
    };

    let Some(items) = value.as_array() else {
        if !value.is_null() {
            notes.push("timeEntries: not an array, no entries loaded".into());
        }
        return (Vec::new(), 0);
    };

    let mut entries = Vec::with_capacity(items.len());
    let mut dropped = 0;

    for item in items {
        match TimeEntry::from_value_lenient(item) {
            Some(entry) => entries.push(entry),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        notes.push(format!("timeEntries: {dropped} unreadable entries dropped"));
    }

    (entries, dropped)
}

/// Merge the keys of `section` over the serialized defaults of `T`, one key
/// at a time. A key whose value does not fit the field's type is skipped.
fn merge_section<T>(name: &str, section: Option<&Value>, notes: &mut Vec<String>) -> T
where
    T: Default + Serialize + DeserializeOwned,
{
    let defaults = T::default();

    let Some(section) = section else {
        return defaults;
    };

    let Some(fields) = section.as_object() else {
        if !section.is_null() {
            notes.push(format!("{name}: not an object, defaults used"));
        }
        return defaults;
    };

    let Ok(Value::Object(mut merged)) = serde_json::to_value(&defaults) else {
        return defaults;
    };

    for (key, value) in fields {
        if !merged.contains_key(key) {
            continue;
        }

        let previous = merged.insert(key.clone(), value.clone());

        if serde_json::from_value::<T>(Value::Object(merged.clone())).is_err() {
            notes.push(format!("{name}.{key}: unreadable value ignored"));
            if let Some(prev) = previous {
                merged.insert(key.clone(), prev);
            }
        }
    }

    serde_json::from_value(Value::Object(merged)).unwrap_or(defaults)
}
