use timevault::errors::AppError;
use timevault::models::ai_config::AiConfig;
use timevault::models::settings::{SettingField, Settings, TimeFormat};
use timevault::models::snapshot::{LEGACY_VERSION, SNAPSHOT_VERSION, Snapshot};

mod common;
use common::{HOUR_MS, legacy_blob, local_ms, midweek_noon, vault_at, work};

#[test]
fn test_scenario_e_missing_ai_config_uses_defaults() {
    let blob = r#"{
        "settings": {"hourlyRate": 30},
        "timeEntries": [],
        "isWorking": false,
        "sessionStart": null
    }"#;

    let decoded = Snapshot::decode(blob).unwrap();
    assert_eq!(decoded.snapshot.ai_config, AiConfig::default());
    assert_eq!(decoded.snapshot.settings.hourly_rate, 30.0);
    assert_eq!(decoded.snapshot.settings.overtime_multiplier, 1.5);
}

#[test]
fn test_scenario_e_through_import() {
    let (mut vault, _store, _clock) = vault_at(midweek_noon());
    let blob = r#"{"settings": {"currencySymbol": "€"}, "timeEntries": []}"#;

    let count = vault.import_snapshot(blob).unwrap();

    assert_eq!(count, 0);
    assert_eq!(vault.state().ai_config, AiConfig::default());
    assert_eq!(vault.state().settings.currency_symbol, "€");
}

#[test]
fn test_round_trip_keeps_entries_and_settings() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    vault.update_setting(SettingField::HourlyRate, "31.5").unwrap();
    vault.update_setting(SettingField::TimeFormat, "24").unwrap();
    work(&mut vault, &clock, 1.5);
    work(&mut vault, &clock, 2.0);

    let blob = vault.export_snapshot().unwrap();
    let entries = vault.entries().to_vec();
    let settings = vault.state().settings.clone();

    let (mut other, _s, _c) = vault_at(midweek_noon());
    assert_eq!(other.import_snapshot(&blob).unwrap(), 2);
    assert_eq!(other.entries(), entries.as_slice());
    assert_eq!(other.state().settings, settings);
    assert_eq!(other.state().settings.time_format, TimeFormat::H24);
}

#[test]
fn test_export_does_not_include_the_undo_record() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    work(&mut vault, &clock, 1.0);

    let blob = vault.export_snapshot().unwrap();
    assert!(!blob.contains("expiresAt"));
    assert!(blob.contains(&format!("\"version\": {SNAPSHOT_VERSION}")));
}

#[test]
fn test_import_rejects_non_json_and_keeps_state() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    work(&mut vault, &clock, 1.0);

    for bad in ["not json", "[1, 2, 3]", "42", ""] {
        assert!(matches!(
            vault.import_snapshot(bad),
            Err(AppError::ImportFormat(_))
        ));
    }
    assert_eq!(vault.entries().len(), 1);
}

#[test]
fn test_import_clears_pending_undo() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    work(&mut vault, &clock, 1.0);
    assert!(vault.pending_undo().is_some());

    vault.import_snapshot("{}").unwrap();
    assert!(vault.pending_undo().is_none());
    assert!(vault.undo_clock_out().is_err());
}

#[test]
fn test_legacy_blob_without_version_is_upgraded() {
    let start = local_ms(2025, 6, 9, 9, 0);
    let blob = legacy_blob(&[(start, start + 2 * HOUR_MS, 50.0)]);

    let decoded = Snapshot::decode(&blob).unwrap();
    assert_eq!(decoded.source_version, LEGACY_VERSION);
    assert_eq!(decoded.snapshot.version, SNAPSHOT_VERSION);
    assert_eq!(decoded.snapshot.time_entries.len(), 1);

    let entry = &decoded.snapshot.time_entries[0];
    assert_eq!(entry.date.to_string(), "2025-06-09");
    assert_eq!(entry.earnings, 50.0);
}

#[test]
fn test_string_version_is_read_as_major() {
    let decoded = Snapshot::decode(r#"{"version": "1.0"}"#).unwrap();
    assert_eq!(decoded.source_version, 1);
}

#[test]
fn test_malformed_entries_are_dropped_individually() {
    let start = local_ms(2025, 6, 9, 9, 0);
    let end = start + HOUR_MS;
    let blob = format!(
        r#"{{"timeEntries": [
            {{"id": 1, "startTime": {start}, "endTime": {end}, "earnings": 25}},
            {{"id": 2, "startTime": "yesterday", "endTime": {end}}},
            "garbage",
            {{"startTime": {start}, "endTime": {end}}}
        ]}}"#
    );

    let decoded = Snapshot::decode(&blob).unwrap();
    assert_eq!(decoded.dropped_entries, 2);
    assert_eq!(decoded.snapshot.time_entries.len(), 2);

    // id falls back to the end instant, duration is derived
    let derived = &decoded.snapshot.time_entries[1];
    assert_eq!(derived.id, end);
    assert!((derived.duration - 1.0).abs() < 1e-9);
    assert_eq!(derived.earnings, 0.0);
}

#[test]
fn test_wrong_typed_fields_fall_back_per_key() {
    let blob = r#"{
        "settings": {"hourlyRate": "lots", "weeklyTarget": 32, "unknown": true},
        "aiConfig": "broken",
        "syncData": {"email": "me@example.com"}
    }"#;

    let decoded = Snapshot::decode(blob).unwrap();
    let s = &decoded.snapshot.settings;

    assert_eq!(s.hourly_rate, Settings::default().hourly_rate);
    assert_eq!(s.weekly_target, 32.0);
    assert_eq!(decoded.snapshot.ai_config, AiConfig::default());
    assert_eq!(decoded.snapshot.sync_data.email.as_deref(), Some("me@example.com"));
    assert!(!decoded.notes.is_empty());
}

#[test]
fn test_out_of_range_settings_are_sanitized() {
    let blob = r#"{"settings": {"hourlyRate": -5, "overtimeMultiplier": 0.5, "currencySymbol": " "}}"#;

    let s = Snapshot::decode(blob).unwrap().snapshot.settings;
    assert_eq!(s, Settings::default());
}

#[test]
fn test_inconsistent_session_flags_close_the_session() {
    for blob in [
        r#"{"isWorking": true, "sessionStart": null}"#,
        r#"{"isWorking": false, "sessionStart": 1749636000000}"#,
    ] {
        let snap = Snapshot::decode(blob).unwrap().snapshot;
        assert!(!snap.is_working);
        assert_eq!(snap.session_start, None);
    }

    let snap = Snapshot::decode(r#"{"isWorking": true, "sessionStart": 1749636000000}"#)
        .unwrap()
        .snapshot;
    assert!(snap.is_working);
    assert_eq!(snap.session_start, Some(1_749_636_000_000));
}

#[test]
fn test_corrupt_stored_blob_falls_back_to_defaults() {
    use timevault::core::storage::KeyValueStore;

    let (_vault, store, clock) = vault_at(midweek_noon());
    store.put("timevault_data", "{{{ not json").unwrap();

    let again = common::reopen(&store, &clock);
    assert!(again.load_report().found);
    assert!(again.load_report().fell_back);
    assert!(again.entries().is_empty());
    assert_eq!(again.state().settings, Settings::default());
}

#[test]
fn test_import_accepts_extreme_timestamps() {
    let (mut vault, _store, _clock) = vault_at(midweek_noon());
    let blob = r#"{"timeEntries": [
        {"startTime": -9000000000000000000, "endTime": 9000000000000000000}
    ]}"#;

    let count = vault.import_snapshot(blob).unwrap();
    assert_eq!(count, 1);
    assert!(vault.entries()[0].duration.is_finite());
    assert!(vault.entries()[0].duration > 0.0);
}

#[test]
fn test_clock_out_after_importing_the_largest_id() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    let start = midweek_noon() - 2 * HOUR_MS;
    let blob = format!(
        r#"{{"timeEntries": [{{"id": 9223372036854775807, "startTime": {start}, "endTime": {end}, "duration": 1, "earnings": 25}}]}}"#,
        end = start + HOUR_MS,
    );
    vault.import_snapshot(&blob).unwrap();

    let entry = work(&mut vault, &clock, 1.0);

    assert_eq!(vault.entries().len(), 2);
    assert_ne!(entry.id, i64::MAX);
    assert_eq!(vault.entries()[1].id, entry.id);
}
