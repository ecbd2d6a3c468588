use timevault::core::suggestions::{MAX_SUGGESTIONS, SuggestionAction};
use timevault::core::sync::{sync_code, validate_email, validate_pin};

mod common;
use common::{local_ms, vault_at, work};

#[test]
fn test_wednesday_morning_idle() {
    let (mut vault, _store, _clock) = vault_at(local_ms(2025, 6, 11, 8, 0));

    let list = vault.suggestions();
    let titles: Vec<&str> = list.iter().map(|s| s.title).collect();

    assert_eq!(titles, vec!["Good Morning!", "Weekly Goal"]);
    assert_eq!(list[0].action, SuggestionAction::ClockIn);
    assert!(list[1].text.contains("0% of 40h target"));
    assert!(vault.state().ai_config.last_suggestion_update.is_some());
}

#[test]
fn test_never_more_than_three() {
    // Thursday 17:00, long session, close to overtime, plenty of history
    let (mut vault, _store, clock) = vault_at(local_ms(2025, 6, 12, 6, 0));
    vault
        .update_setting(timevault::models::SettingField::OvertimeThreshold, "12")
        .unwrap();
    for _ in 0..5 {
        work(&mut vault, &clock, 0.1);
    }
    clock.set(local_ms(2025, 6, 12, 12, 0));
    vault.clock_in().unwrap();
    clock.set(local_ms(2025, 6, 12, 17, 0));

    let list = vault.suggestions();
    assert_eq!(list.len(), MAX_SUGGESTIONS);
    assert_eq!(list[0].title, "End of Day");
}

#[test]
fn test_disabled_suggestions_are_empty() {
    let (mut vault, _store, _clock) = vault_at(local_ms(2025, 6, 11, 8, 0));
    vault
        .import_snapshot(r#"{"aiConfig": {"suggestionsEnabled": false}}"#)
        .unwrap();

    assert!(vault.suggestions().is_empty());
}

#[test]
fn test_sync_code() {
    assert_eq!(sync_code("a"), "2P");
    assert_eq!(sync_code(""), "0");

    let code = sync_code("someone@example.com");
    assert!(!code.is_empty() && code.len() <= 8);
    assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    assert_eq!(code, sync_code("someone@example.com"));
}

#[test]
fn test_email_and_pin_validation() {
    assert!(validate_email("me@example.com").is_ok());
    assert!(validate_email("me@example").is_err());
    assert!(validate_email("me @example.com").is_err());

    assert!(validate_pin("1234").is_ok());
    assert!(validate_pin("12345678").is_ok());
    assert!(validate_pin("123").is_err());
    assert!(validate_pin("123456789").is_err());
    assert!(validate_pin("12a4").is_err());
}

#[test]
fn test_sync_updates_state() {
    let (mut vault, _store, _clock) = vault_at(local_ms(2025, 6, 11, 8, 0));

    let code = vault.sync_with_email("  me@example.com ").unwrap();
    assert_eq!(code, sync_code("me@example.com"));
    assert_eq!(vault.state().sync.email.as_deref(), Some("me@example.com"));
    assert!(vault.state().sync.last_sync.is_some());

    assert!(vault.sync_with_pin("12").is_err());
    assert_eq!(vault.state().sync.pin, None);
    vault.sync_with_pin("4321").unwrap();
    assert_eq!(vault.state().sync.pin.as_deref(), Some("4321"));
}
