use timevault::errors::AppError;

mod common;
use common::{HOUR_MS, midweek_noon, reopen, vault_at, work};

#[test]
fn test_clock_in_twice_keeps_the_first_start() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());

    let start = vault.clock_in().unwrap();
    clock.advance_hours(1.0);

    assert_eq!(vault.clock_in(), None);
    assert_eq!(vault.session_start(), Some(start));
}

#[test]
fn test_clock_out_while_idle_is_a_no_op() {
    let (mut vault, _store, _clock) = vault_at(midweek_noon());

    assert!(vault.clock_out().is_none());
    assert!(vault.entries().is_empty());
    assert!(vault.pending_undo().is_none());
}

#[test]
fn test_working_flag_matches_session_start_after_any_sequence() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    let steps = [true, true, false, false, true, false, true, true, false];

    for clock_in in steps {
        clock.advance_secs(600);
        if clock_in {
            vault.clock_in();
        } else {
            vault.clock_out();
        }
        assert_eq!(vault.is_working(), vault.session_start().is_some());

        let snap = vault.state().to_snapshot();
        assert_eq!(snap.is_working, snap.session_start.is_some());
    }
}

#[test]
fn test_scenario_d_undo_restores_the_session() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());

    let start = vault.clock_in().unwrap();
    clock.advance_hours(3.0);
    let entry = vault.clock_out().unwrap().entry;

    clock.advance_secs(5);
    let undone = vault.undo_clock_out().unwrap();

    assert_eq!(undone.id, entry.id);
    assert!(vault.entries().iter().all(|e| e.id != entry.id));
    assert!(vault.is_working());
    assert_eq!(vault.session_start(), Some(start));
    assert!(vault.pending_undo().is_none());
}

#[test]
fn test_undo_is_single_use() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    work(&mut vault, &clock, 1.0);

    vault.undo_clock_out().unwrap();
    vault.clock_out().unwrap();
    vault.undo_clock_out().unwrap();

    // the resumed session was closed and undone again; nothing left to undo
    assert!(matches!(
        vault.undo_clock_out(),
        Err(AppError::UndoUnavailable(_))
    ));
}

#[test]
fn test_undo_after_expiry_is_rejected_and_cleared() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    let entry = work(&mut vault, &clock, 1.0);

    clock.advance_secs(11);

    assert!(matches!(
        vault.undo_clock_out(),
        Err(AppError::UndoUnavailable(_))
    ));
    assert!(vault.pending_undo().is_none());
    assert_eq!(vault.entries()[0].id, entry.id);
    assert!(!vault.is_working());
}

#[test]
fn test_undo_at_the_last_millisecond_still_works() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    work(&mut vault, &clock, 1.0);

    clock.advance_secs(10);
    assert!(vault.undo_clock_out().is_ok());
}

#[test]
fn test_clock_in_invalidates_pending_undo() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    let entry = work(&mut vault, &clock, 1.0);

    clock.advance_secs(1);
    vault.clock_in().unwrap();
    assert!(vault.pending_undo().is_none());

    clock.advance_secs(1);
    assert!(vault.undo_clock_out().is_err());
    assert!(vault.entries().iter().any(|e| e.id == entry.id));
}

#[test]
fn test_new_clock_out_replaces_the_undo_target() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    let first = work(&mut vault, &clock, 1.0);

    // straight back to work inside the first undo window
    let second = work(&mut vault, &clock, 0.001);
    assert_eq!(vault.pending_undo().unwrap().entry_id, second.id);

    let undone = vault.undo_clock_out().unwrap();
    assert_eq!(undone.id, second.id);
    assert!(vault.entries().iter().any(|e| e.id == first.id));
}

#[test]
fn test_undo_fails_when_the_entry_was_deleted() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    let entry = work(&mut vault, &clock, 1.0);

    vault.delete_entry(entry.id).unwrap();
    assert!(vault.pending_undo().is_none());
    assert!(vault.undo_clock_out().is_err());
    assert!(!vault.is_working());
}

#[test]
fn test_undo_window_survives_reopening() {
    let (mut vault, store, clock) = vault_at(midweek_noon());
    let start = vault.clock_in().unwrap();
    clock.advance_ms(2 * HOUR_MS);
    vault.clock_out().unwrap();
    drop(vault);

    clock.advance_secs(3);
    let mut again = reopen(&store, &clock);
    assert!(again.pending_undo().is_some());

    again.undo_clock_out().unwrap();
    assert_eq!(again.session_start(), Some(start));

    let third = reopen(&store, &clock);
    assert!(third.is_working());
    assert!(third.entries().is_empty());
    assert!(third.pending_undo().is_none());
}

#[test]
fn test_open_session_survives_reopening() {
    let (mut vault, store, clock) = vault_at(midweek_noon());
    let start = vault.clock_in().unwrap();
    drop(vault);

    clock.advance_hours(2.0);
    let mut again = reopen(&store, &clock);
    assert_eq!(again.session_start(), Some(start));

    let receipt = again.clock_out().unwrap();
    assert!((receipt.entry.duration - 2.0).abs() < 1e-9);
}

#[test]
fn test_backward_clock_yields_negative_duration() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    vault.clock_in().unwrap();
    clock.advance_ms(-HOUR_MS);

    let entry = vault.clock_out().unwrap().entry;
    assert!((entry.duration + 1.0).abs() < 1e-9);
    assert!(!vault.is_working());
}

#[test]
fn test_huge_undo_window_does_not_overflow() {
    let store = timevault::core::storage::MemoryStore::new();
    let clock = timevault::core::clock::ManualClock::at(midweek_noon());
    let options = timevault::core::app::VaultOptions {
        undo_window_ms: i64::MAX,
        ..Default::default()
    };
    let mut vault = timevault::core::app::TimeVault::open(store, clock.clone(), options);

    vault.clock_in().unwrap();
    clock.advance_hours(1.0);
    let receipt = vault.clock_out().unwrap();

    assert_eq!(vault.pending_undo().map(|u| u.expires_at), Some(i64::MAX));
    assert_eq!(vault.undo_clock_out().unwrap().id, receipt.entry.id);
}
