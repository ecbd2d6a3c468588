use timevault::core::app::{TimeVault, VaultOptions};
use timevault::core::clock::ManualClock;
use timevault::core::storage::{KeyValueStore, MemoryStore};

mod common;
use common::{midweek_noon, reopen, vault_at, work};

#[test]
fn test_failing_storage_does_not_block_operations() {
    let (mut vault, store, clock) = vault_at(midweek_noon());
    store.set_failing(true);

    let entry = work(&mut vault, &clock, 1.0);

    assert_eq!(vault.entries(), &[entry]);
    assert!(vault.persist_failures() > 0);
    assert!(vault.undo_clock_out().is_ok());
    assert!(vault.is_working());
}

#[test]
fn test_state_is_written_after_every_mutation() {
    let (mut vault, store, clock) = vault_at(midweek_noon());
    assert!(store.is_empty());

    vault.clock_in().unwrap();
    assert!(reopen(&store, &clock).is_working());

    clock.advance_hours(1.0);
    vault.clock_out().unwrap();
    let again = reopen(&store, &clock);
    assert_eq!(again.entries().len(), 1);
    assert!(again.pending_undo().is_some());
    assert_eq!(vault.persist_failures(), 0);
}

#[test]
fn test_unavailable_storage_opens_with_defaults() {
    let store = MemoryStore::new();
    store.set_failing(true);

    let vault = TimeVault::open(store, ManualClock::at(midweek_noon()), VaultOptions::default());

    assert!(vault.load_report().fell_back);
    assert!(!vault.load_report().found);
    assert!(vault.entries().is_empty());
}

#[test]
fn test_custom_storage_key() {
    let store = MemoryStore::new();
    let clock = ManualClock::at(midweek_noon());
    let options = VaultOptions {
        storage_key: "other".into(),
        ..VaultOptions::default()
    };

    let mut vault = TimeVault::open(store.clone(), clock.clone(), options);
    vault.clock_in().unwrap();

    assert!(store.get("other").unwrap().is_some());
    assert!(store.get("timevault_data").unwrap().is_none());
}

#[test]
fn test_undo_key_is_removed_once_used() {
    let (mut vault, store, clock) = vault_at(midweek_noon());
    work(&mut vault, &clock, 1.0);
    let key = vault.options().undo_key();
    assert!(store.get(&key).unwrap().is_some());

    vault.undo_clock_out().unwrap();
    assert!(store.get(&key).unwrap().is_none());
}
