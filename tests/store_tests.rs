use timevault::core::store::EntryStore;
use timevault::errors::AppError;
use timevault::models::time_entry::TimeEntry;

mod common;
use common::{HOUR_MS, midweek_noon, reopen, vault_at, work};

fn entry(id: i64) -> TimeEntry {
    let start = midweek_noon() + id * HOUR_MS;
    TimeEntry::new(id, start, start + HOUR_MS, 25.0)
}

fn ids(store: &EntryStore) -> Vec<i64> {
    store.entries().iter().map(|e| e.id).collect()
}

#[test]
fn test_reorder_accepts_a_permutation() {
    let mut store = EntryStore::new(vec![entry(1), entry(2), entry(3)]);

    store.reorder(&[3, 1, 2]).unwrap();
    assert_eq!(ids(&store), vec![3, 1, 2]);
}

#[test]
fn test_reorder_rejects_missing_extra_and_duplicate_ids() {
    let mut store = EntryStore::new(vec![entry(1), entry(2), entry(3)]);

    for bad in [&[1, 2][..], &[1, 2, 3, 4], &[1, 1, 2], &[1, 2, 9]] {
        assert!(matches!(
            store.reorder(bad),
            Err(AppError::InvalidReorder(_))
        ));
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }
}

#[test]
fn test_remove_by_id_finds_entries_anywhere() {
    let mut store = EntryStore::new(vec![entry(1), entry(2), entry(3)]);
    store.reorder(&[2, 3, 1]).unwrap();

    assert_eq!(store.remove_by_id(3).map(|e| e.id), Some(3));
    assert_eq!(store.remove_by_id(3), None);
    assert_eq!(ids(&store), vec![2, 1]);
}

#[test]
fn test_next_id_is_unique_and_increasing() {
    let store = EntryStore::new(vec![entry(1), entry(500)]);

    assert_eq!(store.next_id(10_000), 10_000);
    assert_eq!(store.next_id(100), 501);
}

#[test]
fn test_recent_is_most_recent_first() {
    let store = EntryStore::new((1..=7).map(entry).collect());
    let recent: Vec<i64> = store.recent(5).iter().map(|e| e.id).collect();

    assert_eq!(recent, vec![7, 6, 5, 4, 3]);
}

#[test]
fn test_vault_reorder_is_persisted() {
    let (mut vault, store, clock) = vault_at(midweek_noon());
    let a = work(&mut vault, &clock, 1.0);
    let b = work(&mut vault, &clock, 1.0);

    vault.reorder(&[b.id, a.id]).unwrap();

    let again = reopen(&store, &clock);
    let order: Vec<i64> = again.entries().iter().map(|e| e.id).collect();
    assert_eq!(order, vec![b.id, a.id]);
}

#[test]
fn test_order_does_not_change_totals() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    let a = work(&mut vault, &clock, 1.0);
    let b = work(&mut vault, &clock, 2.5);
    let before = vault.dashboard().week;

    vault.reorder(&[b.id, a.id]).unwrap();
    assert_eq!(vault.dashboard().week, before);
}

#[test]
fn test_delete_unknown_entry() {
    let (mut vault, _store, _clock) = vault_at(midweek_noon());

    assert!(matches!(
        vault.delete_entry(42),
        Err(AppError::EntryNotFound(42))
    ));
}

#[test]
fn test_clear_all_resets_everything() {
    let (mut vault, store, clock) = vault_at(midweek_noon());
    vault
        .update_setting(timevault::models::SettingField::HourlyRate, "99")
        .unwrap();
    work(&mut vault, &clock, 1.0);
    vault.clock_in().unwrap();

    vault.clear_all();

    let again = reopen(&store, &clock);
    assert!(again.entries().is_empty());
    assert!(!again.is_working());
    assert_eq!(again.state().settings.hourly_rate, 25.0);
}
