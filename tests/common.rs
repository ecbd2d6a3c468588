#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Local, TimeZone};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use timevault::core::app::{TimeVault, VaultOptions};
use timevault::core::clock::ManualClock;
use timevault::core::storage::MemoryStore;
use timevault::models::time_entry::TimeEntry;

pub const HOUR_MS: i64 = 3_600_000;

pub type TestVault = TimeVault<MemoryStore, ManualClock>;

/// Epoch millis of a local wall-clock time.
pub fn local_ms(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .earliest()
        .expect("valid local time")
        .timestamp_millis()
}

/// Wednesday 2025-06-11 12:00 local. The week runs Sun 8th .. Sat 14th.
pub fn midweek_noon() -> i64 {
    local_ms(2025, 6, 11, 12, 0)
}

/// Fresh vault on an empty memory store. The returned store and clock
/// share state with the ones the vault owns.
pub fn vault_at(now: i64) -> (TestVault, MemoryStore, ManualClock) {
    let store = MemoryStore::new();
    let clock = ManualClock::at(now);
    let vault = TimeVault::open(store.clone(), clock.clone(), VaultOptions::default());
    (vault, store, clock)
}

/// Open a second vault on the same storage, like a new CLI invocation.
pub fn reopen(store: &MemoryStore, clock: &ManualClock) -> TestVault {
    TimeVault::open(store.clone(), clock.clone(), VaultOptions::default())
}

/// Clock in now, advance `hours`, clock out. Returns the new entry.
pub fn work(vault: &mut TestVault, clock: &ManualClock, hours: f64) -> TimeEntry {
    vault.clock_in().expect("clock in");
    clock.advance_hours(hours);
    vault.clock_out().expect("clock out").entry
}

/// Work `hours` starting at the given local time.
pub fn work_at(vault: &mut TestVault, clock: &ManualClock, start: i64, hours: f64) -> TimeEntry {
    clock.set(start);
    work(vault, clock, hours)
}

/// Snapshot blob with the given entries, written the way the browser did.
pub fn legacy_blob(entries: &[(i64, i64, f64)]) -> String {
    let items: Vec<String> = entries
        .iter()
        .map(|(start, end, earnings)| {
            format!(
                r#"{{"id":{end},"startTime":{start},"endTime":{end},"duration":{},"earnings":{earnings}}}"#,
                (*end - *start) as f64 / HOUR_MS as f64
            )
        })
        .collect();
    format!(r#"{{"timeEntries":[{}],"isWorking":false,"sessionStart":null}}"#, items.join(","))
}

// ---------------------------------------------------------------
// CLI helpers
// ---------------------------------------------------------------

/// Isolated home directory plus a database path inside it.
pub struct CliEnv {
    pub home: TempDir,
    pub db: String,
}

impl CliEnv {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("tempdir");
        let db = home
            .path()
            .join("timevault_test.sqlite")
            .to_string_lossy()
            .to_string();
        Self { home, db }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// `timevault --db <db> <args..>` with HOME pointed at the tempdir.
    pub fn tv(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("timevault");
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .env_remove("TIMEVAULT_LOG")
            .args(["--db", &self.db]);
        cmd
    }

    pub fn init(&self) {
        self.tv().args(["--test", "init"]).assert().success();
    }
}
