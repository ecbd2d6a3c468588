use predicates::str::contains;
use std::fs;

mod common;
use common::CliEnv;

#[test]
fn test_init_creates_database_and_logs() {
    let env = CliEnv::new();
    env.tv()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(fs::metadata(&env.db).is_ok());

    env.tv()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"));
}

#[test]
fn test_db_info_lists_stored_keys() {
    let env = CliEnv::new();
    env.init();
    env.tv().arg("in").assert().success();

    env.tv()
        .args(["db", "--info"])
        .assert()
        .success()
        .stdout(contains("Stored keys"))
        .stdout(contains("timevault_data"));
}

#[test]
fn test_clock_cycle_with_undo() {
    let env = CliEnv::new();
    env.init();

    env.tv()
        .arg("in")
        .assert()
        .success()
        .stdout(contains("Clocked in at"));
    env.tv()
        .arg("in")
        .assert()
        .success()
        .stdout(contains("Already clocked in since"));

    env.tv()
        .arg("out")
        .assert()
        .success()
        .stdout(contains("Clocked out:"))
        .stdout(contains("timevault undo"));

    env.tv()
        .arg("undo")
        .assert()
        .success()
        .stdout(contains("Clock-out undone"));

    env.tv()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Clocked in"));

    env.tv()
        .args(["timecard", "--filter", "all"])
        .assert()
        .success();
}

#[test]
fn test_undo_without_clock_out_fails() {
    let env = CliEnv::new();
    env.init();

    env.tv()
        .arg("undo")
        .assert()
        .failure()
        .stderr(contains("nothing to undo"));
}

#[test]
fn test_out_while_idle_is_a_warning() {
    let env = CliEnv::new();
    env.init();

    env.tv()
        .arg("out")
        .assert()
        .success()
        .stdout(contains("not currently clocked in"));
}

#[test]
fn test_settings_update_and_rejection() {
    let env = CliEnv::new();
    env.init();

    env.tv()
        .args(["settings", "--rate", "30", "--currency", "€"])
        .assert()
        .success()
        .stdout(contains("hourlyRate set to 30.00"));

    env.tv()
        .args(["settings", "--rate", "abc"])
        .assert()
        .success()
        .stdout(contains("keeping the previous value"));

    env.tv()
        .arg("settings")
        .assert()
        .success()
        .stdout(contains("30.00"))
        .stdout(contains("€"));
}

#[test]
fn test_sync_email_and_bad_pin() {
    let env = CliEnv::new();
    env.init();

    env.tv()
        .args(["sync", "--email", "a@b.co"])
        .assert()
        .success()
        .stdout(contains("Your sync code"));

    env.tv()
        .args(["sync", "--pin", "12"])
        .assert()
        .failure()
        .stderr(contains("PIN must be 4-8 digits"));
}

#[test]
fn test_views_reject_unknown_periods() {
    let env = CliEnv::new();
    env.init();

    env.tv()
        .args(["timecard", "--filter", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("unknown timecard filter"));

    env.tv()
        .args(["payroll", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("Gross pay"));

    env.tv()
        .args(["payroll", "--period", "sometime"])
        .assert()
        .failure();

    env.tv().arg("report").assert().success();
}

#[test]
fn test_export_and_import_json() {
    let env = CliEnv::new();
    env.init();
    env.tv().args(["settings", "--rate", "42"]).assert().success();

    let file = env.path("vault.json");
    let file = file.to_string_lossy().to_string();

    env.tv()
        .args(["export", "--format", "json", "--file", &file])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let blob = fs::read_to_string(&file).unwrap();
    assert!(blob.contains("\"hourlyRate\": 42.0"));

    let other = CliEnv::new();
    other.init();
    other
        .tv()
        .args(["import", "--file", &file])
        .assert()
        .success()
        .stdout(contains("Imported 0 time entries"));
    other
        .tv()
        .arg("settings")
        .assert()
        .success()
        .stdout(contains("42.00"));
}

#[test]
fn test_import_rejects_garbage() {
    let env = CliEnv::new();
    env.init();
    let file = env.path("garbage.json");
    fs::write(&file, "this is not json").unwrap();

    env.tv()
        .args(["import", "--file", &file.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("Invalid backup file format"));
}

#[test]
fn test_export_requires_absolute_path() {
    let env = CliEnv::new();
    env.init();

    env.tv()
        .args(["export", "--format", "json", "--file", "relative.json"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_backup_compressed() {
    let env = CliEnv::new();
    env.init();
    let dest = env.path("backups/copy.sqlite");

    env.tv()
        .args(["backup", "--file", &dest.to_string_lossy(), "--compress"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let zipped = env.path("backups/copy.zip");
    assert!(zipped.exists());
    assert!(!dest.exists());
}

#[test]
fn test_ask_offline() {
    let env = CliEnv::new();
    env.init();

    env.tv()
        .args(["ask", "--offline", "hello", "there"])
        .assert()
        .success()
        .stdout(contains("How can I help"))
        .stdout(contains("local rules"));
}

#[test]
fn test_clear_needs_confirmation() {
    let env = CliEnv::new();
    env.init();
    env.tv().arg("in").assert().success();

    env.tv()
        .arg("clear")
        .assert()
        .success()
        .stdout(contains("Re-run with --yes"));
    env.tv()
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("All data cleared"));
    env.tv()
        .arg("out")
        .assert()
        .success()
        .stdout(contains("not currently clocked in"));
}

#[test]
fn test_entry_commands_report_unknown_ids() {
    let env = CliEnv::new();
    env.init();

    env.tv()
        .args(["del", "123", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No time entry with id 123"));

    env.tv()
        .args(["reorder", "1", "2"])
        .assert()
        .failure()
        .stderr(contains("Reorder rejected"));
}

#[test]
fn test_suggest_runs() {
    let env = CliEnv::new();
    env.init();
    env.tv().arg("suggest").assert().success();
}
