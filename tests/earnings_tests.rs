use timevault::core::calculator::{
    EarningsEngine, OvertimeSplit, Window, calculate_pay, split_hours,
};
use timevault::models::session::SessionState;
use timevault::models::settings::{SettingField, Settings};
use timevault::models::time_entry::TimeEntry;

mod common;
use common::{HOUR_MS, local_ms, midweek_noon, vault_at, work, work_at};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn settings(rate: f64, multiplier: f64, threshold: f64) -> Settings {
    Settings {
        hourly_rate: rate,
        overtime_multiplier: multiplier,
        overtime_threshold: threshold,
        ..Settings::default()
    }
}

#[test]
fn test_split_conserves_hours_and_prices_both_parts() {
    let s = settings(20.0, 1.5, 40.0);
    let priors = [0.0, 10.0, 36.5, 39.9, 40.0, 41.0, 80.0];
    let hours = [0.0, 0.25, 1.0, 3.5, 8.0, 12.0];

    for prior in priors {
        for h in hours {
            let split = split_hours(prior, h, s.overtime_threshold);
            assert!(split.regular >= 0.0 && split.overtime >= 0.0);
            assert_close(split.regular + split.overtime, h);
            assert_close(
                calculate_pay(prior, h, &s),
                split.regular * 20.0 + split.overtime * 20.0 * 1.5,
            );

            if prior + h <= 40.0 {
                assert_eq!(split.overtime, 0.0);
            }
            if prior >= 40.0 {
                assert_eq!(split.regular, 0.0);
                assert_close(split.overtime, h);
            }
        }
    }
}

#[test]
fn test_split_exactly_at_threshold_is_regular() {
    let split = split_hours(36.0, 4.0, 40.0);
    assert_eq!(
        split,
        OvertimeSplit {
            regular: 4.0,
            overtime: 0.0
        }
    );
}

#[test]
fn test_scenario_a_pure_calculation() {
    let s = settings(20.0, 1.5, 40.0);
    let split = split_hours(38.0, 4.0, 40.0);

    assert_close(split.regular, 2.0);
    assert_close(split.overtime, 2.0);
    assert_close(split.regular_pay(&s), 40.0);
    assert_close(split.overtime_pay(&s), 60.0);
    assert_close(split.pay(&s), 100.0);
}

#[test]
fn test_scenario_a_through_clock_out() {
    let (mut vault, _store, clock) = vault_at(local_ms(2025, 6, 9, 8, 0));
    vault.update_setting(SettingField::HourlyRate, "20").unwrap();
    vault.update_setting(SettingField::OvertimeMultiplier, "1.5").unwrap();
    vault.update_setting(SettingField::OvertimeThreshold, "40").unwrap();

    // 38 hours Monday to Thursday
    work_at(&mut vault, &clock, local_ms(2025, 6, 9, 8, 0), 10.0);
    work_at(&mut vault, &clock, local_ms(2025, 6, 10, 8, 0), 10.0);
    work_at(&mut vault, &clock, local_ms(2025, 6, 11, 8, 0), 10.0);
    work_at(&mut vault, &clock, local_ms(2025, 6, 12, 8, 0), 8.0);

    clock.set(local_ms(2025, 6, 13, 8, 0));
    vault.clock_in().unwrap();
    clock.advance_hours(4.0);
    let receipt = vault.clock_out().unwrap();

    assert_close(receipt.prior_weekly_hours, 38.0);
    assert_close(receipt.split.regular, 2.0);
    assert_close(receipt.split.overtime, 2.0);
    assert_close(receipt.entry.earnings, 100.0);
    assert_close(receipt.entry.duration, 4.0);
}

#[test]
fn test_scenario_b_empty_store_reports_zero() {
    let (vault, _store, _clock) = vault_at(midweek_noon());
    let engine = vault.engine();

    assert_eq!(engine.earnings(Window::Week), 0.0);
    assert_eq!(engine.hours(Window::Week), 0.0);
    assert_eq!(
        timevault::utils::formatting::currency(engine.earnings(Window::Week), engine.settings()),
        "$0.00"
    );
}

#[test]
fn test_empty_totals_are_positive_zero() {
    let (vault, _store, _clock) = vault_at(midweek_noon());
    let engine = vault.engine();

    assert!(!engine.hours(Window::Week).is_sign_negative());
    assert!(!engine.earnings(Window::Month).is_sign_negative());
    assert!(!engine.prior_weekly_hours(midweek_noon()).is_sign_negative());

    let card = vault.timecard(timevault::core::calculator::TimecardFilter::All);
    assert!(!card.total_hours.is_sign_negative());
    assert!(!card.total_earnings.is_sign_negative());

    let report = vault.report();
    assert!(!report.total_hours.is_sign_negative());
    assert!(!report.total_earnings.is_sign_negative());
}

#[test]
fn test_currency_prints_negative_zero_as_zero() {
    let settings = Settings::default();
    assert_eq!(timevault::utils::formatting::currency(-0.0, &settings), "$0.00");
    assert_eq!(timevault::utils::formatting::currency(-2.5, &settings), "-$2.50");
}

#[test]
fn test_scenario_c_two_hour_session_at_default_rate() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());

    let entry = work(&mut vault, &clock, 2.0);

    assert_eq!(vault.entries().len(), 1);
    assert_close(entry.duration, 2.0);
    assert_close(entry.earnings, 50.0);
    assert!(!vault.is_working());
}

#[test]
fn test_earnings_are_frozen_at_clock_out() {
    let (mut vault, _store, clock) = vault_at(local_ms(2025, 6, 9, 9, 0));

    let first = work(&mut vault, &clock, 2.0);
    assert_close(first.earnings, 50.0);

    vault.update_setting(SettingField::HourlyRate, "100").unwrap();
    vault.update_setting(SettingField::OvertimeThreshold, "0").unwrap();

    assert_close(vault.entries()[0].earnings, 50.0);
    assert_close(vault.engine().earnings(Window::Week), 50.0);

    clock.set(local_ms(2025, 6, 10, 9, 0));
    let second = work(&mut vault, &clock, 1.0);
    // threshold 0: all overtime at the new rate
    assert_close(second.earnings, 150.0);
    assert_close(vault.engine().earnings(Window::Week), 200.0);
}

#[test]
fn test_prior_hours_reset_at_sunday_midnight() {
    let (mut vault, _store, clock) = vault_at(local_ms(2025, 6, 7, 8, 0));
    vault.update_setting(SettingField::OvertimeThreshold, "10").unwrap();

    // Saturday of the previous week
    work_at(&mut vault, &clock, local_ms(2025, 6, 7, 8, 0), 12.0);

    clock.set(local_ms(2025, 6, 8, 9, 0));
    vault.clock_in().unwrap();
    clock.advance_hours(4.0);
    let receipt = vault.clock_out().unwrap();

    assert_eq!(receipt.prior_weekly_hours, 0.0);
    assert_eq!(receipt.split.overtime, 0.0);
    assert_close(receipt.entry.earnings, 100.0);
}

fn june_entries() -> Vec<TimeEntry> {
    let e = |id: i64, start: i64, hours: f64, pay: f64| {
        TimeEntry::new(id, start, start + (hours * HOUR_MS as f64) as i64, pay)
    };
    vec![
        e(1, local_ms(2025, 5, 30, 9, 0), 1.0, 25.0),
        e(2, local_ms(2025, 6, 1, 9, 0), 1.0, 25.0),
        e(3, local_ms(2025, 6, 8, 9, 0), 2.0, 50.0),
        e(4, local_ms(2025, 6, 9, 9, 0), 3.0, 75.0),
        e(5, local_ms(2025, 6, 11, 8, 0), 2.0, 50.0),
    ]
}

#[test]
fn test_windows_partition_by_local_date() {
    let entries = june_entries();
    let s = Settings::default();
    let engine = EarningsEngine::new(&entries, &s, SessionState::Idle, midweek_noon());

    assert_close(engine.hours(Window::Today), 2.0);
    assert_close(engine.hours(Window::Week), 7.0);
    assert_close(engine.hours(Window::Month), 8.0);
    assert_close(engine.earnings(Window::Today), 50.0);
    assert_close(engine.earnings(Window::Week), 175.0);
    assert_close(engine.earnings(Window::Month), 200.0);
}

#[test]
fn test_live_session_adds_hours_but_not_earnings() {
    let entries = june_entries();
    let s = Settings::default();
    let now = midweek_noon();
    let session = SessionState::Working { since: now - HOUR_MS };
    let engine = EarningsEngine::new(&entries, &s, session, now);

    assert_close(engine.live_hours(), 1.0);
    assert_close(engine.hours(Window::Today), 3.0);
    assert_close(engine.hours(Window::Week), 8.0);
    assert_close(engine.hours(Window::Month), 9.0);
    assert_close(engine.earnings(Window::Today), 50.0);
}

#[test]
fn test_aggregation_is_idempotent() {
    let entries = june_entries();
    let s = Settings::default();
    let engine = EarningsEngine::new(&entries, &s, SessionState::Idle, midweek_noon());

    let first = (engine.totals(Window::Week), engine.totals(Window::Month));
    let second = (engine.totals(Window::Week), engine.totals(Window::Month));
    assert_eq!(first, second);
    assert_eq!(entries, june_entries());
}

#[test]
fn test_week_breakdown_goal_and_distribution() {
    let entries = june_entries();
    let s = settings(25.0, 1.5, 5.0);
    let engine = EarningsEngine::new(&entries, &s, SessionState::Idle, midweek_noon());

    let days = engine.week_breakdown();
    assert_eq!(days, [2.0, 3.0, 0.0, 2.0, 0.0, 0.0, 0.0]);

    let progress = engine.goal_progress();
    assert_close(progress.today, 25.0);
    assert_close(progress.week, 7.0 / 40.0 * 100.0);

    let dist = engine.distribution().unwrap();
    assert_close(dist.regular_hours, 5.0);
    assert_close(dist.overtime_hours, 2.0);
    assert_close(dist.regular_percent + dist.overtime_percent, 100.0);
    assert_close(engine.hours_until_overtime(), -2.0);
}

#[test]
fn test_distribution_is_none_for_an_empty_week() {
    let entries: Vec<TimeEntry> = Vec::new();
    let s = Settings::default();
    let engine = EarningsEngine::new(&entries, &s, SessionState::Idle, midweek_noon());

    assert!(engine.distribution().is_none());
    assert_eq!(engine.goal_progress().week, 0.0);
}

#[test]
fn test_zero_weekly_target_never_divides_by_zero() {
    let (mut vault, _store, clock) = vault_at(midweek_noon());
    vault.update_setting(SettingField::WeeklyTarget, "0").unwrap();
    work(&mut vault, &clock, 1.0);

    let progress = vault.engine().goal_progress();
    assert_eq!(progress.week, 0.0);
    assert_eq!(progress.month, 0.0);
}
