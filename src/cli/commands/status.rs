use crate::cli::commands::open_vault;
use crate::config::Config;
use crate::core::calculator::{Dashboard, WindowTotals};
use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREY, MAGENTA, RESET, status_badge};
use crate::utils::date::local_date_of;
use crate::utils::formatting::{bold, currency, date_label, duration, hours1, pad_right, percent, time_of};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const BAR_WIDTH: usize = 20;

fn bar(value: f64, max: f64) -> String {
    let filled = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize
    } else {
        0
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn line(label: &str, totals: &WindowTotals, settings: &Settings) {
    println!(
        "{}{:>9}  {:>12}",
        pad_right(label, 12),
        duration(totals.hours),
        currency(totals.earnings, settings)
    );
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let vault = open_vault(cfg);
    let settings = &vault.state().settings;
    let d: Dashboard = vault.dashboard();

    header("TimeVault");

    println!("{}", status_badge(d.session.is_working()));
    if let Some(start) = d.session.session_start() {
        println!(
            "   since {}  ({} so far)",
            time_of(start, settings.time_format),
            duration(d.live_hours)
        );
    }
    println!();

    line("Today", &d.today, settings);
    line("This week", &d.week, settings);
    line("This month", &d.month, settings);
    println!();

    println!("{CYAN}Goals{RESET}");
    println!("  daily   {} {}", bar(d.progress.today, 100.0), percent(d.progress.today));
    println!("  weekly  {} {}", bar(d.progress.week, 100.0), percent(d.progress.week));
    println!("  monthly {} {}", bar(d.progress.month, 100.0), percent(d.progress.month));
    println!();

    if let Some(dist) = &d.distribution {
        println!(
            "{CYAN}This week{RESET}  regular {} ({})  {MAGENTA}overtime {} ({}){RESET}",
            hours1(dist.regular_hours),
            percent(dist.regular_percent),
            hours1(dist.overtime_hours),
            percent(dist.overtime_percent)
        );
    }

    let peak = d.week_breakdown.iter().cloned().fold(0.0_f64, f64::max);
    for (day, hours) in WEEKDAYS.iter().zip(d.week_breakdown) {
        println!("  {day} {} {}", bar(hours, peak), hours1(hours));
    }
    println!();

    println!("{CYAN}Recent entries{RESET}");
    if d.recent.is_empty() {
        println!("  {GREY}No entries yet. Start with `timevault in`.{RESET}");
    }
    let today = local_date_of(vault.now());
    for e in &d.recent {
        println!(
            "  #{:<14} {} {}-{}  {:>8}  {}",
            e.id,
            pad_right(&date_label(e.date, today), 12),
            time_of(e.start_time, settings.time_format),
            time_of(e.end_time, settings.time_format),
            duration(e.duration),
            bold(&currency(e.earnings, settings))
        );
    }

    Ok(())
}
