//! Formatting utilities used for CLI and export outputs.

use crate::models::settings::{Settings, TimeFormat};
use crate::utils::date::local_datetime_of;
use chrono::{Duration, NaiveDate};
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to a display width, counting wide glyphs (emoji, CJK) as two cells.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// `$12.50` style amount using the configured currency symbol.
/// Negative zero prints as zero.
pub fn currency(amount: f64, settings: &Settings) -> String {
    let amount = amount + 0.0;
    if amount < 0.0 {
        format!("-{}{:.2}", settings.currency_symbol, amount.abs())
    } else {
        format!("{}{:.2}", settings.currency_symbol, amount)
    }
}

/// Fractional hours as `2h 30m`, `45m` or `3h`.
pub fn duration(hours: f64) -> String {
    let sign = if hours < 0.0 { "-" } else { "" };
    let abs = hours.abs();

    let mut h = abs.floor() as i64;
    let mut m = ((abs - h as f64) * 60.0).round() as i64;
    if m == 60 {
        h += 1;
        m = 0;
    }

    match (h, m) {
        (0, m) => format!("{sign}{m}m"),
        (h, 0) => format!("{sign}{h}h"),
        (h, m) => format!("{sign}{h}h {m}m"),
    }
}

/// One decimal place, as shown on the dashboard cards.
pub fn hours1(hours: f64) -> String {
    format!("{:.1}", hours)
}

pub fn percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

/// Clock time of an instant in the configured 12/24h format.
pub fn time_of(ms: i64, format: TimeFormat) -> String {
    match local_datetime_of(ms) {
        Some(dt) => match format {
            TimeFormat::H24 => dt.format("%H:%M").to_string(),
            TimeFormat::H12 => dt.format("%-I:%M %p").to_string(),
        },
        None => "--:--".to_string(),
    }
}

/// `Today`, `Yesterday` or a short `Mon, Jan 6` label.
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today - Duration::days(1) {
        "Yesterday".to_string()
    } else {
        date.format("%a, %b %-d").to_string()
    }
}
