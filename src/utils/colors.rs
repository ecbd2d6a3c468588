/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Grey for zero values, green otherwise.
pub fn color_for_amount(value: f64) -> &'static str {
    if value.abs() < f64::EPSILON {
        GREY
    } else if value > 0.0 {
        GREEN
    } else {
        RED
    }
}

/// Overtime hours are highlighted once they exist.
pub fn color_for_overtime(hours: f64) -> &'static str {
    if hours > 0.0 { MAGENTA } else { GREY }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Green dot when clocked in, red when clocked out.
pub fn status_badge(working: bool) -> String {
    if working {
        format!("{GREEN}●{RESET} Clocked in")
    } else {
        format!("{RED}●{RESET} Clocked out")
    }
}
