//! One-line status messages for the terminal.
//! Errors go to stderr, everything else to stdout.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tagged(style: Style, icon: &str, msg: impl fmt::Display) -> String {
    format!("{} {}", style.paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Blue.bold(), ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Green.bold(), ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Yellow.bold(), ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", tagged(Colour::Red.bold(), ICON_ERR, msg));
}

/// Section title above a view.
pub fn header<T: fmt::Display>(title: T) {
    let rule = "─".repeat(22);
    println!("{}\n", Colour::Blue.bold().paint(format!("{rule} {title}")));
}
