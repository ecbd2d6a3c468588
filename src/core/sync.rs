//! Sync metadata: address and PIN validation plus the sync code shown to
//! the user. No data leaves the machine.

use regex::Regex;
use std::sync::OnceLock;

use crate::errors::{AppError, AppResult};

fn email_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

pub fn validate_email(email: &str) -> AppResult<()> {
    if email_re().is_some_and(|re| re.is_match(email)) {
        Ok(())
    } else {
        Err(AppError::validation("email", "not a valid email address"))
    }
}

/// 4 to 8 ASCII digits.
pub fn validate_pin(pin: &str) -> AppResult<()> {
    let ok = (4..=8).contains(&pin.len()) && pin.bytes().all(|b| b.is_ascii_digit());
    if ok {
        Ok(())
    } else {
        Err(AppError::validation("pin", "PIN must be 4-8 digits"))
    }
}

/// 31-multiplier string hash over UTF-16 code units (wrapping i32), its
/// absolute value in base 36, upper-cased and cut to 8 characters.
pub fn sync_code(email: &str) -> String {
    let mut hash: i32 = 0;
    for unit in email.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }

    let mut n = (hash as i64).unsigned_abs();
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        let d = (n % 36) as u32;
        digits.push(std::char::from_digit(d, 36).unwrap_or('0'));
        n /= 36;
    }

    digits
        .iter()
        .rev()
        .take(8)
        .collect::<String>()
        .to_uppercase()
}
