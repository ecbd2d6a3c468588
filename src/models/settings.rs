use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_HOURLY_RATE: f64 = 25.0;
pub const DEFAULT_OVERTIME_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_WEEKLY_TARGET: f64 = 40.0;
pub const DEFAULT_OVERTIME_THRESHOLD: f64 = 40.0;
pub const DEFAULT_CURRENCY: &str = "$";

/// Clock display: `"12"` (am/pm) or `"24"`. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12")]
    H12,
    #[serde(rename = "24")]
    H24,
}

impl TimeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFormat::H12 => "12",
            TimeFormat::H24 => "24",
        }
    }
}

/// Pay configuration read by the earnings engine.
///
/// Changing a value never touches entries already closed: their earnings
/// were frozen when they were clocked out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub hourly_rate: f64,
    pub overtime_multiplier: f64,
    pub weekly_target: f64,
    pub overtime_threshold: f64,
    pub currency_symbol: String,
    pub time_format: TimeFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hourly_rate: DEFAULT_HOURLY_RATE,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            weekly_target: DEFAULT_WEEKLY_TARGET,
            overtime_threshold: DEFAULT_OVERTIME_THRESHOLD,
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            time_format: TimeFormat::default(),
        }
    }
}

/// Individually editable settings fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    HourlyRate,
    OvertimeMultiplier,
    OvertimeThreshold,
    WeeklyTarget,
    CurrencySymbol,
    TimeFormat,
}

impl SettingField {
    pub const ALL: [SettingField; 6] = [
        SettingField::HourlyRate,
        SettingField::OvertimeMultiplier,
        SettingField::OvertimeThreshold,
        SettingField::WeeklyTarget,
        SettingField::CurrencySymbol,
        SettingField::TimeFormat,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SettingField::HourlyRate => "hourlyRate",
            SettingField::OvertimeMultiplier => "overtimeMultiplier",
            SettingField::OvertimeThreshold => "overtimeThreshold",
            SettingField::WeeklyTarget => "weeklyTarget",
            SettingField::CurrencySymbol => "currencySymbol",
            SettingField::TimeFormat => "timeFormat",
        }
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SettingField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match norm.as_str() {
            "hourlyrate" | "rate" => Ok(SettingField::HourlyRate),
            "overtimemultiplier" | "multiplier" => Ok(SettingField::OvertimeMultiplier),
            "overtimethreshold" | "threshold" => Ok(SettingField::OvertimeThreshold),
            "weeklytarget" | "target" => Ok(SettingField::WeeklyTarget),
            "currencysymbol" | "currency" => Ok(SettingField::CurrencySymbol),
            "timeformat" => Ok(SettingField::TimeFormat),
            _ => Err(AppError::validation(s, "unknown setting")),
        }
    }
}

fn parse_number(field: SettingField, raw: &str, min: f64) -> AppResult<f64> {
    let value: f64 = raw
        .trim()
        .trim_start_matches(DEFAULT_CURRENCY)
        .parse()
        .map_err(|_| AppError::validation(field.key(), format!("'{raw}' is not a number")))?;

    if !value.is_finite() {
        return Err(AppError::validation(field.key(), "must be a finite number"));
    }
    if value < min {
        return Err(AppError::validation(
            field.key(),
            format!("must be at least {min}"),
        ));
    }
    Ok(value)
}

impl Settings {
    /// Parse and apply one field from raw user input.
    /// On error the current value is left untouched.
    pub fn set(&mut self, field: SettingField, raw: &str) -> AppResult<()> {
        match field {
            SettingField::HourlyRate => self.hourly_rate = parse_number(field, raw, 0.0)?,
            SettingField::OvertimeMultiplier => {
                self.overtime_multiplier = parse_number(field, raw, 1.0)?
            }
            SettingField::OvertimeThreshold => {
                self.overtime_threshold = parse_number(field, raw, 0.0)?
            }
            SettingField::WeeklyTarget => self.weekly_target = parse_number(field, raw, 0.0)?,
            SettingField::CurrencySymbol => {
                let symbol = raw.trim();
                if symbol.is_empty() {
                    return Err(AppError::validation(field.key(), "must not be empty"));
                }
                self.currency_symbol = symbol.to_string();
            }
            SettingField::TimeFormat => {
                self.time_format = match raw.trim() {
                    "12" | "12h" => TimeFormat::H12,
                    "24" | "24h" => TimeFormat::H24,
                    other => {
                        return Err(AppError::validation(
                            field.key(),
                            format!("'{other}' is not 12 or 24"),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Replace out-of-range values (e.g. from a hand-edited backup) with the
    /// defaults. Returns the names of the fields that were reset.
    pub fn sanitize(&mut self) -> Vec<&'static str> {
        let defaults = Settings::default();
        let mut reset = Vec::new();

        if !(self.hourly_rate.is_finite() && self.hourly_rate >= 0.0) {
            self.hourly_rate = defaults.hourly_rate;
            reset.push(SettingField::HourlyRate.key());
        }
        if !(self.overtime_multiplier.is_finite() && self.overtime_multiplier >= 1.0) {
            self.overtime_multiplier = defaults.overtime_multiplier;
            reset.push(SettingField::OvertimeMultiplier.key());
        }
        if !(self.overtime_threshold.is_finite() && self.overtime_threshold >= 0.0) {
            self.overtime_threshold = defaults.overtime_threshold;
            reset.push(SettingField::OvertimeThreshold.key());
        }
        if !(self.weekly_target.is_finite() && self.weekly_target >= 0.0) {
            self.weekly_target = defaults.weekly_target;
            reset.push(SettingField::WeeklyTarget.key());
        }
        if self.currency_symbol.trim().is_empty() {
            self.currency_symbol = defaults.currency_symbol;
            reset.push(SettingField::CurrencySymbol.key());
        }

        reset
    }

    pub fn overtime_rate(&self) -> f64 {
        self.hourly_rate * self.overtime_multiplier
    }

    /// Current value of a field, rendered for display.
    pub fn display_value(&self, field: SettingField) -> String {
        match field {
            SettingField::HourlyRate => format!("{:.2}", self.hourly_rate),
            SettingField::OvertimeMultiplier => format!("{}", self.overtime_multiplier),
            SettingField::OvertimeThreshold => format!("{}", self.overtime_threshold),
            SettingField::WeeklyTarget => format!("{}", self.weekly_target),
            SettingField::CurrencySymbol => self.currency_symbol.clone(),
            SettingField::TimeFormat => self.time_format.as_str().to_string(),
        }
    }
}
