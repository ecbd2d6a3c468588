use crate::models::settings::Settings;

/// Regular/overtime share of one block of hours.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OvertimeSplit {
    pub regular: f64,
    pub overtime: f64,
}

impl OvertimeSplit {
    pub fn hours(&self) -> f64 {
        self.regular + self.overtime
    }

    pub fn regular_pay(&self, settings: &Settings) -> f64 {
        self.regular * settings.hourly_rate
    }

    pub fn overtime_pay(&self, settings: &Settings) -> f64 {
        self.overtime * settings.overtime_rate()
    }

    pub fn pay(&self, settings: &Settings) -> f64 {
        self.regular_pay(settings) + self.overtime_pay(settings)
    }

    pub fn add(&mut self, other: OvertimeSplit) {
        self.regular += other.regular;
        self.overtime += other.overtime;
    }
}

/// Split `hours` worked after `prior_weekly_hours` already accumulated in
/// the same week against a weekly `threshold`.
pub fn split_hours(prior_weekly_hours: f64, hours: f64, threshold: f64) -> OvertimeSplit {
    if prior_weekly_hours + hours <= threshold {
        return OvertimeSplit {
            regular: hours,
            overtime: 0.0,
        };
    }

    let regular = (threshold - prior_weekly_hours).max(0.0);
    OvertimeSplit {
        regular,
        overtime: hours - regular,
    }
}

/// Pay for a block of hours under the current settings.
pub fn calculate_pay(prior_weekly_hours: f64, hours: f64, settings: &Settings) -> f64 {
    split_hours(prior_weekly_hours, hours, settings.overtime_threshold).pay(settings)
}
