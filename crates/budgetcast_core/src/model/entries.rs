//! Per-day user adjustments

use serde::{Deserialize, Serialize};

/// Money in and out on a single day of the forecast window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DayEntry {
    /// Index into the window, equal to the entry's position
    pub day: usize,
    #[serde(default)]
    pub plus: f64,
    #[serde(default)]
    pub minus: f64,
}

impl DayEntry {
    /// A zeroed entry for the given day
    #[must_use]
    pub fn new(day: usize) -> Self {
        Self {
            day,
            plus: 0.0,
            minus: 0.0,
        }
    }

    #[must_use]
    pub fn with_plus(mut self, plus: f64) -> Self {
        self.plus = plus;
        self
    }

    #[must_use]
    pub fn with_minus(mut self, minus: f64) -> Self {
        self.minus = minus;
        self
    }

    /// Net movement for the day
    #[must_use]
    pub fn daily_change(&self) -> f64 {
        self.plus - self.minus
    }

    #[must_use]
    pub fn is_edited(&self) -> bool {
        self.daily_change() != 0.0
    }

    pub fn clear(&mut self) {
        self.plus = 0.0;
        self.minus = 0.0;
    }
}
