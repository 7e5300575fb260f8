//! Forecast configuration
//!
//! `ForecastConfig` holds the three numbers that define a forecast window: the
//! balance on day 0, the balance wanted on the final day, and how many days lie
//! between them. An optional calendar start date lets callers label each day.
//!
//! # Builder DSL
//!
//! ```ignore
//! use budgetcast_core::config::ForecastBuilder;
//!
//! let config = ForecastBuilder::new()
//!     .start(15_000.0)
//!     .target(2_500.0)
//!     .days(31)
//!     .start_date(2025, 1, 1)
//!     .build()?;
//! ```

use jiff::ToSpan;
use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

pub mod builder;

pub use builder::ForecastBuilder;

pub const DEFAULT_START_AMOUNT: f64 = 15_000.0;
pub const DEFAULT_TARGET_AMOUNT: f64 = 2_500.0;
pub const DEFAULT_DAY_COUNT: usize = 31;
/// Longest accepted window, one hundred years of days
pub const MAX_DAY_COUNT: usize = 36_500;

fn default_start_amount() -> f64 {
    DEFAULT_START_AMOUNT
}

fn default_target_amount() -> f64 {
    DEFAULT_TARGET_AMOUNT
}

fn default_day_count() -> usize {
    DEFAULT_DAY_COUNT
}

/// Configuration of a single forecast window
///
/// Amounts are plain `f64` values in the display currency. The window spans
/// `day_count + 1` rows, day 0 through day `day_count` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Balance at day 0
    #[serde(default = "default_start_amount")]
    pub start_amount: f64,

    /// Balance wanted at day `day_count`
    #[serde(default = "default_target_amount")]
    pub target_amount: f64,

    /// Number of steps after day 0
    #[serde(default = "default_day_count")]
    pub day_count: usize,

    /// Calendar date of day 0, used only for labelling
    #[serde(default)]
    pub start_date: Option<jiff::civil::Date>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            start_amount: DEFAULT_START_AMOUNT,
            target_amount: DEFAULT_TARGET_AMOUNT,
            day_count: DEFAULT_DAY_COUNT,
            start_date: None,
        }
    }
}

impl ForecastConfig {
    #[must_use]
    pub fn new(start_amount: f64, target_amount: f64, day_count: usize) -> Self {
        Self {
            start_amount,
            target_amount,
            day_count,
            start_date: None,
        }
    }

    /// Check the invariants the engine relies on: between 1 and
    /// [`MAX_DAY_COUNT`] days after day 0, and finite amounts.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_DAY_COUNT).contains(&self.day_count) {
            return Err(ForecastError::InvalidDayCount(self.day_count));
        }
        if !self.start_amount.is_finite() {
            return Err(ForecastError::NonFiniteAmount {
                field: "start_amount",
                value: self.start_amount,
            });
        }
        if !self.target_amount.is_finite() {
            return Err(ForecastError::NonFiniteAmount {
                field: "target_amount",
                value: self.target_amount,
            });
        }
        Ok(())
    }

    /// Number of rows in the window, including day 0
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.day_count + 1
    }

    #[must_use]
    pub fn contains_day(&self, day: usize) -> bool {
        day <= self.day_count
    }

    // === Variants ===

    #[must_use]
    pub fn with_start_amount(&self, start_amount: f64) -> Self {
        Self {
            start_amount,
            ..*self
        }
    }

    #[must_use]
    pub fn with_target_amount(&self, target_amount: f64) -> Self {
        Self {
            target_amount,
            ..*self
        }
    }

    #[must_use]
    pub fn with_day_count(&self, day_count: usize) -> Self {
        Self { day_count, ..*self }
    }

    /// Calendar date for a day index, if a start date is configured
    #[must_use]
    pub fn date_for_day(&self, day: usize) -> Option<jiff::civil::Date> {
        let start = self.start_date?;
        Some(start.saturating_add((day as i64).days()))
    }
}
