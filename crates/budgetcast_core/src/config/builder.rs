//! Forecast Builder
//!
//! Fluent construction of a validated [`ForecastConfig`].
//!
//! # Example
//!
//! ```ignore
//! use budgetcast_core::config::ForecastBuilder;
//!
//! let config = ForecastBuilder::new()
//!     .start(15_000.0)
//!     .target(2_500.0)
//!     .days(31)
//!     .build()?;
//! ```

use super::ForecastConfig;
use crate::error::Result;

/// Builder for forecast configurations
#[derive(Debug, Clone, Default)]
pub struct ForecastBuilder {
    config: ForecastConfig,
}

impl ForecastBuilder {
    /// Start from the default 15 000 → 2 500 over 31 days window
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    #[must_use]
    pub fn from_config(config: ForecastConfig) -> Self {
        Self { config }
    }

    // =========================================================================
    // Amounts
    // =========================================================================

    #[must_use]
    pub fn start(mut self, amount: f64) -> Self {
        self.config.start_amount = amount;
        self
    }

    #[must_use]
    pub fn target(mut self, amount: f64) -> Self {
        self.config.target_amount = amount;
        self
    }

    // =========================================================================
    // Window
    // =========================================================================

    #[must_use]
    pub fn days(mut self, day_count: usize) -> Self {
        self.config.day_count = day_count;
        self
    }

    /// Set the calendar date of day 0
    ///
    /// # Panics
    ///
    /// Panics if the year, month and day do not form a valid date, like
    /// `jiff::civil::date`.
    #[must_use]
    pub fn start_date(mut self, year: i16, month: i8, day: i8) -> Self {
        self.config.start_date = Some(jiff::civil::date(year, month, day));
        self
    }

    #[must_use]
    pub fn on_date(mut self, date: Option<jiff::civil::Date>) -> Self {
        self.config.start_date = date;
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Validate and return the configuration
    pub fn build(self) -> Result<ForecastConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
