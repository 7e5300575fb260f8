//! Computed rows handed to the table and the chart

use serde::{Deserialize, Serialize};

/// One computed day of the forecast
///
/// Rows are a projection of a configuration plus its entries and are rebuilt
/// after every edit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedRow {
    pub day: usize,
    /// Straight line from start amount to target amount
    pub baseline: f64,
    pub plus: f64,
    pub minus: f64,
    /// Running balance after this day's adjustments
    pub actual: f64,
    pub daily_change: f64,
    /// Projection from the last edited day to the target; `None` up to and
    /// including that day
    pub trend: Option<f64>,
}

impl DerivedRow {
    /// How far the running balance is ahead of (positive) or behind plan
    #[must_use]
    pub fn deviation(&self) -> f64 {
        self.actual - self.baseline
    }
}

/// Headline figures for a computed window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub final_baseline: f64,
    pub final_actual: f64,
    /// Highest day with a non-zero daily change
    pub last_edited_day: Option<usize>,
    /// `actual - baseline` on the last edited day, zero without edits
    pub deviation: f64,
    /// Per-day change needed from the last edited day to land on the target
    pub required_daily_change: Option<f64>,
    pub total_plus: f64,
    pub total_minus: f64,
}

impl ForecastSummary {
    /// Whether the running balance ends at or above the target
    #[must_use]
    pub fn meets_target(&self, target_amount: f64) -> bool {
        self.final_actual >= target_amount
    }
}
