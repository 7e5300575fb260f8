//! Tests for the budget forecast engine
//!
//! Tests are organized by topic:
//! - `baseline` - Straight-line forecast from start to target
//! - `actual` - Running balance from daily adjustments
//! - `trend` - Re-projection from the last edited day
//! - `scenarios` - End-to-end windows with known figures
//! - `session` - Recompute-on-write session model
//! - `builder_dsl` - Fluent configuration builder

mod actual;
mod scenarios;
mod session;

use crate::config::ForecastConfig;
use crate::model::DayEntry;

pub(crate) const TOLERANCE: f64 = 1e-9;

pub(crate) fn standard_config() -> ForecastConfig {
    ForecastConfig::new(15_000.0, 2_500.0, 31)
}

/// Zeroed entries with the given (day, plus, minus) adjustments applied
pub(crate) fn entries_with(config: &ForecastConfig, edits: &[(usize, f64, f64)]) -> Vec<DayEntry> {
    let mut entries = crate::engine::reset_entries(config);
    for &(day, plus, minus) in edits {
        entries[day].plus = plus;
        entries[day].minus = minus;
    }
    entries
}
