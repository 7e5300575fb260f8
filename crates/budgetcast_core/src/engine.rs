//! Forecast engine
//!
//! Pure functions that turn a [`ForecastConfig`] and its [`DayEntry`] sequence
//! into the derived rows shown in the table and the chart:
//!
//! - **baseline**: the straight line from start amount to target amount
//! - **actual**: the running balance after each day's plus/minus
//! - **trend**: a re-projection from the last edited day to the target
//!
//! None of these functions keep state between calls.

use crate::config::ForecastConfig;
use crate::model::{DayEntry, DerivedRow, ForecastSummary};

/// Build a fresh, zeroed entry sequence of `day_count + 1` rows.
#[must_use]
pub fn reset_entries(config: &ForecastConfig) -> Vec<DayEntry> {
    (0..config.row_count()).map(DayEntry::new).collect()
}

/// Baseline balance for a day.
///
/// Computed from `day` directly so day `day_count` lands exactly on the
/// target with no accumulated rounding.
///
/// # Panics
///
/// Panics if `config.day_count` is zero. Callers validate the configuration
/// before projecting.
#[must_use]
pub fn compute_baseline(config: &ForecastConfig, day: usize) -> f64 {
    assert!(
        config.day_count > 0,
        "compute_baseline requires a day_count of at least 1"
    );

    if day == 0 {
        return config.start_amount;
    }
    if day == config.day_count {
        return config.target_amount;
    }

    let per_day = (config.start_amount - config.target_amount) / config.day_count as f64;
    config.start_amount - per_day * day as f64
}

/// Running balance for every entry.
///
/// Day 0 is the anchor and always equals the start amount; its own plus and
/// minus are ignored.
#[must_use]
pub fn compute_actual(config: &ForecastConfig, entries: &[DayEntry]) -> Vec<f64> {
    let mut actual = Vec::with_capacity(entries.len());
    let mut balance = config.start_amount;

    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            balance += entry.daily_change();
        }
        actual.push(balance);
    }

    actual
}

/// Index of the highest day (after day 0) with a non-zero daily change.
#[must_use]
pub fn last_edited_day(entries: &[DayEntry]) -> Option<usize> {
    entries
        .iter()
        .enumerate()
        .skip(1)
        .rev()
        .find(|(_, entry)| entry.is_edited())
        .map(|(index, _)| index)
}

/// Per-day step from `anchor` on `anchor_day` to the target; `None` when no
/// days remain.
fn step_to_target(config: &ForecastConfig, anchor_day: usize, anchor: f64) -> Option<f64> {
    let remaining = config.day_count.checked_sub(anchor_day)?;
    if remaining == 0 {
        return None;
    }
    Some((config.target_amount - anchor) / remaining as f64)
}

/// Last edited day, its actual balance and the per-day step to the target.
fn trend_anchor(
    config: &ForecastConfig,
    entries: &[DayEntry],
    actual: &[f64],
) -> Option<(usize, f64, f64)> {
    let anchor_day = last_edited_day(entries)?;
    let anchor = *actual.get(anchor_day)?;
    let step = step_to_target(config, anchor_day, anchor)?;
    Some((anchor_day, anchor, step))
}

/// Per-day step the trend takes from the last edited day to the target.
///
/// `None` when nothing was edited or the last edit sits on the final day.
#[must_use]
pub fn trend_step(config: &ForecastConfig, entries: &[DayEntry], actual: &[f64]) -> Option<f64> {
    trend_anchor(config, entries, actual).map(|(_, _, step)| step)
}

/// Trend projection for every entry.
///
/// Days up to and including the last edited day stay `None`. Later days step
/// linearly from that day's actual balance to the target, with the final day
/// pinned to the target.
#[must_use]
pub fn compute_trend(
    config: &ForecastConfig,
    entries: &[DayEntry],
    actual: &[f64],
) -> Vec<Option<f64>> {
    let mut trend = vec![None; entries.len()];

    let Some((anchor_day, anchor, step)) = trend_anchor(config, entries, actual) else {
        return trend;
    };

    for (day, slot) in trend.iter_mut().enumerate().skip(anchor_day + 1) {
        *slot = if day == config.day_count {
            Some(config.target_amount)
        } else {
            Some(anchor + step * (day - anchor_day) as f64)
        };
    }

    trend
}

/// Run the full pipeline and return one row per entry.
///
/// # Panics
///
/// Panics if `config.day_count` is zero, see [`compute_baseline`].
#[must_use]
pub fn project(config: &ForecastConfig, entries: &[DayEntry]) -> Vec<DerivedRow> {
    let actual = compute_actual(config, entries);
    let trend = compute_trend(config, entries, &actual);

    entries
        .iter()
        .enumerate()
        .map(|(day, entry)| {
            let (plus, minus) = if day == 0 {
                (0.0, 0.0)
            } else {
                (entry.plus, entry.minus)
            };
            DerivedRow {
                day,
                baseline: compute_baseline(config, day),
                plus,
                minus,
                actual: actual[day],
                daily_change: plus - minus,
                trend: trend[day],
            }
        })
        .collect()
}

/// Headline figures for a projected window.
#[must_use]
pub fn summarize(config: &ForecastConfig, rows: &[DerivedRow]) -> ForecastSummary {
    let last_edited_day = rows
        .iter()
        .skip(1)
        .rev()
        .find(|row| row.daily_change != 0.0)
        .map(|row| row.day);

    let deviation = last_edited_day
        .and_then(|day| rows.get(day))
        .map(DerivedRow::deviation)
        .unwrap_or(0.0);

    let required_daily_change = last_edited_day
        .and_then(|day| step_to_target(config, day, rows.get(day)?.actual));

    let (total_plus, total_minus) = rows
        .iter()
        .fold((0.0, 0.0), |(plus, minus), row| (plus + row.plus, minus + row.minus));

    ForecastSummary {
        final_baseline: rows.last().map(|row| row.baseline).unwrap_or(config.target_amount),
        final_actual: rows.last().map(|row| row.actual).unwrap_or(config.start_amount),
        last_edited_day,
        deviation,
        required_daily_change,
        total_plus,
        total_minus,
    }
}
