//! End-to-end windows with hand-checked figures

use super::{TOLERANCE, entries_with, standard_config};
use crate::engine::{project, reset_entries, summarize};

#[test]
fn test_untouched_month() {
    let config = standard_config();
    let rows = project(&config, &reset_entries(&config));

    assert_eq!(rows.len(), 32);
    assert_eq!(rows[0].baseline, 15_000.0);
    assert_eq!(rows[31].baseline, 2_500.0);
    assert_eq!(rows[31].actual, 15_000.0);
    assert!(rows.iter().all(|row| row.trend.is_none()));
    assert!(rows.iter().all(|row| row.daily_change == 0.0));

    let summary = summarize(&config, &rows);
    assert_eq!(summary.last_edited_day, None);
    assert_eq!(summary.deviation, 0.0);
    assert_eq!(summary.required_daily_change, None);
    assert_eq!(summary.final_actual, 15_000.0);
    assert_eq!(summary.final_baseline, 2_500.0);
}

#[test]
fn test_single_withdrawal_on_day_one() {
    let config = standard_config();
    let entries = entries_with(&config, &[(1, 0.0, 1_000.0)]);
    let rows = project(&config, &entries);

    assert_eq!(rows[1].actual, 14_000.0);
    assert_eq!(rows[1].daily_change, -1_000.0);
    assert_eq!(rows[31].actual, 14_000.0);

    assert!(rows[0].trend.is_none());
    assert!(rows[1].trend.is_none());

    let step = (2_500.0 - 14_000.0) / 30.0;
    let day_two = rows[2].trend.expect("day 2 projected");
    assert!((day_two - (14_000.0 + step)).abs() < TOLERANCE);
    assert_eq!(rows[31].trend, Some(2_500.0));

    let summary = summarize(&config, &rows);
    assert_eq!(summary.last_edited_day, Some(1));
    assert_eq!(summary.required_daily_change, Some(step));
    assert_eq!(summary.total_minus, 1_000.0);
    assert_eq!(summary.total_plus, 0.0);
    assert!(!summary.meets_target(100_000.0));
    assert!(summary.meets_target(config.target_amount));
}

#[test]
fn test_mixed_month() {
    let config = standard_config();
    let entries = entries_with(
        &config,
        &[(1, 0.0, 450.0), (2, 0.0, 1_200.0), (7, 2_000.0, 300.0), (14, 0.0, 5_000.0)],
    );
    let rows = project(&config, &entries);

    assert_eq!(rows[14].actual, 15_000.0 - 450.0 - 1_200.0 + 1_700.0 - 5_000.0);
    assert_eq!(rows[14].actual, 10_050.0);

    let summary = summarize(&config, &rows);
    assert_eq!(summary.last_edited_day, Some(14));
    let expected_deviation = 10_050.0 - rows[14].baseline;
    assert!((summary.deviation - expected_deviation).abs() < TOLERANCE);
    assert_eq!(summary.total_plus, 2_000.0);
    assert_eq!(summary.total_minus, 6_950.0);
}

#[test]
fn test_projection_is_idempotent() {
    let config = standard_config();
    let entries = entries_with(&config, &[(3, 10.0, 0.0), (29, 0.0, 75.5)]);

    let first = project(&config, &entries);
    let second = project(&config, &entries);
    assert_eq!(first, second);
    assert_eq!(summarize(&config, &first), summarize(&config, &second));
}

#[test]
fn test_rows_keyed_by_day() {
    let config = standard_config();
    let rows = project(&config, &reset_entries(&config));

    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row.day, index);
    }
}
