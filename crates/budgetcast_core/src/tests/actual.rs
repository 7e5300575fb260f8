//! Tests for the running balance

use super::{TOLERANCE, entries_with, standard_config};
use crate::engine::compute_actual;

#[test]
fn test_actual_starts_at_start_amount() {
    let config = standard_config();

    let empty = compute_actual(&config, &entries_with(&config, &[]));
    assert_eq!(empty[0], 15_000.0);

    let edited = compute_actual(&config, &entries_with(&config, &[(1, 300.0, 50.0)]));
    assert_eq!(edited[0], 15_000.0);
}

#[test]
fn test_actual_recurrence() {
    let config = standard_config();
    let entries = entries_with(
        &config,
        &[
            (1, 0.0, 1_000.0),
            (2, 250.5, 0.0),
            (5, 80.0, 120.0),
            (17, 3_000.0, 0.0),
            (31, 0.0, 12.25),
        ],
    );
    let actual = compute_actual(&config, &entries);

    assert_eq!(actual.len(), entries.len());
    for i in 1..entries.len() {
        let expected = actual[i - 1] + entries[i].plus - entries[i].minus;
        assert!(
            (actual[i] - expected).abs() < TOLERANCE,
            "recurrence broken at day {i}: expected {expected}, got {}",
            actual[i]
        );
    }
}

#[test]
fn test_actual_ignores_day_zero_adjustments() {
    let config = standard_config();
    let mut entries = entries_with(&config, &[]);
    entries[0].plus = 9_999.0;

    let actual = compute_actual(&config, &entries);
    assert_eq!(actual[0], 15_000.0);
    assert_eq!(actual[31], 15_000.0);
}

#[test]
fn test_actual_allows_negative_values() {
    let config = standard_config();
    // A negative plus is an outflow, a negative minus an inflow, no clamping
    let entries = entries_with(&config, &[(1, -200.0, 0.0), (2, 0.0, -50.0)]);
    let actual = compute_actual(&config, &entries);

    assert_eq!(actual[1], 14_800.0);
    assert_eq!(actual[2], 14_850.0);
}

#[test]
fn test_actual_can_go_below_zero() {
    let config = standard_config();
    let entries = entries_with(&config, &[(4, 0.0, 20_000.0)]);
    let actual = compute_actual(&config, &entries);

    assert_eq!(actual[3], 15_000.0);
    assert_eq!(actual[4], -5_000.0);
    assert_eq!(actual[31], -5_000.0);
}
