//! Tests for the recompute-on-write session

use super::standard_config;
use crate::config::{ForecastConfig, MAX_DAY_COUNT};
use crate::error::ForecastError;
use crate::session::{BudgetSession, EntryField};

fn session() -> BudgetSession {
    BudgetSession::new(standard_config()).unwrap()
}

#[test]
fn test_new_session_has_zeroed_window() {
    let session = session();

    assert_eq!(session.entries().len(), 32);
    assert_eq!(session.rows().len(), 32);
    for (index, entry) in session.entries().iter().enumerate() {
        assert_eq!(entry.day, index);
        assert_eq!(entry.plus, 0.0);
        assert_eq!(entry.minus, 0.0);
    }
}

#[test]
fn test_new_session_rejects_invalid_config() {
    let err = BudgetSession::new(ForecastConfig::new(100.0, 10.0, 0)).unwrap_err();
    assert_eq!(err, ForecastError::InvalidDayCount(0));

    let err = BudgetSession::new(ForecastConfig::new(f64::NAN, 10.0, 5)).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::NonFiniteAmount {
            field: "start_amount",
            ..
        }
    ));
}

#[test]
fn test_edit_recomputes_rows() {
    let mut session = session();
    session.set_minus(1, 1_000.0).unwrap();

    assert_eq!(session.rows()[1].actual, 14_000.0);
    assert_eq!(session.rows()[31].actual, 14_000.0);
    assert_eq!(session.rows()[31].trend, Some(2_500.0));
    assert_eq!(session.summary().last_edited_day, Some(1));

    session.set_plus(1, 1_000.0).unwrap();
    assert_eq!(session.rows()[1].actual, 15_000.0);
    assert!(session.rows().iter().all(|row| row.trend.is_none()));
}

#[test]
fn test_day_zero_is_locked() {
    let mut session = session();

    assert_eq!(session.set_plus(0, 10.0), Err(ForecastError::LockedDay));
    assert_eq!(session.set_minus(0, 10.0), Err(ForecastError::LockedDay));
    assert_eq!(session.clear_day(0), Err(ForecastError::LockedDay));
    assert_eq!(session.rows()[0].actual, 15_000.0);
}

#[test]
fn test_out_of_range_day_rejected() {
    let mut session = session();

    assert_eq!(
        session.set_field(32, EntryField::Plus, 5.0),
        Err(ForecastError::DayOutOfRange {
            day: 32,
            day_count: 31
        })
    );
}

#[test]
fn test_changing_amounts_resets_entries() {
    let mut session = session();
    session.set_plus(4, 500.0).unwrap();
    session.set_minus(9, 200.0).unwrap();

    session.set_start_amount(20_000.0);
    assert!(session.entries().iter().all(|e| e.plus == 0.0 && e.minus == 0.0));
    assert_eq!(session.rows()[0].actual, 20_000.0);
    assert_eq!(session.rows()[0].baseline, 20_000.0);

    session.set_plus(4, 500.0).unwrap();
    session.set_target_amount(0.0);
    assert!(session.entries().iter().all(|e| !e.is_edited()));
    assert_eq!(session.rows()[31].baseline, 0.0);
}

#[test]
fn test_non_finite_input_coerced_to_zero() {
    let mut session = session();

    session.set_plus(3, f64::NAN).unwrap();
    assert_eq!(session.entry(3).unwrap().plus, 0.0);

    session.set_start_amount(f64::INFINITY);
    assert_eq!(session.config().start_amount, 0.0);
    assert!(session.rows().iter().all(|row| row.actual.is_finite()));
}

#[test]
fn test_day_count_change() {
    let mut session = session();
    session.set_plus(2, 10.0).unwrap();

    session.set_day_count(7).unwrap();
    assert_eq!(session.entries().len(), 8);
    assert_eq!(session.rows()[7].baseline, 2_500.0);
    assert!(session.entries().iter().all(|e| !e.is_edited()));

    assert_eq!(session.set_day_count(0), Err(ForecastError::InvalidDayCount(0)));
    assert_eq!(session.entries().len(), 8);
}

#[test]
fn test_oversized_window_is_rejected() {
    for day_count in [MAX_DAY_COUNT + 1, usize::MAX] {
        let config = ForecastConfig::new(100.0, 0.0, day_count);
        assert_eq!(
            config.validate(),
            Err(ForecastError::InvalidDayCount(day_count))
        );
        assert_eq!(
            BudgetSession::new(config).unwrap_err(),
            ForecastError::InvalidDayCount(day_count)
        );
    }

    let mut session = session();
    assert_eq!(
        session.set_day_count(usize::MAX),
        Err(ForecastError::InvalidDayCount(usize::MAX))
    );
    assert_eq!(session.config().day_count, 31);
    assert_eq!(session.entries().len(), 32);

    session.set_day_count(MAX_DAY_COUNT).unwrap();
    assert_eq!(session.rows().len(), MAX_DAY_COUNT + 1);
    assert_eq!(session.rows()[MAX_DAY_COUNT].baseline, 2_500.0);
}

#[test]
fn test_clear_day_and_reset() {
    let mut session = session();
    session.set_plus(5, 100.0).unwrap();
    session.set_minus(6, 40.0).unwrap();

    session.clear_day(6).unwrap();
    assert_eq!(session.summary().last_edited_day, Some(5));

    session.reset();
    assert_eq!(session.summary().last_edited_day, None);
    assert_eq!(session.config().start_amount, 15_000.0);
}

#[test]
fn test_start_date_labels_without_reset() {
    let mut session = session();
    session.set_minus(2, 75.0).unwrap();

    session.set_start_date(Some(jiff::civil::date(2025, 1, 30)));
    assert_eq!(session.entry(2).unwrap().minus, 75.0);
    assert_eq!(
        session.config().date_for_day(2),
        Some(jiff::civil::date(2025, 2, 1))
    );
}
