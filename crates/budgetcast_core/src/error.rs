use std::fmt;

use crate::config::MAX_DAY_COUNT;

/// Errors raised when a configuration or an edit violates the forecast invariants
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The forecast window must contain between 1 and `MAX_DAY_COUNT` steps after day 0
    InvalidDayCount(usize),
    /// An amount was NaN or infinite
    NonFiniteAmount { field: &'static str, value: f64 },
    /// Day 0 is the anchor row and cannot be edited
    LockedDay,
    DayOutOfRange { day: usize, day_count: usize },
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::InvalidDayCount(count) => {
                write!(
                    f,
                    "day count must be between 1 and {MAX_DAY_COUNT} (got {count})"
                )
            }
            ForecastError::NonFiniteAmount { field, value } => {
                write!(f, "{field} must be a finite number (got {value})")
            }
            ForecastError::LockedDay => {
                write!(f, "day 0 is the starting balance and cannot be edited")
            }
            ForecastError::DayOutOfRange { day, day_count } => {
                write!(f, "day {day} is outside the forecast window 0..={day_count}")
            }
        }
    }
}

impl std::error::Error for ForecastError {}

pub type Result<T> = std::result::Result<T, ForecastError>;
