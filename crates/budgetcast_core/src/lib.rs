//! Budget forecast library
//!
//! This crate computes a short-horizon budget forecast from a start balance, a
//! target balance and a table of per-day plus/minus adjustments. It provides:
//! - A straight-line baseline from start to target
//! - The actual running balance after each day's adjustments
//! - A trend that re-projects from the last edited day onto the target
//! - A session model that recomputes the rows after every edit
//!
//! # Example
//!
//! ```ignore
//! use budgetcast_core::{BudgetSession, ForecastBuilder};
//!
//! let config = ForecastBuilder::new().start(15_000.0).target(2_500.0).days(31).build()?;
//! let mut session = BudgetSession::new(config)?;
//! session.set_minus(1, 1_000.0)?;
//!
//! assert_eq!(session.rows()[1].actual, 14_000.0);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod engine;
pub mod error;
pub mod input;
pub mod session;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{ForecastBuilder, ForecastConfig};
pub use error::ForecastError;
pub use model::{DayEntry, DerivedRow, ForecastSummary};
pub use session::{BudgetSession, EntryField};
