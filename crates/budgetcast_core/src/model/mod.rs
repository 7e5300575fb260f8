mod entries;
mod rows;

pub use entries::DayEntry;
pub use rows::{DerivedRow, ForecastSummary};
