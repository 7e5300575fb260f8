//! Settings file data structures.
//!
//! Defines the defaults a session starts from, serialized to/from
//! `~/.budgetcast/settings.yaml`. Entered day adjustments are never written
//! here; every launch starts with a clean table.

use budgetcast_core::config::{
    DEFAULT_DAY_COUNT, DEFAULT_START_AMOUNT, DEFAULT_TARGET_AMOUNT, ForecastConfig,
};
use serde::{Deserialize, Serialize};

use crate::util::format::CurrencyPreset;

/// Root settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub start_amount: f64,
    pub target_amount: f64,
    pub day_count: usize,
    /// Calendar date of day 0, shown next to the day index when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<jiff::civil::Date>,
    pub currency: CurrencyPreset,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_amount: DEFAULT_START_AMOUNT,
            target_amount: DEFAULT_TARGET_AMOUNT,
            day_count: DEFAULT_DAY_COUNT,
            start_date: None,
            currency: CurrencyPreset::default(),
        }
    }
}

impl Settings {
    pub fn forecast_config(&self) -> ForecastConfig {
        ForecastConfig {
            start_amount: self.start_amount,
            target_amount: self.target_amount,
            day_count: self.day_count,
            start_date: self.start_date,
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }
}
