//! Interactive budget session
//!
//! [`BudgetSession`] owns the configuration and the per-day entries of one
//! interactive session. Every setter recomputes the derived rows before
//! returning, so readers always see rows that match the current inputs.
//!
//! Changing the start amount, target amount or window length throws away all
//! entered adjustments.

use crate::config::ForecastConfig;
use crate::engine;
use crate::error::{ForecastError, Result};
use crate::input::sanitize;
use crate::model::{DayEntry, DerivedRow, ForecastSummary};

/// Which side of a day's adjustment an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Plus,
    Minus,
}

impl EntryField {
    pub fn label(&self) -> &'static str {
        match self {
            EntryField::Plus => "Plus",
            EntryField::Minus => "Minus",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            EntryField::Plus => EntryField::Minus,
            EntryField::Minus => EntryField::Plus,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BudgetSession {
    config: ForecastConfig,
    entries: Vec<DayEntry>,
    rows: Vec<DerivedRow>,
    summary: ForecastSummary,
}

impl BudgetSession {
    /// Start a session with zeroed entries
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;

        let entries = engine::reset_entries(&config);
        let mut session = Self {
            config,
            entries,
            rows: Vec::new(),
            summary: ForecastSummary::default(),
        };
        session.recompute();
        Ok(session)
    }

    // === Readers ===

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    pub fn entries(&self) -> &[DayEntry] {
        &self.entries
    }

    pub fn entry(&self, day: usize) -> Option<&DayEntry> {
        self.entries.get(day)
    }

    pub fn rows(&self) -> &[DerivedRow] {
        &self.rows
    }

    pub fn summary(&self) -> &ForecastSummary {
        &self.summary
    }

    // === Configuration setters ===

    /// Set the day 0 balance. Non-finite input is treated as zero.
    pub fn set_start_amount(&mut self, amount: f64) {
        self.config.start_amount = sanitize(amount);
        self.reset();
    }

    /// Set the final-day goal. Non-finite input is treated as zero.
    pub fn set_target_amount(&mut self, amount: f64) {
        self.config.target_amount = sanitize(amount);
        self.reset();
    }

    /// Resize the window. Rejected with the same rule as
    /// [`ForecastConfig::validate`], leaving the session untouched.
    pub fn set_day_count(&mut self, day_count: usize) -> Result<()> {
        self.config.with_day_count(day_count).validate()?;
        self.config.day_count = day_count;
        self.reset();
        Ok(())
    }

    pub fn set_start_date(&mut self, date: Option<jiff::civil::Date>) {
        // Labels only, the entries stay
        self.config.start_date = date;
    }

    // === Entry setters ===

    pub fn set_plus(&mut self, day: usize, amount: f64) -> Result<()> {
        self.set_field(day, EntryField::Plus, amount)
    }

    pub fn set_minus(&mut self, day: usize, amount: f64) -> Result<()> {
        self.set_field(day, EntryField::Minus, amount)
    }

    /// Set one side of a day's adjustment. Non-finite input is treated as zero.
    pub fn set_field(&mut self, day: usize, field: EntryField, amount: f64) -> Result<()> {
        let entry = self.editable_entry(day)?;
        let amount = sanitize(amount);
        match field {
            EntryField::Plus => entry.plus = amount,
            EntryField::Minus => entry.minus = amount,
        }
        self.recompute();
        Ok(())
    }

    /// Zero both sides of a day's adjustment
    pub fn clear_day(&mut self, day: usize) -> Result<()> {
        self.editable_entry(day)?.clear();
        self.recompute();
        Ok(())
    }

    /// Zero every entry, keeping the configuration
    pub fn reset(&mut self) {
        self.entries = engine::reset_entries(&self.config);
        self.recompute();
    }

    fn editable_entry(&mut self, day: usize) -> Result<&mut DayEntry> {
        if day == 0 {
            return Err(ForecastError::LockedDay);
        }
        let day_count = self.config.day_count;
        self.entries
            .get_mut(day)
            .ok_or(ForecastError::DayOutOfRange { day, day_count })
    }

    fn recompute(&mut self) {
        self.rows = engine::project(&self.config, &self.entries);
        self.summary = engine::summarize(&self.config, &self.rows);
    }
}
