use budgetcast_core::{BudgetSession, EntryField, ForecastError};

use crate::data::settings_data::Settings;
use crate::util::format::CurrencyFormat;

use super::{FocusedPanel, FormField, ModalState};

/// Selection inside the amount form
#[derive(Debug)]
pub struct FormState {
    pub selected_field: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            selected_field: FormField::StartAmount,
        }
    }
}

/// Selection inside the day table
#[derive(Debug)]
pub struct DayTableState {
    pub selected_day: usize,
    pub selected_field: EntryField,
}

impl Default for DayTableState {
    fn default() -> Self {
        Self {
            // Day 0 is locked, start on the first editable row
            selected_day: 1,
            selected_field: EntryField::Minus,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub session: BudgetSession,
    pub currency: CurrencyFormat,
    pub focused_panel: FocusedPanel,
    pub form_state: FormState,
    pub table_state: DayTableState,
    pub modal: ModalState,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    pub fn new(session: BudgetSession, currency: CurrencyFormat) -> Self {
        let mut state = Self {
            session,
            currency,
            focused_panel: FocusedPanel::Table,
            form_state: FormState::default(),
            table_state: DayTableState::default(),
            modal: ModalState::None,
            error_message: None,
            exit: false,
        };
        state.clamp_selection();
        state
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ForecastError> {
        let session = BudgetSession::new(settings.forecast_config())?;
        Ok(Self::new(session, settings.currency.format()))
    }

    /// Last selectable day index
    pub fn last_day(&self) -> usize {
        self.session.config().day_count
    }

    pub fn select_day(&mut self, day: usize) {
        self.table_state.selected_day = day.min(self.last_day());
    }

    /// Keep the table selection inside the window after it shrinks
    pub fn clamp_selection(&mut self) {
        self.select_day(self.table_state.selected_day);
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
