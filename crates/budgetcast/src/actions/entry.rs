// Entry actions - per-day plus/minus adjustments from the table

use budgetcast_core::{EntryField, ForecastError};

use crate::state::{AppState, ModalAction, ModalState, TextInputModal};
use crate::util::format::format_editable;

use super::ActionResult;

/// Open the editor for the selected table cell
pub fn open_entry_editor(state: &AppState) -> ActionResult {
    let day = state.table_state.selected_day;
    let field = state.table_state.selected_field;
    if day == 0 {
        return ActionResult::error(ForecastError::LockedDay.to_string());
    }

    let Some(entry) = state.session.entry(day) else {
        return ActionResult::error(
            ForecastError::DayOutOfRange {
                day,
                day_count: state.session.config().day_count,
            }
            .to_string(),
        );
    };
    let current = match field {
        EntryField::Plus => entry.plus,
        EntryField::Minus => entry.minus,
    };

    let title = match state.session.config().date_for_day(day) {
        Some(date) => format!("Day {} ({}) {}", day, date, field.label()),
        None => format!("Day {} {}", day, field.label()),
    };

    ActionResult::modal(ModalState::TextInput(TextInputModal::new(
        &title,
        "Amount",
        &format_editable(current),
        ModalAction::EditEntry { day, field },
    )))
}

/// Apply a plus or minus amount to a day; non-numeric text becomes zero
pub fn handle_edit_entry(
    state: &mut AppState,
    day: usize,
    field: EntryField,
    value: &str,
) -> ActionResult {
    let amount = state.currency.parse_amount(value);

    match state.session.set_field(day, field, amount) {
        Ok(()) => {
            tracing::debug!(day, field = field.label(), amount, "Entry updated");
            ActionResult::close()
        }
        Err(e) => {
            tracing::warn!(day, field = field.label(), error = %e, "Entry edit rejected");
            ActionResult::error(e.to_string())
        }
    }
}

/// Zero the selected day
pub fn handle_clear_day(state: &mut AppState) -> ActionResult {
    let day = state.table_state.selected_day;
    match state.session.clear_day(day) {
        Ok(()) => {
            tracing::debug!(day, "Day cleared");
            ActionResult::close()
        }
        Err(e) => ActionResult::error(e.to_string()),
    }
}

/// Zero every day, keeping the amounts
pub fn handle_reset_entries(state: &mut AppState) -> ActionResult {
    state.session.reset();
    tracing::info!("All entries reset");
    ActionResult::close()
}
