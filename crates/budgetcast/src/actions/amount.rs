// Amount actions - start and target amounts from the form

use crate::state::{AppState, FormField, ModalAction, ModalState, TextInputModal};
use crate::util::format::format_editable;

use super::ActionResult;

/// Open the editor for the selected form field, prefilled with its value
pub fn open_amount_editor(state: &AppState) -> ActionResult {
    let field = state.form_state.selected_field;
    let config = state.session.config();
    let current = match field {
        FormField::StartAmount => config.start_amount,
        FormField::TargetAmount => config.target_amount,
    };

    ActionResult::modal(ModalState::TextInput(TextInputModal::new(
        &format!("Edit {}", field.label()),
        "Changing this clears all day adjustments",
        &format_editable(current),
        ModalAction::EditAmount(field),
    )))
}

/// Apply a new start or target amount; non-numeric text becomes zero
pub fn handle_edit_amount(state: &mut AppState, field: FormField, value: &str) -> ActionResult {
    let amount = state.currency.parse_amount(value);

    match field {
        FormField::StartAmount => state.session.set_start_amount(amount),
        FormField::TargetAmount => state.session.set_target_amount(amount),
    }

    tracing::info!(field = field.label(), amount, "Amount updated, entries reset");
    ActionResult::close()
}
