// Actions module - handlers that apply user edits to the session
//
// Each handler mutates `AppState` and reports back whether the modal should
// close or an error should be shown in the status bar.

mod amount;
mod entry;

pub use amount::*;
pub use entry::*;

use crate::state::{AppState, ModalAction, ModalState};

/// Result of an action handler
#[derive(Debug)]
pub enum ActionResult {
    /// Action completed, set modal to this state (None closes the modal)
    Done(Option<ModalState>),
    /// Action failed with an error message
    Error(String),
}

impl ActionResult {
    /// Create a result that closes the modal
    pub fn close() -> Self {
        ActionResult::Done(None)
    }

    /// Create a result that shows a new modal
    pub fn modal(state: ModalState) -> Self {
        ActionResult::Done(Some(state))
    }

    /// Create an error result
    pub fn error(msg: impl Into<String>) -> Self {
        ActionResult::Error(msg.into())
    }
}

/// Route a confirmed text input to its handler
pub fn dispatch_modal_result(
    state: &mut AppState,
    action: ModalAction,
    value: &str,
) -> ActionResult {
    match action {
        ModalAction::EditAmount(field) => handle_edit_amount(state, field, value),
        ModalAction::EditEntry { day, field } => handle_edit_entry(state, day, field, value),
    }
}

/// Apply a handler result to the modal and error state
pub fn apply_result(state: &mut AppState, result: ActionResult) {
    match result {
        ActionResult::Done(modal) => {
            state.modal = modal.unwrap_or(ModalState::None);
        }
        ActionResult::Error(msg) => {
            state.modal = ModalState::None;
            state.set_error(msg);
        }
    }
}
