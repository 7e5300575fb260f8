//! Terminal front end for the budget forecast
//!
//! Renders the amount form, the per-day table and a forecast chart, and
//! routes key presses to edits on a [`budgetcast_core::BudgetSession`].

pub mod actions;
pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod modals;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
