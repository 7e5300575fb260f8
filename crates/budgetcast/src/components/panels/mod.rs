//! Focusable panels: the amount form and the day table.

mod day_table_panel;
mod form_panel;

pub use day_table_panel::DayTablePanel;
pub use form_panel::FormPanel;

use ratatui::style::{Color, Style};

/// Border style for a panel depending on focus
pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
