use budgetcast_core::{DerivedRow, EntryField};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::actions::{apply_result, handle_clear_day, open_entry_editor};
use crate::components::{Component, EventResult};
use crate::state::{AppState, FocusedPanel};
use crate::util::format::{format_currency, format_optional_currency};

use super::border_style;

const PAGE_SIZE: usize = 10;

/// One row per day: forecast, plus, minus, actual and trend
pub struct DayTablePanel;

impl DayTablePanel {
    pub fn new() -> Self {
        Self
    }

    fn day_label(state: &AppState, day: usize) -> String {
        match state.session.config().date_for_day(day) {
            Some(date) => format!("{:>3} {}", day, date.strftime("%m-%d")),
            None => format!("{:>3}", day),
        }
    }

    fn amount_cell(
        value: f64,
        state: &AppState,
        row: &DerivedRow,
        field: EntryField,
        focused: bool,
    ) -> Cell<'static> {
        let text = if row.day == 0 || value == 0.0 {
            String::new()
        } else {
            format_currency(value, &state.currency)
        };

        let is_cursor = focused
            && row.day == state.table_state.selected_day
            && field == state.table_state.selected_field;

        let style = if is_cursor {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            match field {
                EntryField::Plus => Style::default().fg(Color::Green),
                EntryField::Minus => Style::default().fg(Color::Red),
            }
        };

        // Keep an empty cursor cell visible
        let text = if is_cursor && text.is_empty() {
            " ".repeat(6)
        } else {
            text
        };
        Cell::from(text).style(style)
    }

    fn build_row(state: &AppState, row: &DerivedRow, focused: bool) -> Row<'static> {
        let actual_style = if row.day == 0 {
            Style::default()
        } else if row.actual < row.baseline {
            Style::default().fg(Color::LightRed)
        } else {
            Style::default().fg(Color::LightGreen)
        };

        let cells = vec![
            Cell::from(Self::day_label(state, row.day)),
            Cell::from(format_currency(row.baseline, &state.currency))
                .style(Style::default().fg(Color::Cyan)),
            Self::amount_cell(row.plus, state, row, EntryField::Plus, focused),
            Self::amount_cell(row.minus, state, row, EntryField::Minus, focused),
            Cell::from(format_currency(row.actual, &state.currency)).style(actual_style),
            Cell::from(format_optional_currency(row.trend, &state.currency))
                .style(Style::default().fg(Color::Magenta)),
        ];

        let row_widget = Row::new(cells);
        if row.day == 0 {
            row_widget.style(Style::default().fg(Color::DarkGray))
        } else {
            row_widget
        }
    }
}

impl Default for DayTablePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DayTablePanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let day = state.table_state.selected_day;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                state.select_day(day.saturating_sub(1));
                EventResult::Handled
            }
            KeyCode::Down | KeyCode::Char('j') => {
                state.select_day(day + 1);
                EventResult::Handled
            }
            KeyCode::PageUp => {
                state.select_day(day.saturating_sub(PAGE_SIZE));
                EventResult::Handled
            }
            KeyCode::PageDown => {
                state.select_day(day + PAGE_SIZE);
                EventResult::Handled
            }
            KeyCode::Home | KeyCode::Char('g') => {
                state.select_day(0);
                EventResult::Handled
            }
            KeyCode::End | KeyCode::Char('G') => {
                state.select_day(state.last_day());
                EventResult::Handled
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Right | KeyCode::Char('l') => {
                state.table_state.selected_field = state.table_state.selected_field.toggle();
                EventResult::Handled
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                let result = open_entry_editor(state);
                apply_result(state, result);
                EventResult::Handled
            }
            KeyCode::Delete | KeyCode::Char('x') => {
                let result = handle_clear_day(state);
                apply_result(state, result);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focused_panel == FocusedPanel::Table;
        let has_dates = state.session.config().start_date.is_some();

        let header = Row::new(vec!["Day", "Forecast", "Plus", "Minus", "Actual", "Trend"]).style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = state
            .session
            .rows()
            .iter()
            .map(|row| Self::build_row(state, row, focused))
            .collect();

        let widths = [
            Constraint::Length(if has_dates { 9 } else { 4 }),
            Constraint::Min(12),
            Constraint::Min(10),
            Constraint::Min(10),
            Constraint::Min(12),
            Constraint::Min(12),
        ];

        let title = format!(" Days ({}) ", state.table_state.selected_field.label());
        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style(focused))
                    .title(title),
            );

        let mut table_state = TableState::default().with_selected(Some(state.table_state.selected_day));
        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::settings_data::Settings;
    use crossterm::event::KeyModifiers;

    fn state() -> AppState {
        AppState::from_settings(&Settings::default()).unwrap()
    }

    fn press(panel: &mut DayTablePanel, state: &mut AppState, code: KeyCode) -> EventResult {
        panel.handle_key(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    #[test]
    fn test_navigation_stays_in_window() {
        let mut state = state();
        let mut panel = DayTablePanel::new();

        press(&mut panel, &mut state, KeyCode::Char('G'));
        assert_eq!(state.table_state.selected_day, 31);
        press(&mut panel, &mut state, KeyCode::Down);
        assert_eq!(state.table_state.selected_day, 31);

        press(&mut panel, &mut state, KeyCode::PageUp);
        assert_eq!(state.table_state.selected_day, 21);

        press(&mut panel, &mut state, KeyCode::Char('g'));
        press(&mut panel, &mut state, KeyCode::Up);
        assert_eq!(state.table_state.selected_day, 0);
    }

    #[test]
    fn test_enter_opens_editor_for_selected_cell() {
        let mut state = state();
        let mut panel = DayTablePanel::new();

        press(&mut panel, &mut state, KeyCode::Char('l'));
        assert_eq!(state.table_state.selected_field, EntryField::Plus);

        press(&mut panel, &mut state, KeyCode::Enter);
        assert!(state.modal.is_active());
    }

    #[test]
    fn test_day_zero_is_locked() {
        let mut state = state();
        let mut panel = DayTablePanel::new();

        press(&mut panel, &mut state, KeyCode::Char('g'));
        press(&mut panel, &mut state, KeyCode::Enter);

        assert!(!state.modal.is_active());
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_clear_selected_day() {
        let mut state = state();
        state.session.set_minus(1, 500.0).unwrap();
        let mut panel = DayTablePanel::new();

        press(&mut panel, &mut state, KeyCode::Char('x'));

        assert_eq!(state.session.rows()[1].actual, 15_000.0);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_unbound_key_passes_through() {
        let mut state = state();
        let mut panel = DayTablePanel::new();
        assert_eq!(
            press(&mut panel, &mut state, KeyCode::Char('z')),
            EventResult::NotHandled
        );
    }
}
