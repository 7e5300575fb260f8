use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::actions::{apply_result, open_amount_editor};
use crate::components::{Component, EventResult};
use crate::state::{AppState, FocusedPanel, FormField};
use crate::util::format::format_currency;

use super::border_style;

/// Start and target amounts, plus read-only window facts
pub struct FormPanel;

impl FormPanel {
    pub fn new() -> Self {
        Self
    }

    fn field_spans(field: FormField, state: &AppState, focused: bool) -> Vec<Span<'static>> {
        let config = state.session.config();
        let value = match field {
            FormField::StartAmount => config.start_amount,
            FormField::TargetAmount => config.target_amount,
        };

        let selected = focused && state.form_state.selected_field == field;
        let value_style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        vec![
            Span::styled(format!("{}: ", field.label()), Style::default().fg(Color::Gray)),
            Span::styled(format!(" {} ", format_currency(value, &state.currency)), value_style),
            Span::raw("    "),
        ]
    }
}

impl Default for FormPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FormPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
                state.form_state.selected_field = state.form_state.selected_field.prev();
                EventResult::Handled
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
                state.form_state.selected_field = state.form_state.selected_field.next();
                EventResult::Handled
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                let result = open_amount_editor(state);
                apply_result(state, result);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focused_panel == FocusedPanel::Form;
        let config = state.session.config();

        let mut spans = Vec::new();
        for field in FormField::ALL {
            spans.extend(Self::field_spans(field, state, focused));
        }
        spans.push(Span::styled("Days: ", Style::default().fg(Color::Gray)));
        spans.push(Span::raw(config.day_count.to_string()));
        if let Some(date) = config.start_date {
            spans.push(Span::styled("    From: ", Style::default().fg(Color::Gray)));
            spans.push(Span::raw(date.to_string()));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(" Budget ");

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
