use super::{Component, EventResult};
use crate::state::{AppState, FocusedPanel};
use crate::util::format::{format_currency, format_optional_currency};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text(state: &AppState) -> &'static str {
        match state.focused_panel {
            FocusedPanel::Form => "j/k: field | Enter: edit | Tab: days | r: reset | q: quit",
            FocusedPanel::Table => {
                "j/k: day | h/l: plus/minus | Enter: edit | x: clear | Tab: amounts | r: reset | q: quit"
            }
        }
    }

    fn summary_line(state: &AppState) -> Line<'static> {
        let summary = state.session.summary();
        let target = state.session.config().target_amount;
        let currency = &state.currency;

        let final_style = if summary.meets_target(target) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        let deviation_style = if summary.deviation < 0.0 {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };

        let label = Style::default().fg(Color::Gray);
        let mut spans = vec![
            Span::styled("Final: ", label),
            Span::styled(
                format_currency(summary.final_actual, currency),
                final_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  vs plan: ", label),
            Span::styled(format_currency(summary.deviation, currency), deviation_style),
        ];

        if let Some(day) = summary.last_edited_day {
            spans.push(Span::styled(format!("  (day {day})"), label));
        }

        spans.push(Span::styled("  Needed/day: ", label));
        spans.push(Span::raw(format_optional_currency(
            summary.required_daily_change,
            currency,
        )));

        Line::from(spans)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let bottom = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.clone()),
                Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(Span::styled(
                Self::get_help_text(state),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(vec![Self::summary_line(state), bottom])
            .block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
