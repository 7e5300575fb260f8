use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::actions::{self, apply_result, dispatch_modal_result};
use crate::components::{
    Component, EventResult,
    charts::ForecastChart,
    panels::{DayTablePanel, FormPanel},
    status_bar::StatusBar,
};
use crate::data::settings_data::Settings;
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::state::{AppState, FocusedPanel, ModalState};

pub struct App {
    state: AppState,
    form_panel: FormPanel,
    day_table: DayTablePanel,
    chart: ForecastChart,
    status_bar: StatusBar,
}

impl App {
    /// Build the app from loaded settings
    pub fn new(settings: &Settings) -> color_eyre::Result<Self> {
        let state = AppState::from_settings(settings)?;
        Ok(Self::with_state(state))
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            form_panel: FormPanel::new(),
            day_table: DayTablePanel::new(),
            chart: ForecastChart::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Amounts, body, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        // Day table left, chart right
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        self.form_panel.render(frame, chunks[0], &self.state);
        self.day_table.render(frame, body[0], &self.state);
        self.chart.render(frame, body[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);

        render_modal(frame, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Handle modal first if active
        if self.state.modal.is_active() {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(action, value) => {
                    let result = dispatch_modal_result(&mut self.state, action, &value);
                    apply_result(&mut self.state, result);
                    self.state.clamp_selection();
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.state.focused_panel = self.state.focused_panel.next();
                return;
            }
            KeyCode::Char('r') => {
                let result = actions::handle_reset_entries(&mut self.state);
                apply_result(&mut self.state, result);
                return;
            }
            _ => {}
        }

        let result = match self.state.focused_panel {
            FocusedPanel::Form => self.form_panel.handle_key(key_event, &mut self.state),
            FocusedPanel::Table => self.day_table.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }
}
