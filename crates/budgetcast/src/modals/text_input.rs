use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::TextInputModal;

use super::ModalResult;
use super::helpers::{HelpText, calculate_scroll, render_cursor_line, render_modal_frame};

const MODAL_WIDTH: u16 = 50;
const MODAL_HEIGHT: u16 = 10;

/// Render the text input modal
pub fn render_text_input_modal(frame: &mut Frame, modal: &TextInputModal) {
    let mf = render_modal_frame(
        frame,
        &modal.title,
        MODAL_WIDTH,
        MODAL_HEIGHT,
        Color::Cyan,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help text
        ],
    );

    let prompt = Paragraph::new(Line::from(Span::styled(
        &modal.prompt,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(prompt, mf.chunks[1]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let input_inner = input_block.inner(mf.chunks[2]);
    frame.render_widget(input_block, mf.chunks[2]);

    // One cell for the leading pad, one for the cursor block past the end
    let visible_chars = (input_inner.width as usize).saturating_sub(2);
    let scrolled = calculate_scroll(&modal.value, modal.cursor_pos, visible_chars);
    let input_line = render_cursor_line(&scrolled.display_value, scrolled.cursor_pos, " ");
    frame.render_widget(Paragraph::new(input_line), input_inner);

    let help = HelpText::new()
        .key("[Enter]", Color::Green, "Confirm")
        .key("[Esc]", Color::Yellow, "Cancel")
        .build();
    frame.render_widget(help, mf.chunks[4]);
}

/// Handle key events for text input modal
pub fn handle_text_input_key(key: KeyEvent, modal: &mut TextInputModal) -> ModalResult {
    match key.code {
        KeyCode::Enter => ModalResult::Confirmed(modal.action, modal.value.clone()),
        KeyCode::Esc => ModalResult::Cancelled,
        KeyCode::Backspace => {
            modal.backspace();
            ModalResult::Continue
        }
        KeyCode::Delete => {
            modal.delete();
            ModalResult::Continue
        }
        KeyCode::Left => {
            modal.move_cursor_left();
            ModalResult::Continue
        }
        KeyCode::Right => {
            modal.move_cursor_right();
            ModalResult::Continue
        }
        KeyCode::Home => {
            modal.move_cursor_home();
            ModalResult::Continue
        }
        KeyCode::End => {
            modal.move_cursor_end();
            ModalResult::Continue
        }
        KeyCode::Char(c) => {
            modal.insert_char(c);
            ModalResult::Continue
        }
        _ => ModalResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormField, ModalAction};
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_then_confirm() {
        let action = ModalAction::EditAmount(FormField::TargetAmount);
        let mut modal = TextInputModal::new("Edit", "Amount", "", action);

        for c in "3 000,5".chars() {
            assert_eq!(
                handle_text_input_key(press(KeyCode::Char(c)), &mut modal),
                ModalResult::Continue
            );
        }
        handle_text_input_key(press(KeyCode::Backspace), &mut modal);

        assert_eq!(
            handle_text_input_key(press(KeyCode::Enter), &mut modal),
            ModalResult::Confirmed(action, "3 000,".to_string())
        );
    }

    #[test]
    fn test_escape_cancels() {
        let action = ModalAction::EditAmount(FormField::StartAmount);
        let mut modal = TextInputModal::new("Edit", "Amount", "15000", action);

        assert_eq!(
            handle_text_input_key(press(KeyCode::Esc), &mut modal),
            ModalResult::Cancelled
        );
    }

    #[test]
    fn test_long_value_fills_input_box() {
        let action = ModalAction::EditAmount(FormField::StartAmount);
        let value = format!("{}{}", "1".repeat(16), "2".repeat(44));
        let modal = TextInputModal::new("Edit", "Amount", &value, action);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_text_input_modal(frame, &modal))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let rows: Vec<String> = buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect();

        // 50 wide modal, 46 cells inside the input box: pad, 44 chars, cursor
        let expected = format!("│ {} │", "2".repeat(44));
        assert!(rows.iter().any(|row| row.contains(&expected)));
        assert!(!rows.iter().any(|row| row.contains('1')));
    }
}
