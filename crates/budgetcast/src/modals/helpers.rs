//! Common rendering helpers for modal widgets.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

// ========== Cursor Rendering ==========

/// Render a line of text with a visible cursor at the specified position.
///
/// The cursor is shown as a white background block; at the end of the text it
/// becomes a trailing blank cell.
pub fn render_cursor_line(display_value: &str, cursor_pos: usize, prefix: &str) -> Line<'static> {
    let mut spans = Vec::new();

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
    let chars: Vec<char> = display_value.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i == cursor_pos {
            spans.push(Span::styled(c.to_string(), cursor_style));
        } else {
            spans.push(Span::raw(c.to_string()));
        }
    }

    if cursor_pos >= chars.len() {
        spans.push(Span::styled(" ", cursor_style));
    }

    Line::from(spans)
}

// ========== Horizontal Scroll ==========

/// Visible slice of a text input that's wider than its container.
#[derive(Debug, PartialEq, Eq)]
pub struct ScrolledView {
    pub display_value: String,
    /// Cursor position within `display_value`, in characters
    pub cursor_pos: usize,
}

/// Keep the cursor centered when the text is longer than `visible_chars`.
pub fn calculate_scroll(value: &str, cursor_pos: usize, visible_chars: usize) -> ScrolledView {
    let chars: Vec<char> = value.chars().collect();

    if chars.len() <= visible_chars {
        return ScrolledView {
            display_value: value.to_string(),
            cursor_pos,
        };
    }

    let start = cursor_pos.saturating_sub(visible_chars / 2);
    let end = (start + visible_chars).min(chars.len());
    let start = end.saturating_sub(visible_chars);

    ScrolledView {
        display_value: chars[start..end].iter().collect(),
        cursor_pos: cursor_pos - start,
    }
}

// ========== Modal Frame ==========

/// Layout produced by [`render_modal_frame`].
pub struct ModalFrame {
    pub inner: Rect,
    pub chunks: Rc<[Rect]>,
}

/// Center a bordered, titled modal, clear what's behind it and split the
/// inside vertically by `constraints`.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let modal_area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    ModalFrame { inner, chunks }
}

// ========== Help Text Builder ==========

/// Builder for key-description help lines.
///
/// # Example
/// ```ignore
/// let help = HelpText::new()
///     .key("[Enter]", Color::Green, "Confirm")
///     .key("[Esc]", Color::Yellow, "Cancel")
///     .build();
/// frame.render_widget(help, area);
/// ```
#[derive(Default)]
pub struct HelpText {
    items: Vec<(String, Color, String)>,
}

impl HelpText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: &str, color: Color, desc: &str) -> Self {
        self.items.push((key.to_string(), color, desc.to_string()));
        self
    }

    pub fn build(self) -> Paragraph<'static> {
        let mut spans: Vec<Span> = Vec::new();

        for (i, (key, color, desc)) in self.items.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(key, Style::default().fg(color)));
            spans.push(Span::raw(format!(" {}", desc)));
        }

        Paragraph::new(Line::from(spans))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_value_is_not_scrolled() {
        let view = calculate_scroll("1500", 4, 20);
        assert_eq!(
            view,
            ScrolledView {
                display_value: "1500".to_string(),
                cursor_pos: 4,
            }
        );
    }

    #[test]
    fn test_long_value_keeps_cursor_visible() {
        let value = "1234567890123456789";
        let view = calculate_scroll(value, 19, 8);

        assert_eq!(view.display_value.chars().count(), 8);
        assert_eq!(view.display_value, "23456789");
        assert_eq!(view.cursor_pos, 8);
    }

    #[test]
    fn test_cursor_line_appends_block_at_end() {
        let line = render_cursor_line("12", 2, "");
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[2].content, " ");
    }
}
