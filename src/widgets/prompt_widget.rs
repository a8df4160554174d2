//! Single-line text prompt
//!
//! Used for cell edits, the save filename and custom delimiters. The
//! widget only tracks the text; the caller decides what Enter and Esc mean.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

/// Result of handling a key in the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// Keep reading keys
    Continue,
    /// User pressed Enter
    Confirm(String),
    /// User pressed Esc or Ctrl-C
    Cancel,
}

pub struct PromptWidget {
    title: String,
    input: Input,
    style: Style,
}

impl PromptWidget {
    /// Create a prompt pre-filled with `initial`, cursor at the end
    pub fn new(title: impl Into<String>, initial: &str) -> Self {
        Self {
            title: title.into(),
            input: Input::default().with_value(initial.to_string()),
            style: Style::default().fg(Color::Yellow),
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> PromptAction {
        match key.code {
            KeyCode::Esc => PromptAction::Cancel,
            KeyCode::Enter => PromptAction::Confirm(self.input.value().to_string()),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PromptAction::Cancel
            }
            _ => {
                // Let tui_input handle the key (char input, backspace, arrows, etc.)
                self.input.handle_event(&Event::Key(key));
                PromptAction::Continue
            }
        }
    }

    /// Render the prompt box and place the cursor in it
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.as_str())
            .border_style(self.style);

        // Keep the cursor visible when the value is wider than the box
        let inner_width = area.width.saturating_sub(2) as usize;
        let scroll = self.input.visual_scroll(inner_width.saturating_sub(1));

        let input_widget = Paragraph::new(self.input.value())
            .block(block)
            .style(self.style)
            .scroll((0, scroll as u16));

        f.render_widget(input_widget, area);

        let cursor = (self.input.visual_cursor().saturating_sub(scroll)) as u16;
        f.set_cursor_position((area.x + cursor + 1, area.y + 1));
    }
}
