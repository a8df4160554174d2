//! Multiple-choice menu used for the delimiter question

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceAction {
    Continue,
    /// Index of the chosen entry
    Select(usize),
}

pub struct ChoiceWidget {
    title: String,
    choices: Vec<String>,
    state: ListState,
}

impl ChoiceWidget {
    pub fn new(title: impl Into<String>, choices: &[&str], default: usize) -> Self {
        let mut state = ListState::default();
        if !choices.is_empty() {
            state.select(Some(default.min(choices.len() - 1)));
        }
        Self {
            title: title.into(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            state,
        }
    }

    pub fn selected(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    fn move_by(&mut self, forward: bool) {
        if self.choices.is_empty() {
            return;
        }
        let last = self.choices.len() - 1;
        let current = self.selected();
        let next = match (forward, current) {
            (true, c) if c >= last => 0,
            (true, c) => c + 1,
            (false, 0) => last,
            (false, c) => c - 1,
        };
        self.state.select(Some(next));
    }

    /// Handle a key event. Arrows, `j`/`k` and `C-n`/`C-p` move, Enter
    /// picks the highlighted entry and a digit picks that entry directly.
    pub fn handle_key(&mut self, key: KeyEvent) -> ChoiceAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') if !ctrl => self.move_by(true),
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') if !ctrl => self.move_by(false),
            KeyCode::Char('n') if ctrl => self.move_by(true),
            KeyCode::Char('p') if ctrl => self.move_by(false),
            KeyCode::Enter if !self.choices.is_empty() => {
                return ChoiceAction::Select(self.selected())
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(n) = c.to_digit(10) {
                    let index = n as usize;
                    if (1..=self.choices.len()).contains(&index) {
                        return ChoiceAction::Select(index - 1);
                    }
                }
            }
            _ => {}
        }
        ChoiceAction::Continue
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .choices
            .iter()
            .enumerate()
            .map(|(i, choice)| ListItem::new(format!("{}. {}", i + 1, choice)))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title.as_str())
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.state);
    }
}
