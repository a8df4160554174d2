// Maps keyboard input to actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::ui::actions::{Action, NavigateAction};

/// Normalized key: code plus modifiers, ignoring press/release state
pub type KeyCombo = (KeyCode, KeyModifiers);

/// Maps keyboard input to editor actions
pub struct KeyMapper {
    mappings: HashMap<KeyCombo, Action>,
}

impl KeyMapper {
    /// Build the default table. `vim_mode` adds `h`/`j`/`k`/`l` movement.
    pub fn new(vim_mode: bool) -> Self {
        let mut mapper = Self {
            mappings: HashMap::new(),
        };

        mapper.init_navigation_mappings();
        if vim_mode {
            mapper.init_vim_mappings();
        }
        mapper.init_editing_mappings();
        mapper
    }

    /// Arrow keys and their Emacs chord equivalents
    fn init_navigation_mappings(&mut self) {
        use KeyCode::*;
        use KeyModifiers as Mod;

        let up = Action::Navigate(NavigateAction::Up);
        let down = Action::Navigate(NavigateAction::Down);
        let left = Action::Navigate(NavigateAction::Left);
        let right = Action::Navigate(NavigateAction::Right);
        let line_start = Action::Navigate(NavigateAction::LineStart);
        let line_end = Action::Navigate(NavigateAction::LineEnd);

        self.bind((Up, Mod::NONE), up);
        self.bind((Down, Mod::NONE), down);
        self.bind((Left, Mod::NONE), left);
        self.bind((Right, Mod::NONE), right);

        self.bind((Char('p'), Mod::CONTROL), up);
        self.bind((Char('n'), Mod::CONTROL), down);
        self.bind((Char('b'), Mod::CONTROL), left);
        self.bind((Char('f'), Mod::CONTROL), right);

        self.bind((Home, Mod::NONE), line_start);
        self.bind((Char('a'), Mod::CONTROL), line_start);
        self.bind((End, Mod::NONE), line_end);
        self.bind((Char('e'), Mod::CONTROL), line_end);

        self.bind((Tab, Mod::NONE), Action::NextCell);
    }

    fn init_vim_mappings(&mut self) {
        use KeyCode::*;
        use KeyModifiers as Mod;

        self.bind((Char('h'), Mod::NONE), Action::Navigate(NavigateAction::Left));
        self.bind((Char('j'), Mod::NONE), Action::Navigate(NavigateAction::Down));
        self.bind((Char('k'), Mod::NONE), Action::Navigate(NavigateAction::Up));
        self.bind((Char('l'), Mod::NONE), Action::Navigate(NavigateAction::Right));
    }

    fn init_editing_mappings(&mut self) {
        use KeyCode::*;
        use KeyModifiers as Mod;

        self.bind((Enter, Mod::NONE), Action::EditCell);

        self.bind((Char('k'), Mod::CONTROL), Action::DeleteColumn);
        self.bind((Char('u'), Mod::CONTROL), Action::DeleteRow);
        self.bind((Char('r'), Mod::CONTROL), Action::AddRow);
        self.bind((Char('l'), Mod::CONTROL), Action::AddColumn);

        self.bind((Char('t'), Mod::CONTROL), Action::ToggleTitles);
        self.bind((F(5), Mod::NONE), Action::ToggleDebug);

        self.bind((Char('s'), Mod::CONTROL), Action::Save);
        self.bind((Char('c'), Mod::CONTROL), Action::Quit);
    }

    /// Add or replace a binding
    pub fn bind(&mut self, key: KeyCombo, action: Action) {
        self.mappings.insert(key, action);
    }

    /// Map a key event to an action
    pub fn map_key(&self, key: KeyEvent) -> Option<Action> {
        self.mappings.get(&normalize(key)).copied()
    }

}

impl Default for KeyMapper {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Reduce a key event to the combo used for lookup.
///
/// Terminals report Ctrl+letter in either case depending on Shift, and
/// flag shifted characters with SHIFT even though the character already
/// carries it. Both are folded so a single table entry matches.
pub fn normalize(key: KeyEvent) -> KeyCombo {
    let mut modifiers = key.modifiers;
    let code = match key.code {
        KeyCode::Char(c) => {
            modifiers.remove(KeyModifiers::SHIFT);
            if modifiers.contains(KeyModifiers::CONTROL) {
                KeyCode::Char(c.to_ascii_lowercase())
            } else {
                KeyCode::Char(c)
            }
        }
        other => other,
    };
    (code, modifiers)
}

/// Format a key for the status line and logs
pub fn format_key_for_display(key: &KeyEvent) -> String {
    let (code, modifiers) = normalize(*key);
    let name = match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        other => format!("{:?}", other),
    };
    if modifiers.contains(KeyModifiers::CONTROL) {
        format!("C-{}", name)
    } else if modifiers.contains(KeyModifiers::ALT) {
        format!("M-{}", name)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_arrow_and_emacs_navigation() {
        let mapper = KeyMapper::new(false);
        assert_eq!(
            mapper.map_key(key(KeyCode::Down, KeyModifiers::NONE)),
            Some(Action::Navigate(NavigateAction::Down))
        );
        assert_eq!(
            mapper.map_key(key(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(Action::Navigate(NavigateAction::Down))
        );
        assert_eq!(
            mapper.map_key(key(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            Some(Action::Navigate(NavigateAction::LineStart))
        );
        assert_eq!(
            mapper.map_key(key(KeyCode::End, KeyModifiers::NONE)),
            Some(Action::Navigate(NavigateAction::LineEnd))
        );
    }

    #[test]
    fn test_vim_keys_only_in_vim_mode() {
        let vim = KeyMapper::new(true);
        let plain = KeyMapper::new(false);
        let j = key(KeyCode::Char('j'), KeyModifiers::NONE);

        assert_eq!(vim.map_key(j), Some(Action::Navigate(NavigateAction::Down)));
        assert_eq!(plain.map_key(j), None);
    }

    #[test]
    fn test_ctrl_k_is_delete_column_not_up() {
        let mapper = KeyMapper::new(true);
        assert_eq!(
            mapper.map_key(key(KeyCode::Char('k'), KeyModifiers::CONTROL)),
            Some(Action::DeleteColumn)
        );
        assert_eq!(
            mapper.map_key(key(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            Some(Action::AddColumn)
        );
    }

    #[test]
    fn test_editing_and_file_keys() {
        let mapper = KeyMapper::default();
        let cases = [
            (KeyCode::Enter, KeyModifiers::NONE, Action::EditCell),
            (KeyCode::Tab, KeyModifiers::NONE, Action::NextCell),
            (KeyCode::Char('u'), KeyModifiers::CONTROL, Action::DeleteRow),
            (KeyCode::Char('r'), KeyModifiers::CONTROL, Action::AddRow),
            (KeyCode::Char('t'), KeyModifiers::CONTROL, Action::ToggleTitles),
            (KeyCode::Char('s'), KeyModifiers::CONTROL, Action::Save),
            (KeyCode::Char('c'), KeyModifiers::CONTROL, Action::Quit),
        ];
        for (code, modifiers, expected) in cases {
            assert_eq!(mapper.map_key(key(code, modifiers)), Some(expected));
        }
    }

    #[test]
    fn test_shifted_ctrl_letters_are_folded() {
        let mapper = KeyMapper::default();
        let shifted = key(
            KeyCode::Char('S'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert_eq!(normalize(shifted), (KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(mapper.map_key(shifted), Some(Action::Save));
        assert_eq!(
            mapper.map_key(key(KeyCode::Char('S'), KeyModifiers::CONTROL)),
            Some(Action::Save)
        );
    }

    #[test]
    fn test_unbound_key_maps_to_nothing() {
        let mapper = KeyMapper::default();
        assert_eq!(mapper.map_key(key(KeyCode::Char('z'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_custom_binding_overrides_default() {
        let mut mapper = KeyMapper::default();
        mapper.bind((KeyCode::Char('q'), KeyModifiers::NONE), Action::Quit);
        assert_eq!(
            mapper.map_key(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            mapper.map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_key_display() {
        assert_eq!(
            format_key_for_display(&key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            "C-s"
        );
        assert_eq!(format_key_for_display(&key(KeyCode::F(5), KeyModifiers::NONE)), "F5");
        assert_eq!(format_key_for_display(&key(KeyCode::Enter, KeyModifiers::NONE)), "Enter");
    }
}
