// Action system for editor operations
// Keys are mapped to actions by KeyMapper and actions are executed by
// ActionDispatcher, so each can be tested without a terminal.

/// All operations a key press can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    Navigate(NavigateAction),
    NextCell,

    // Editing
    EditCell,
    AddRow,
    AddColumn,
    DeleteRow,
    DeleteColumn,

    // View
    ToggleTitles,
    ToggleDebug,

    // File
    Save,

    // Application control
    Quit,
}

/// Single-step selection movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigateAction {
    Up,
    Down,
    Left,
    Right,
    LineStart,
    LineEnd,
}

/// Result of handling an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Action was handled, keep running
    Handled,
    /// No handler is registered for the action
    NotHandled,
    /// Action should cause application exit
    Exit,
}

impl Action {
    /// Short name for logs and the key indicator
    pub fn name(&self) -> &'static str {
        match self {
            Action::Navigate(NavigateAction::Up) => "up",
            Action::Navigate(NavigateAction::Down) => "down",
            Action::Navigate(NavigateAction::Left) => "left",
            Action::Navigate(NavigateAction::Right) => "right",
            Action::Navigate(NavigateAction::LineStart) => "line-start",
            Action::Navigate(NavigateAction::LineEnd) => "line-end",
            Action::NextCell => "next-cell",
            Action::EditCell => "edit-cell",
            Action::AddRow => "add-row",
            Action::AddColumn => "add-column",
            Action::DeleteRow => "delete-row",
            Action::DeleteColumn => "delete-column",
            Action::ToggleTitles => "toggle-titles",
            Action::ToggleDebug => "toggle-debug",
            Action::Save => "save",
            Action::Quit => "quit",
        }
    }
}
