//! Action handlers using visitor pattern
//!
//! Each handler owns one group of related actions. The dispatcher offers an
//! action to every handler in turn and the first one that recognises it
//! performs it against the editor state.

use anyhow::Result;
use tracing::{debug, info};

use crate::data::delimiter::delimiter_for_path;
use crate::ui::actions::{Action, ActionResult, NavigateAction};
use crate::ui::editor_state::EditorState;
use crate::ui::prompter::{ask_delimiter, ask_filename, Prompter};

/// Prompt title for editing the selected cell
pub const EDIT_PROMPT: &str = "Value for this cell?";

/// Trait for handling groups of related actions
pub trait ActionHandler {
    /// Handle an action if this handler is responsible for it
    fn handle_action(
        &self,
        action: &Action,
        state: &mut EditorState,
        prompter: &mut dyn Prompter,
    ) -> Option<Result<ActionResult>>;

    /// Get the name of this handler (for debugging/logging)
    fn name(&self) -> &'static str;
}

/// Handler for selection movement
pub struct NavigationActionHandler;

impl ActionHandler for NavigationActionHandler {
    fn handle_action(
        &self,
        action: &Action,
        state: &mut EditorState,
        _prompter: &mut dyn Prompter,
    ) -> Option<Result<ActionResult>> {
        let grid = &mut state.grid;
        match action {
            Action::Navigate(nav_action) => {
                match nav_action {
                    NavigateAction::Up => grid.move_up(),
                    NavigateAction::Down => grid.move_down(),
                    NavigateAction::Left => grid.move_left(),
                    NavigateAction::Right => grid.move_right(),
                    NavigateAction::LineStart => grid.move_to_line_start(),
                    NavigateAction::LineEnd => grid.move_to_line_end(),
                }
                Some(Ok(ActionResult::Handled))
            }
            Action::NextCell => {
                grid.move_to_next_cell();
                Some(Ok(ActionResult::Handled))
            }
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "Navigation"
    }
}

/// Handler for cell edits and structural changes
pub struct EditActionHandler;

impl ActionHandler for EditActionHandler {
    fn handle_action(
        &self,
        action: &Action,
        state: &mut EditorState,
        prompter: &mut dyn Prompter,
    ) -> Option<Result<ActionResult>> {
        let (xsel, ysel) = state.grid.selection();
        match action {
            Action::EditCell => Some(edit_selected_cell(state, prompter)),
            Action::AddRow => {
                state.grid.add_row();
                Some(Ok(ActionResult::Handled))
            }
            Action::AddColumn => {
                state.grid.add_column();
                Some(Ok(ActionResult::Handled))
            }
            Action::DeleteRow => {
                state.grid.delete_row(ysel);
                Some(Ok(ActionResult::Handled))
            }
            Action::DeleteColumn => {
                state.grid.delete_column(xsel);
                Some(Ok(ActionResult::Handled))
            }
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "Edit"
    }
}

fn edit_selected_cell(state: &mut EditorState, prompter: &mut dyn Prompter) -> Result<ActionResult> {
    let current = state.grid.selected_cell().to_string();
    if let Some(value) = prompter.prompt(EDIT_PROMPT, &current)? {
        let (x, y) = state.grid.selection();
        debug!(target: "edit", "Cell ({}, {}) = {:?}", x, y, value);
        state.grid.set_selected_cell(value);
    }
    Ok(ActionResult::Handled)
}

/// Handler for display toggles
pub struct ToggleActionHandler;

impl ActionHandler for ToggleActionHandler {
    fn handle_action(
        &self,
        action: &Action,
        state: &mut EditorState,
        _prompter: &mut dyn Prompter,
    ) -> Option<Result<ActionResult>> {
        match action {
            Action::ToggleTitles => {
                let titles = state.grid.toggle_titles();
                debug!("Title row pinned: {}", titles);
                Some(Ok(ActionResult::Handled))
            }
            Action::ToggleDebug => {
                let debug_on = state.toggle_debug();
                debug!("Debug readout: {}", debug_on);
                Some(Ok(ActionResult::Handled))
            }
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "Toggle"
    }
}

/// Handler for writing the grid to disk
pub struct FileActionHandler;

impl ActionHandler for FileActionHandler {
    fn handle_action(
        &self,
        action: &Action,
        state: &mut EditorState,
        prompter: &mut dyn Prompter,
    ) -> Option<Result<ActionResult>> {
        match action {
            Action::Save => Some(save(state, prompter)),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "File"
    }
}

/// Save the grid, asking for a filename and delimiter the first time.
/// A failed write is reported on the status line and is not an error.
fn save(state: &mut EditorState, prompter: &mut dyn Prompter) -> Result<ActionResult> {
    let result = if state.grid.filename().is_some() {
        state.grid.save()
    } else {
        let path = ask_filename(prompter)?;
        let delimiter = match delimiter_for_path(&path) {
            Some(delimiter) => delimiter,
            None => ask_delimiter(prompter, &path.display().to_string())?,
        };
        state.grid.save_as(path, delimiter)
    };

    match result {
        Ok(()) => {
            let name = state
                .grid
                .filename()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            state.set_status(format!("Saved {}", name));
        }
        Err(e) => state.set_error("Save failed", format!("{:#}", e)),
    }
    Ok(ActionResult::Handled)
}

/// Handler for leaving the editor
pub struct ExitActionHandler;

impl ActionHandler for ExitActionHandler {
    fn handle_action(
        &self,
        action: &Action,
        state: &mut EditorState,
        _prompter: &mut dyn Prompter,
    ) -> Option<Result<ActionResult>> {
        match action {
            Action::Quit => {
                info!("Quit requested");
                state.request_quit();
                Some(Ok(ActionResult::Exit))
            }
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "Exit"
    }
}

/// Main action dispatcher using visitor pattern
pub struct ActionDispatcher {
    handlers: Vec<Box<dyn ActionHandler>>,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        let handlers: Vec<Box<dyn ActionHandler>> = vec![
            Box::new(NavigationActionHandler),
            Box::new(EditActionHandler),
            Box::new(ToggleActionHandler),
            Box::new(FileActionHandler),
            Box::new(ExitActionHandler),
        ];

        Self { handlers }
    }

    /// Dispatch an action to the appropriate handler
    pub fn dispatch(
        &self,
        action: &Action,
        state: &mut EditorState,
        prompter: &mut dyn Prompter,
    ) -> Result<ActionResult> {
        for handler in &self.handlers {
            if let Some(result) = handler.handle_action(action, state, prompter) {
                debug!(target: "action", "{} handled by {}", action.name(), handler.name());
                return result;
            }
        }

        // No handler found for this action
        Ok(ActionResult::NotHandled)
    }
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
