use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    style::Color,
    Terminal,
};
use std::io::{self, Stdout};
use std::path::PathBuf;
use tracing::{debug, info, trace, warn};

use crate::config::config::Config;
use crate::data::delimiter::delimiter_for_path;
use crate::data::grid::Grid;
use crate::data::grid_loader::GridLoader;
use crate::ui::action_handlers::ActionDispatcher;
use crate::ui::actions::ActionResult;
use crate::ui::editor_state::EditorState;
use crate::ui::key_mapper::{format_key_for_display, KeyMapper};
use crate::ui::prompter::{ask_delimiter, Prompter};
use crate::ui::table_renderer::render_editor;
use crate::ui::viewport_manager::ViewportManager;
use crate::widgets::choice_widget::{ChoiceAction, ChoiceWidget};
use crate::widgets::prompt_widget::{PromptAction, PromptWidget};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Put the terminal in raw mode on the alternate screen
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().map_err(|e| anyhow!("Failed to enable raw mode: {}", e))?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(anyhow!("Failed to setup terminal: {}", e));
    }

    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = disable_raw_mode();
            Err(anyhow!("Failed to create terminal: {}", e))
        }
    }
}

/// Undo [`setup_terminal`]. Errors are ignored; this also runs on the
/// failure path.
pub fn restore_terminal(terminal: &mut Tui) {
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();
}

/// Load the files named on the command line.
///
/// Every file is read so a bad path is reported before editing starts.
/// The first grid is returned along with the files that were not opened
/// for editing. No files gives a blank grid.
pub fn open_files(files: &[PathBuf], prompter: &mut dyn Prompter) -> Result<(Grid, Vec<PathBuf>)> {
    let mut grids = Vec::with_capacity(files.len());
    for path in files {
        let delimiter = match delimiter_for_path(path) {
            Some(delimiter) => delimiter,
            None => ask_delimiter(prompter, &path.display().to_string())?,
        };
        grids.push(GridLoader::load_file(path, delimiter)?);
    }

    let mut grids = grids.into_iter();
    match grids.next() {
        Some(first) => {
            let ignored = files.iter().skip(1).cloned().collect();
            Ok((first, ignored))
        }
        None => Ok((Grid::new(), Vec::new())),
    }
}

/// Prompter that draws modal widgets on a cleared screen and blocks until
/// the user answers
pub struct TerminalPrompter<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
}

impl<'a, B: Backend> TerminalPrompter<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>) -> Self {
        Self { terminal }
    }

    fn next_key() -> Result<Option<KeyEvent>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

fn top_area(area: Rect, height: u16) -> Rect {
    Rect::new(area.x, area.y, area.width, height.min(area.height))
}

impl<B: Backend> Prompter for TerminalPrompter<'_, B> {
    fn prompt(&mut self, title: &str, initial: &str) -> Result<Option<String>> {
        let mut widget = PromptWidget::new(title, initial);
        debug!(target: "input", "Prompt: {}", title);
        loop {
            self.terminal.draw(|f| {
                let area = top_area(f.area(), 3);
                widget.render(f, area);
            })?;

            let Some(key) = Self::next_key()? else {
                continue;
            };
            match widget.handle_key(key) {
                PromptAction::Continue => {}
                PromptAction::Confirm(value) => return Ok(Some(value)),
                PromptAction::Cancel => return Ok(None),
            }
        }
    }

    fn choose(&mut self, title: &str, choices: &[&str], default: usize) -> Result<usize> {
        let mut widget = ChoiceWidget::new(title, choices, default);
        let height = choices.len() as u16 + 2;
        debug!(target: "input", "Choice: {}", title);
        loop {
            self.terminal.draw(|f| {
                let area = top_area(f.area(), height);
                widget.render(f, area);
            })?;

            let Some(key) = Self::next_key()? else {
                continue;
            };
            if let ChoiceAction::Select(index) = widget.handle_key(key) {
                return Ok(index);
            }
        }
    }
}

/// The editor: one grid, a key table and the render loop
pub struct EditorApp {
    state: EditorState,
    viewport: ViewportManager,
    key_mapper: KeyMapper,
    dispatcher: ActionDispatcher,
    title_color: Color,
}

impl EditorApp {
    pub fn new(grid: Grid, config: &Config) -> Self {
        let title_color = config
            .display
            .title_highlight
            .parse::<Color>()
            .unwrap_or_else(|_| {
                warn!(
                    "Unknown title_highlight color '{}', using red",
                    config.display.title_highlight
                );
                Color::Red
            });

        Self {
            state: EditorState::new(grid).with_debug(config.display.show_debug),
            viewport: ViewportManager::new(0, 0),
            key_mapper: KeyMapper::new(config.keybindings.vim_mode),
            dispatcher: ActionDispatcher::new(),
            title_color,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Show `message` on the first frame
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.state.set_status(message);
    }

    /// Run until the user quits. The terminal must already be set up.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let size = terminal.size()?;
        self.viewport.update_terminal_size(size.width, size.height);
        info!(
            "Editing {} ({}x{})",
            self.state
                .grid
                .filename()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<new grid>".to_string()),
            self.state.grid.ncols(),
            self.state.grid.nrows()
        );

        loop {
            self.viewport.update_scroll(&mut self.state.grid);
            terminal.draw(|f| render_editor(f, &self.state, self.title_color))?;
            self.state.clear_status();

            match event::read()? {
                Event::Resize(width, height) => {
                    self.viewport.update_terminal_size(width, height);
                }
                Event::Key(key) => {
                    // Only handle key press, not release
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key, terminal)? {
                        break;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns true when the editor should exit
    fn handle_key<B: Backend>(&mut self, key: KeyEvent, terminal: &mut Terminal<B>) -> Result<bool> {
        let Some(action) = self.key_mapper.map_key(key) else {
            trace!(target: "input", "Unbound key {}", format_key_for_display(&key));
            return Ok(false);
        };
        trace!(
            target: "input",
            "Key {} -> {}",
            format_key_for_display(&key),
            action.name()
        );

        let mut prompter = TerminalPrompter::new(terminal);
        let result = self
            .dispatcher
            .dispatch(&action, &mut self.state, &mut prompter)?;
        Ok(result == ActionResult::Exit || self.state.should_quit())
    }
}
