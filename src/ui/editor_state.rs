use crate::data::grid::Grid;

/// Everything the render and input handlers need, passed explicitly.
///
/// There is exactly one grid per editor; the status message is transient
/// and is cleared after every rendered frame.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub grid: Grid,
    status_message: String,
    debug: bool,
    should_quit: bool,
}

impl EditorState {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            status_message: String::new(),
            debug: false,
            should_quit: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        let msg = message.into();
        tracing::debug!("Status: {}", msg);
        self.status_message = msg;
    }

    /// Set an error message with context
    pub fn set_error(&mut self, context: &str, error: impl std::fmt::Display) {
        let msg = format!("{}: {}", context, error);
        tracing::error!("Error status: {}", msg);
        self.status_message = msg;
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn clear_status(&mut self) {
        self.status_message.clear();
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn toggle_debug(&mut self) -> bool {
        self.debug = !self.debug;
        self.debug
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The diagnostic readout shown on the status bar in debug mode:
    /// selection, scroll origin and the selected column's width
    pub fn debug_readout(&self) -> String {
        let (xsel, ysel) = self.grid.selection();
        let (xoffset, yoffset) = self.grid.offset();
        let width = self.grid.column(xsel).map(|c| c.max_width()).unwrap_or(0);
        format!("{} {} {} {} {}", xsel, ysel, xoffset, yoffset, width)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Grid::new())
    }
}
