// Grid rendering. Everything here reads EditorState and draws; nothing
// mutates it, so the scroll origin must be updated before drawing.

use crate::data::grid::Grid;
use crate::ui::editor_state::EditorState;
use crate::ui::viewport_manager::{visible_columns, visible_rows, COLUMN_SEPARATOR, STATUS_ROWS};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget},
    Frame,
};

/// Column where the filename starts when the debug readout is shown
const FILENAME_COLUMN: usize = 20;

/// The cell grid, drawn from the grid's scroll origin
pub struct GridView<'a> {
    grid: &'a Grid,
    title_color: Color,
}

impl<'a> GridView<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            title_color: Color::Red,
        }
    }

    /// Color of the selected cell while it sits on the pinned title row
    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    fn cell_style(&self, title_line: bool, selected: bool) -> Style {
        let reversed = Style::default().add_modifier(Modifier::REVERSED);
        match (title_line, selected) {
            (true, true) => reversed.fg(self.title_color),
            (true, false) | (false, true) => reversed,
            (false, false) => Style::default(),
        }
    }
}

impl Widget for GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = self.grid;
        let (xsel, ysel) = grid.selection();
        let columns = visible_columns(grid, area.width as usize);

        for (line, row) in visible_rows(grid, area.height as usize).into_iter().enumerate() {
            let title_line = grid.titles() && line == 0;
            let y = area.y + line as u16;

            let mut x = 0usize;
            for col in columns.clone() {
                let column = &grid.columns()[col];
                let remaining = area.width as usize - x;
                let left = area.x + x as u16;
                let selected = col == xsel && row == ysel;
                let style = self.cell_style(title_line, selected);

                if selected {
                    let fill = column.max_width().min(remaining) as u16;
                    buf.set_style(Rect::new(left, y, fill, 1), style);
                }
                buf.set_stringn(left, y, column.get(row).unwrap_or_default(), remaining, style);

                x += column.max_width() + COLUMN_SEPARATOR;
            }
        }
    }
}

/// Screen position of the selected cell inside `area`, if it is on screen
pub fn cursor_position(grid: &Grid, area: Rect) -> Option<(u16, u16)> {
    let (xsel, ysel) = grid.selection();
    let (xoffset, yoffset) = grid.offset();

    let line = if grid.titles() && ysel == 0 {
        0
    } else {
        ysel.checked_sub(yoffset)?
    };
    if xsel < xoffset || line >= area.height as usize {
        return None;
    }

    let x: usize = grid.column_widths()[xoffset..xsel]
        .iter()
        .map(|width| width + COLUMN_SEPARATOR)
        .sum();
    if x >= area.width as usize {
        return None;
    }
    Some((area.x + x as u16, area.y + line as u16))
}

/// Text of the status bar: optional debug readout, then the filename
pub fn status_text(state: &EditorState) -> String {
    let filename = state
        .grid
        .filename()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    if state.debug() {
        format!(
            "{:<width$}{}",
            state.debug_readout(),
            filename,
            width = FILENAME_COLUMN
        )
    } else {
        filename
    }
}

/// Draw the whole editor screen: grid, status bar and message line
pub fn render_editor(f: &mut Frame, state: &EditorState, title_color: Color) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(STATUS_ROWS - 1),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(
        GridView::new(&state.grid).title_color(title_color),
        chunks[0],
    );
    if let Some(position) = cursor_position(&state.grid, chunks[0]) {
        f.set_cursor_position(position);
    }

    let status = Paragraph::new(status_text(state))
        .style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(status, chunks[1]);

    f.render_widget(Paragraph::new(state.status_message()), chunks[2]);
}
