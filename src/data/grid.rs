use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

/// Delimiter used by grids that were not loaded from a file
pub const DEFAULT_DELIMITER: char = ',';

/// Display width of a cell value in terminal columns (wide characters count twice)
pub fn display_width(value: &str) -> usize {
    UnicodeWidthStr::width(value)
}

/// A single column of the grid: its cells plus a cached display width
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    cells: Vec<String>,
    max_width: usize,
}

impl Column {
    /// Create a column of `rows` empty cells
    pub fn new(rows: usize) -> Self {
        Self {
            cells: vec![String::new(); rows],
            max_width: 0,
        }
    }

    /// Widest cell seen so far, in terminal columns
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&str> {
        self.cells.get(row).map(String::as_str)
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Store a value and grow the cached width if needed.
    /// The width never shrinks here; see [`Column::recalculate`].
    fn set(&mut self, row: usize, value: String) {
        let width = display_width(&value);
        if width > self.max_width {
            self.max_width = width;
        }
        self.cells[row] = value;
    }

    fn push_empty(&mut self) {
        self.cells.push(String::new());
    }

    fn remove(&mut self, row: usize) {
        self.cells.remove(row);
    }

    /// Recompute the cached width from every cell
    pub fn recalculate(&mut self) {
        self.max_width = self
            .cells
            .iter()
            .map(|cell| display_width(cell))
            .max()
            .unwrap_or(0);
    }
}

/// The editable grid: column-major cells, selection cursor and scroll origin.
///
/// A grid is never empty: it always has at least one column and one row,
/// and the selection always points at an existing cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    columns: Vec<Column>,
    nrows: usize,
    titles: bool,
    delimiter: char,
    filename: Option<PathBuf>,
    xsel: usize,
    ysel: usize,
    xoffset: usize,
    yoffset: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create a blank 1x1 grid with no filename
    pub fn new() -> Self {
        let mut grid = Self::empty(DEFAULT_DELIMITER, None);
        grid.add_row();
        grid
    }

    /// A single column with no rows yet. Loaders add rows as they read lines
    /// and must leave at least one row behind.
    pub(crate) fn empty(delimiter: char, filename: Option<PathBuf>) -> Self {
        Self {
            columns: vec![Column::new(0)],
            nrows: 0,
            titles: false,
            delimiter,
            filename,
            xsel: 0,
            ysel: 0,
            xoffset: 0,
            yoffset: 0,
        }
    }

    /// Build a grid from rows of cell values. Short rows are padded with
    /// empty cells; no rows at all gives a blank 1x1 grid.
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut grid = Self::empty(DEFAULT_DELIMITER, None);
        for values in rows {
            let row = grid.nrows;
            grid.add_row();
            grid.apply_row_fields(row, values.into_iter().map(Into::into).collect());
        }
        if grid.nrows == 0 {
            grid.add_row();
        }
        grid
    }

    // --- shape -----------------------------------------------------------

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, x: usize) -> Option<&Column> {
        self.columns.get(x)
    }

    /// Cached display widths of every column, in column order
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns.iter().map(Column::max_width).collect()
    }

    /// Append a column of empty cells
    pub fn add_column(&mut self) {
        self.columns.push(Column::new(self.nrows));
        trace!(target: "grid", "Added column, ncols={}", self.columns.len());
    }

    /// Append an empty cell to every column
    pub fn add_row(&mut self) {
        for column in &mut self.columns {
            column.push_empty();
        }
        self.nrows += 1;
        trace!(target: "grid", "Added row, nrows={}", self.nrows);
    }

    /// Remove a column. The last remaining column is never removed.
    pub fn delete_column(&mut self, at: usize) {
        if self.columns.len() <= 1 || at >= self.columns.len() {
            return;
        }
        self.columns.remove(at);
        if self.xsel >= self.columns.len() {
            self.xsel = self.columns.len() - 1;
        }
        debug!(target: "grid", "Deleted column {}, ncols={}", at, self.columns.len());
    }

    /// Remove a row from every column. The last remaining row is never removed.
    pub fn delete_row(&mut self, at: usize) {
        if self.nrows <= 1 || at >= self.nrows {
            return;
        }
        for column in &mut self.columns {
            column.remove(at);
        }
        self.nrows -= 1;
        if self.ysel >= self.nrows {
            self.ysel = self.nrows - 1;
        }
        // The removed row may have held the widest cell
        self.recalculate_widths();
        debug!(target: "grid", "Deleted row {}, nrows={}", at, self.nrows);
    }

    /// Recompute every column's cached width
    pub fn recalculate_widths(&mut self) {
        for column in &mut self.columns {
            column.recalculate();
        }
    }

    /// Write parsed fields into `row`, adding columns first when the row is
    /// wider than the grid. Existing rows get empty cells in the new columns.
    pub fn apply_row_fields(&mut self, row: usize, fields: Vec<String>) {
        if row >= self.nrows {
            return;
        }
        while self.columns.len() < fields.len() {
            self.add_column();
        }
        for (x, field) in fields.into_iter().enumerate() {
            self.columns[x].set(row, field);
        }
    }

    // --- cells -----------------------------------------------------------

    pub fn get_cell(&self, x: usize, y: usize) -> Option<&str> {
        self.columns.get(x).and_then(|column| column.get(y))
    }

    /// Overwrite a cell. Out-of-range coordinates are ignored.
    pub fn set_cell(&mut self, x: usize, y: usize, value: impl Into<String>) {
        if y >= self.nrows {
            return;
        }
        if let Some(column) = self.columns.get_mut(x) {
            column.set(y, value.into());
        }
    }

    /// Value of the selected cell
    pub fn selected_cell(&self) -> &str {
        self.get_cell(self.xsel, self.ysel).unwrap_or_default()
    }

    pub fn set_selected_cell(&mut self, value: impl Into<String>) {
        self.set_cell(self.xsel, self.ysel, value);
    }

    /// Cell values of one row, in column order
    pub fn row(&self, y: usize) -> Option<Vec<&str>> {
        if y >= self.nrows {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|column| column.get(y).unwrap_or_default())
                .collect(),
        )
    }

    // --- selection -------------------------------------------------------

    /// Selected cell as (column, row)
    pub fn selection(&self) -> (usize, usize) {
        (self.xsel, self.ysel)
    }

    /// Move the selection, clamping into the grid
    pub fn set_selection(&mut self, x: usize, y: usize) {
        self.xsel = x.min(self.columns.len() - 1);
        self.ysel = y.min(self.nrows - 1);
    }

    pub fn move_left(&mut self) {
        self.xsel = self.xsel.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.xsel + 1 < self.columns.len() {
            self.xsel += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.ysel = self.ysel.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.ysel + 1 < self.nrows {
            self.ysel += 1;
        }
    }

    /// Advance to the next cell in reading order. Moving past the last row
    /// appends a new one.
    pub fn move_to_next_cell(&mut self) {
        self.xsel += 1;
        if self.xsel >= self.columns.len() {
            self.xsel = 0;
            self.ysel += 1;
            if self.ysel >= self.nrows {
                self.add_row();
            }
        }
    }

    pub fn move_to_line_start(&mut self) {
        self.xsel = 0;
    }

    pub fn move_to_line_end(&mut self) {
        self.xsel = self.columns.len() - 1;
    }

    // --- view state ------------------------------------------------------

    /// Scroll origin as (xoffset, yoffset)
    pub fn offset(&self) -> (usize, usize) {
        (self.xoffset, self.yoffset)
    }

    pub fn set_offset(&mut self, xoffset: usize, yoffset: usize) {
        self.xoffset = xoffset;
        self.yoffset = yoffset;
    }

    pub fn titles(&self) -> bool {
        self.titles
    }

    pub fn set_titles(&mut self, titles: bool) {
        self.titles = titles;
    }

    pub fn toggle_titles(&mut self) -> bool {
        self.titles = !self.titles;
        self.titles
    }

    // --- file metadata ---------------------------------------------------

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: char) {
        self.delimiter = delimiter;
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: impl Into<PathBuf>) {
        self.filename = Some(filename.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(vec![vec!["a", "b", "c"], vec!["1", "2", "3"]])
    }

    #[test]
    fn test_blank_grid_is_one_by_one() {
        let grid = Grid::new();
        assert_eq!(grid.ncols(), 1);
        assert_eq!(grid.nrows(), 1);
        assert_eq!(grid.get_cell(0, 0), Some(""));
        assert_eq!(grid.filename(), None);
        assert_eq!(grid.selection(), (0, 0));
    }

    #[test]
    fn test_add_column_backfills_every_row() {
        let mut grid = sample();
        grid.add_column();
        assert_eq!(grid.ncols(), 4);
        assert_eq!(grid.get_cell(3, 0), Some(""));
        assert_eq!(grid.get_cell(3, 1), Some(""));
        assert!(grid.columns().iter().all(|c| c.len() == grid.nrows()));
    }

    #[test]
    fn test_add_row_extends_every_column() {
        let mut grid = sample();
        grid.add_row();
        assert_eq!(grid.nrows(), 3);
        assert_eq!(grid.row(2), Some(vec!["", "", ""]));
    }

    #[test]
    fn test_delete_last_column_is_noop() {
        let mut grid = Grid::new();
        grid.delete_column(0);
        assert_eq!(grid.ncols(), 1);
    }

    #[test]
    fn test_delete_last_row_is_noop() {
        let mut grid = Grid::new();
        grid.set_cell(0, 0, "keep");
        grid.delete_row(0);
        assert_eq!(grid.nrows(), 1);
        assert_eq!(grid.get_cell(0, 0), Some("keep"));
    }

    #[test]
    fn test_delete_column_clamps_selection() {
        let mut grid = sample();
        grid.move_to_line_end();
        grid.delete_column(2);
        assert_eq!(grid.ncols(), 2);
        assert_eq!(grid.selection(), (1, 0));
        assert_eq!(grid.row(0), Some(vec!["a", "b"]));
    }

    #[test]
    fn test_delete_row_clamps_selection_and_shrinks_width() {
        let mut grid = Grid::from_rows(vec![vec!["x"], vec!["a much longer value"]]);
        grid.set_selection(0, 1);
        grid.delete_row(1);
        assert_eq!(grid.nrows(), 1);
        assert_eq!(grid.selection(), (0, 0));
        assert_eq!(grid.column(0).map(Column::max_width), Some(1));
    }

    #[test]
    fn test_set_cell_grows_but_never_shrinks_width() {
        let mut grid = Grid::new();
        grid.set_cell(0, 0, "hello");
        assert_eq!(grid.column(0).unwrap().max_width(), 5);

        grid.set_cell(0, 0, "hi");
        assert_eq!(grid.column(0).unwrap().max_width(), 5);

        grid.recalculate_widths();
        assert_eq!(grid.column(0).unwrap().max_width(), 2);
    }

    #[test]
    fn test_wide_characters_count_double() {
        let mut grid = Grid::new();
        grid.set_cell(0, 0, "日本");
        assert_eq!(grid.column(0).unwrap().max_width(), 4);
    }

    #[test]
    fn test_next_cell_wraps_to_next_row() {
        let mut grid = sample();
        grid.set_selection(2, 0);
        grid.move_to_next_cell();
        assert_eq!(grid.selection(), (0, 1));
        assert_eq!(grid.nrows(), 2);
    }

    #[test]
    fn test_next_cell_past_last_row_adds_row() {
        let mut grid = sample();
        grid.set_selection(2, 1);
        grid.move_to_next_cell();
        assert_eq!(grid.nrows(), 3);
        assert_eq!(grid.selection(), (0, 2));
    }

    #[test]
    fn test_directional_moves_clamp_at_edges() {
        let mut grid = sample();
        grid.move_left();
        grid.move_up();
        assert_eq!(grid.selection(), (0, 0));

        for _ in 0..10 {
            grid.move_right();
            grid.move_down();
        }
        assert_eq!(grid.selection(), (2, 1));
    }

    #[test]
    fn test_line_start_and_end() {
        let mut grid = sample();
        grid.move_to_line_end();
        assert_eq!(grid.selection().0, 2);
        grid.move_to_line_start();
        assert_eq!(grid.selection().0, 0);
    }

    #[test]
    fn test_apply_row_fields_grows_columns() {
        let mut grid = Grid::from_rows(vec![vec!["only"]]);
        grid.add_row();
        grid.apply_row_fields(1, vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(grid.ncols(), 3);
        assert_eq!(grid.row(0), Some(vec!["only", "", ""]));
        assert_eq!(grid.row(1), Some(vec!["a", "b", "c"]));
    }

    #[test]
    fn test_out_of_range_access_is_ignored() {
        let mut grid = sample();
        assert_eq!(grid.get_cell(9, 9), None);
        grid.set_cell(9, 0, "nope");
        grid.set_cell(0, 9, "nope");
        grid.delete_column(9);
        grid.delete_row(9);
        assert_eq!(grid, sample());
    }
}
