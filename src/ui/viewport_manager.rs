/// ViewportManager - keeps the selected cell on screen
///
/// Columns have variable widths (each column's cached display width plus a
/// one-cell separator) and every grid row takes one terminal line. The
/// scroll origin lives on the Grid; this type only knows the terminal size
/// and recomputes the origin from the selection once per frame.
///
/// Screen layout:
///     lines 0..height-2   grid rows (line 0 is the title row when pinned)
///     line  height-2      status bar
///     line  height-1      message line
use std::ops::Range;
use tracing::debug;

use crate::data::grid::Grid;

/// Terminal lines reserved below the grid (status bar and message line)
pub const STATUS_ROWS: u16 = 2;

/// Width of the gap between two columns
pub const COLUMN_SEPARATOR: usize = 1;

/// New horizontal scroll offset for a selection.
///
/// Scrolling left follows the selection exactly. Scrolling right does not
/// move one column at a time: once the selected column's right edge would
/// pass the terminal width, the selection becomes the new left edge.
pub fn horizontal_offset(
    widths: &[usize],
    xsel: usize,
    xoffset: usize,
    terminal_width: usize,
) -> usize {
    if xsel < xoffset {
        return xsel;
    }

    let start: usize = widths
        .iter()
        .take(xsel)
        .skip(xoffset)
        .map(|width| width + COLUMN_SEPARATOR)
        .sum();
    let right_edge = start + widths.get(xsel).copied().unwrap_or(0);

    if right_edge > terminal_width {
        xsel
    } else {
        xoffset
    }
}

/// New vertical scroll offset for a selection.
///
/// Rows scroll by jumping: a selection below the last visible line becomes
/// the top line. With a pinned title row the selected row is never allowed
/// to sit under the title, so the offset is pulled back by one.
pub fn vertical_offset(
    ysel: usize,
    yoffset: usize,
    terminal_height: usize,
    titles: bool,
) -> usize {
    let data_rows = terminal_height.saturating_sub(STATUS_ROWS as usize);
    let last_visible = (yoffset + data_rows).saturating_sub(1);

    let mut offset = if ysel < yoffset || ysel > last_visible {
        ysel
    } else {
        yoffset
    };

    if titles && ysel != 0 && offset == ysel {
        offset = ysel - 1;
    }
    offset
}

/// Manages the visible window into a Grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportManager {
    terminal_width: u16,
    terminal_height: u16,
}

impl ViewportManager {
    pub fn new(terminal_width: u16, terminal_height: u16) -> Self {
        Self {
            terminal_width,
            terminal_height,
        }
    }

    /// Record a new terminal size (on startup and on resize events)
    pub fn update_terminal_size(&mut self, terminal_width: u16, terminal_height: u16) {
        if (terminal_width, terminal_height) != (self.terminal_width, self.terminal_height) {
            debug!(
                target: "viewport",
                "Terminal resized {}x{} -> {}x{}",
                self.terminal_width,
                self.terminal_height,
                terminal_width,
                terminal_height
            );
        }
        self.terminal_width = terminal_width;
        self.terminal_height = terminal_height;
    }

    /// Number of terminal lines available for grid rows
    pub fn data_rows(&self) -> usize {
        self.terminal_height.saturating_sub(STATUS_ROWS) as usize
    }

    /// Recompute the grid's scroll origin so the selection is visible.
    /// Returns true when the origin moved.
    pub fn update_scroll(&self, grid: &mut Grid) -> bool {
        let (xsel, ysel) = grid.selection();
        let (xoffset, yoffset) = grid.offset();

        let new_x = horizontal_offset(
            &grid.column_widths(),
            xsel,
            xoffset,
            self.terminal_width as usize,
        );
        let new_y = vertical_offset(
            ysel,
            yoffset,
            self.terminal_height as usize,
            grid.titles(),
        );

        if (new_x, new_y) == (xoffset, yoffset) {
            return false;
        }
        debug!(
            target: "viewport",
            "Scroll origin ({}, {}) -> ({}, {}) for selection ({}, {})",
            xoffset,
            yoffset,
            new_x,
            new_y,
            xsel,
            ysel
        );
        grid.set_offset(new_x, new_y);
        true
    }

    /// Columns drawn across the terminal width
    pub fn visible_columns(&self, grid: &Grid) -> Range<usize> {
        visible_columns(grid, self.terminal_width as usize)
    }

    /// Grid rows drawn on the data lines, in line order
    pub fn visible_rows(&self, grid: &Grid) -> Vec<usize> {
        visible_rows(grid, self.data_rows())
    }
}

/// Columns that start inside `width`, beginning at the scroll origin. The
/// last one may be cut off.
pub fn visible_columns(grid: &Grid, width: usize) -> Range<usize> {
    let (xoffset, _) = grid.offset();
    let start = xoffset.min(grid.ncols());
    let mut x = 0usize;
    let mut end = start;
    for column in &grid.columns()[start..] {
        if x >= width {
            break;
        }
        x += column.max_width() + COLUMN_SEPARATOR;
        end += 1;
    }
    start..end
}

/// Grid row shown on each of `lines` terminal lines.
///
/// Line `n` shows row `yoffset + n`. With a pinned title row line 0 shows
/// row 0 instead, so row `yoffset` itself is covered.
pub fn visible_rows(grid: &Grid, lines: usize) -> Vec<usize> {
    let (_, yoffset) = grid.offset();
    (0..lines)
        .take_while(|line| line + yoffset < grid.nrows())
        .map(|line| {
            if grid.titles() && line == 0 {
                0
            } else {
                line + yoffset
            }
        })
        .collect()
}
