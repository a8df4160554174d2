//! Loads delimited text files into a Grid, one grid row per line
use crate::data::delimiter::describe;
use crate::data::grid::Grid;
use crate::data::line_parser::LineParser;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

pub struct GridLoader;

impl GridLoader {
    /// Open `path` and parse it with `delimiter`. The grid remembers both
    /// so a later save writes back to the same file in the same format.
    pub fn load_file<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Grid> {
        let path = path.as_ref();
        info!(
            target: "loader",
            "Loading {} ({} delimited)",
            path.display(),
            describe(delimiter)
        );

        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let mut grid = Self::load_reader(BufReader::new(file), delimiter)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        grid.set_filename(path);

        info!(
            target: "loader",
            "Loaded {}: {} rows, {} columns",
            path.display(),
            grid.nrows(),
            grid.ncols()
        );
        Ok(grid)
    }

    /// Parse every line of `reader` into a new grid.
    ///
    /// Lines may end in `\n` or `\r\n`. Bytes that are not valid UTF-8
    /// become U+FFFD. An empty input yields a blank 1x1 grid.
    pub fn load_reader<R: BufRead>(mut reader: R, delimiter: char) -> Result<Grid> {
        let parser = LineParser::new(delimiter);
        let mut grid = Grid::empty(delimiter, None);
        let mut bytes = Vec::new();

        loop {
            bytes.clear();
            if reader.read_until(b'\n', &mut bytes)? == 0 {
                break;
            }
            if bytes.last() == Some(&b'\n') {
                bytes.pop();
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
            }
            let line = String::from_utf8_lossy(&bytes);
            let row = grid.nrows();
            grid.add_row();
            grid.apply_row_fields(row, parser.parse(&line));
        }

        if grid.nrows() == 0 {
            grid.add_row();
        }
        grid.recalculate_widths();
        Ok(grid)
    }

    /// Parse an in-memory string
    pub fn load_str(text: &str, delimiter: char) -> Result<Grid> {
        Self::load_reader(text.as_bytes(), delimiter)
    }
}
