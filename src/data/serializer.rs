use crate::data::grid::Grid;
use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes grids back out as delimited text.
///
/// Cells are joined with the grid's delimiter and nothing is quoted or
/// escaped, so a cell that contains the delimiter or a newline will not
/// read back the same way.
pub struct GridSerializer;

impl GridSerializer {
    /// Write every row of `grid` to `writer`, one line per row
    pub fn write_grid<W: Write>(grid: &Grid, writer: &mut W) -> std::io::Result<()> {
        Self::write_with_delimiter(grid, grid.delimiter(), writer)
    }

    /// Write every row of `grid` joined with `delimiter` instead of the
    /// grid's own
    pub fn write_with_delimiter<W: Write>(
        grid: &Grid,
        delimiter: char,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let mut buf = [0u8; 4];
        let delimiter = delimiter.encode_utf8(&mut buf).as_bytes();

        for y in 0..grid.nrows() {
            for (x, column) in grid.columns().iter().enumerate() {
                if x != 0 {
                    writer.write_all(delimiter)?;
                }
                writer.write_all(column.get(y).unwrap_or_default().as_bytes())?;
            }
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Render `grid` to a string
    pub fn to_string(grid: &Grid) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail
        let _ = Self::write_grid(grid, &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl Grid {
    /// Save to the grid's filename, replacing the file
    pub fn save(&self) -> Result<()> {
        let path = self
            .filename()
            .ok_or_else(|| anyhow!("No filename set for this grid"))?;
        self.write_file(path, self.delimiter())
    }

    /// Save to `path` using `delimiter`. The grid adopts both only when the
    /// write succeeds.
    pub fn save_as(&mut self, path: impl Into<PathBuf>, delimiter: char) -> Result<()> {
        let path = path.into();
        self.write_file(&path, delimiter)?;
        self.set_filename(path);
        self.set_delimiter(delimiter);
        Ok(())
    }

    fn write_file(&self, path: &Path, delimiter: char) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("Cannot write {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        GridSerializer::write_with_delimiter(self, delimiter, &mut writer)
            .and_then(|_| writer.flush())
            .with_context(|| format!("Cannot write {}", path.display()))?;

        info!(
            target: "save",
            "Saved {} rows x {} columns to {}",
            self.nrows(),
            self.ncols(),
            path.display()
        );
        Ok(())
    }
}
