//! The engine: a path, a format, a table, and an optional cached buffer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use bstr::{BStr, BString};

use crate::error::Result;
use crate::format::{EndOfLine, Format};
use crate::sanitize::sanitize;
use crate::scanner::{self, Measurement};
use crate::source::{ByteSource, FileSource};
use crate::table::Table;
use crate::writer;

/// An in-memory model of one delimited tabular text file.
///
/// Owns the cell grid, the comment list, the format configuration, the
/// optional source path, and (between a `keep_in_memory` load and the next
/// release) the raw file bytes. All operations run to completion before
/// returning; file handles never outlive a single call.
///
/// Cell and comment values set through [`set_cell`](Self::set_cell) and
/// [`set_comment`](Self::set_comment) are sanitized against the current
/// format so written output cannot be structurally corrupted. Values read
/// from a file are stored verbatim.
#[derive(Debug, Default)]
pub struct CsvFile {
    path: Option<PathBuf>,
    format: Format,
    table: Table,
    raw: Option<Vec<u8>>,
}

impl CsvFile {
    /// An empty model that will read from and write to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// An empty model with no path, pre-sized to the given dimensions.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if the backing
    /// storage cannot be reserved.
    pub fn with_size(rows: usize, columns: usize, comments: usize) -> Result<Self> {
        Ok(Self {
            table: Table::with_size(rows, columns, comments)?,
            ..Self::default()
        })
    }

    /// Reads and parses the configured file, replacing the table contents.
    ///
    /// Two passes over one in-memory copy of the file: measure (sizing the
    /// table), then extract (populating it). With `keep_in_memory` the raw
    /// bytes stay cached on the engine and the next `read` or `assess`
    /// reuses them instead of touching the file; without it they are
    /// released before returning.
    ///
    /// # Errors
    ///
    /// [`Error::Io`](crate::Error::Io) if no path is configured or the file
    /// cannot be read; the table keeps its pre-call contents.
    /// [`Error::Allocation`](crate::Error::Allocation) if resizing the
    /// table fails.
    pub fn read(&mut self, keep_in_memory: bool) -> Result<()> {
        let shape = self.assess(true)?;
        self.table.resize(shape.rows, shape.columns, shape.comments)?;
        self.table.free_content();
        scanner::extract(
            self.raw.as_deref().unwrap_or(&[]),
            &self.format,
            &mut self.table,
        );
        if !keep_in_memory {
            self.unload();
        }
        Ok(())
    }

    /// Serializes the table to the configured path, creating or truncating
    /// the file.
    ///
    /// # Errors
    ///
    /// [`Error::Io`](crate::Error::Io) if no path is configured, the file
    /// cannot be created, or the stream reports a write error. On failure
    /// the file may be absent or truncated depending on when the failure
    /// occurred.
    pub fn write(&self) -> Result<()> {
        let path = self.path.as_deref().ok_or_else(no_path)?;
        let mut sink = BufWriter::new(File::create(path)?);
        writer::write_table(&mut sink, &self.table, &self.format)?;
        sink.flush()?;
        Ok(())
    }

    /// Measures the configured file (row count, maximum column count,
    /// comment count, longest raw line) without mutating the table.
    ///
    /// With `keep_in_memory` the loaded bytes stay cached for a subsequent
    /// `read`. An empty file yields all-zero counts.
    ///
    /// # Errors
    ///
    /// [`Error::Io`](crate::Error::Io) if no path is configured or the file
    /// cannot be read.
    pub fn assess(&mut self, keep_in_memory: bool) -> Result<Measurement> {
        self.load()?;
        let shape = scanner::measure(self.raw.as_deref().unwrap_or(&[]), &self.format);
        if !keep_in_memory {
            self.unload();
        }
        Ok(shape)
    }

    /// Releases the cached raw file bytes, if any.
    pub fn unload(&mut self) {
        self.raw = None;
    }

    /// Caches the file content, reusing an already cached buffer.
    fn load(&mut self) -> Result<()> {
        if self.raw.is_some() {
            return Ok(());
        }
        let path = self.path.as_deref().ok_or_else(no_path)?;
        self.raw = Some(FileSource::new(path).load()?);
        Ok(())
    }

    /// The cell at `(row, column)`, or `None` if unset or out of range.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&BStr> {
        self.table.cell(row, column)
    }

    /// Sanitizes `value` against the current format and stores it.
    /// Out-of-range coordinates are a silent no-op.
    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<BString>) {
        let value = sanitize(value, &self.format);
        self.table.set_cell(row, column, value);
    }

    /// The comment at `index`, or `None` if unset or out of range.
    #[must_use]
    pub fn comment(&self, index: usize) -> Option<&BStr> {
        self.table.comment(index)
    }

    /// Sanitizes `value` against the current format and stores it as a
    /// comment line. An out-of-range index is a silent no-op.
    pub fn set_comment(&mut self, index: usize, value: impl Into<BString>) {
        let value = sanitize(value, &self.format);
        self.table.set_comment(index, value);
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.table.column_count()
    }

    /// Number of comment slots.
    #[must_use]
    pub fn comment_count(&self) -> usize {
        self.table.comment_count()
    }

    /// Resizes the table; see [`Table::resize`].
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`](crate::Error::Allocation) if reserving storage
    /// fails.
    pub fn resize(&mut self, rows: usize, columns: usize, comments: usize) -> Result<()> {
        self.table.resize(rows, columns, comments)
    }

    /// The underlying table.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The separator character.
    #[must_use]
    pub fn separator(&self) -> u8 {
        self.format.separator
    }

    /// Sets the separator character.
    pub fn set_separator(&mut self, separator: u8) {
        self.format.separator = separator;
    }

    /// The comment marker character.
    #[must_use]
    pub fn comment_marker(&self) -> u8 {
        self.format.comment
    }

    /// Sets the comment marker character.
    pub fn set_comment_marker(&mut self, marker: u8) {
        self.format.comment = marker;
    }

    /// The substitute character used when sanitizing.
    #[must_use]
    pub fn substitute(&self) -> u8 {
        self.format.substitute
    }

    /// Sets the substitute character.
    pub fn set_substitute(&mut self, substitute: u8) {
        self.format.substitute = substitute;
    }

    /// The end-of-line marker written after every line.
    #[must_use]
    pub fn end_of_line(&self) -> EndOfLine {
        self.format.eol
    }

    /// Sets the end-of-line marker (truncated to three bytes).
    pub fn set_end_of_line(&mut self, eol: impl Into<EndOfLine>) {
        self.format.eol = eol.into();
    }

    /// The whole format configuration.
    #[must_use]
    pub fn format(&self) -> &Format {
        &self.format
    }

    /// Mutable access to the whole format configuration.
    pub fn format_mut(&mut self) -> &mut Format {
        &mut self.format
    }

    /// The configured file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Sets the file path for subsequent reads and writes, dropping the
    /// previous one.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }
}

fn no_path() -> crate::Error {
    io::Error::new(io::ErrorKind::NotFound, "no file path configured").into()
}
