//! Serializes a table back to bytes.

use std::io;

use crate::format::Format;
use crate::table::Table;

/// Renders `table` to `sink`: every comment slot first (marker, then the
/// text if set, then the end-of-line bytes; an unset comment still gets
/// its marker and terminator), then every row (cells joined by the
/// separator, nothing for unset cells, terminated by the end-of-line
/// bytes). No terminator is added beyond the per-line ones, and none is
/// omitted.
///
/// # Errors
///
/// Any error reported by the sink.
pub fn write_table<W: io::Write>(sink: &mut W, table: &Table, format: &Format) -> io::Result<()> {
    let eol = format.eol.as_bytes();

    for index in 0..table.comment_count() {
        sink.write_all(&[format.comment])?;
        if let Some(text) = table.comment(index) {
            sink.write_all(text)?;
        }
        sink.write_all(eol)?;
    }

    for row in 0..table.row_count() {
        for column in 0..table.column_count() {
            if let Some(text) = table.cell(row, column) {
                sink.write_all(text)?;
            }
            if column + 1 != table.column_count() {
                sink.write_all(&[format.separator])?;
            }
        }
        sink.write_all(eol)?;
    }

    Ok(())
}
