//! Single-pass scanner over a whole in-memory buffer.
//!
//! What it does
//! - One left-to-right pass over the raw bytes, recognizing line
//!   terminators, separators, comment markers, and cell content according
//!   to the active [`Format`].
//! - Two modes sharing the same state machine: [`measure`] computes sizing
//!   statistics (rows, widest row, comments, longest raw line) without
//!   populating anything; [`extract`] fills a [`Table`] that was resized to
//!   a prior measurement.
//!
//! Line model
//! - `\r` and `\n` are each a terminator event in their own right. The `\n`
//!   of a CRLF pair sees a zero-column line, which neither produces a row
//!   nor disturbs extraction, so CRLF behaves as a unit in practice.
//! - A line that is entirely comment or entirely empty is not a row.
//! - A comment marker outside a comment opens one for the rest of the line;
//!   separators and further markers inside it are literal comment text.
//!   Cell text accumulated before the marker stays pending and is flushed
//!   at the terminator.
//! - An empty comment line still occupies a comment slot.
//!
//! Invariants
//! - [`measure`] followed by [`Table::resize`] to the measured dimensions
//!   guarantees [`extract`] writes every value in bounds; extract's writes
//!   are bounds-checked regardless, so it is total for any table.
//! - Content after the last line terminator is dropped by both modes: the
//!   serializer terminates every line it writes, so round trips through
//!   this crate are unaffected, but a foreign file missing its final
//!   terminator loses that trailing line.

use bstr::BString;

use crate::format::Format;
use crate::table::Table;


/// Sizing statistics for a buffer, as computed by [`measure`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Number of lines that produced at least one column.
    pub rows: usize,
    /// Maximum column count over all lines. Every terminated line
    /// contributes `separators + 1` as a candidate, so any terminated input
    /// measures at least one column wide.
    pub columns: usize,
    /// Number of comment markers that opened a comment.
    pub comments: usize,
    /// Maximum distance in bytes between consecutive line terminators (the
    /// first line is measured from the start of the buffer).
    pub max_line_len: usize,
}

/// Measures `bytes` without allocating or populating anything.
#[must_use]
pub fn measure(bytes: &[u8], format: &Format) -> Measurement {
    let mut m = Measurement::default();
    let mut cols_on_line = 0usize;
    let mut last_terminator = 0usize;
    let mut in_comment = false;
    let mut blank = true;
    for (k, &b) in bytes.iter().enumerate() {
        if b == b'\r' || b == b'\n' {
            if !blank {
                m.rows += 1;
            }
            cols_on_line += 1;
            m.columns = m.columns.max(cols_on_line);
            m.max_line_len = m.max_line_len.max(k - last_terminator);
            last_terminator = k;
            cols_on_line = 0;
            in_comment = false;
            blank = true;
        } else if !in_comment {
            if b == format.comment {
                in_comment = true;
                m.comments += 1;
            } else if b == format.separator {
                cols_on_line += 1;
                blank = false;
            } else {
                blank = false;
            }
        }
    }
    m
}

/// Populates `table` from `bytes`.
///
/// The table is expected to be sized to a prior [`measure`] of the same
/// bytes with the same format; stores that fall outside its bounds are
/// silently dropped. Values are stored verbatim; parsed content is taken
/// as already well-formed and is not sanitized.
pub fn extract(bytes: &[u8], format: &Format, table: &mut Table) {
    let mut row = 0usize;
    let mut column = 0usize;
    let mut comment = 0usize;
    let mut in_comment = false;
    let mut cell = BString::default();
    let mut note = BString::default();
    for &b in bytes {
        if b == b'\r' || b == b'\n' {
            if in_comment {
                if !note.is_empty() {
                    table.set_comment(comment, core::mem::take(&mut note));
                }
                comment += 1;
            }
            if !cell.is_empty() {
                table.set_cell(row, column, core::mem::take(&mut cell));
                column += 1;
            }
            if column > 0 {
                row += 1;
            }
            column = 0;
            in_comment = false;
        } else if in_comment {
            note.push(b);
        } else if b == format.comment {
            in_comment = true;
        } else if b == format.separator {
            if !cell.is_empty() {
                table.set_cell(row, column, core::mem::take(&mut cell));
            }
            column += 1;
        } else {
            cell.push(b);
        }
    }
}
