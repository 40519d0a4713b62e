//! An in-memory model for delimited tabular text files.
//!
//! `csvgrid` loads a whole file into memory, parses it into a rectangular
//! grid of cells plus a separate list of comment lines, lets you mutate any
//! cell or comment, and serializes the model back to a byte stream. Cells
//! are opaque single-byte text ([`bstr::BString`]); there is no quoting or
//! escaping syntax, no typed values, and no Unicode-aware processing.
//!
//! The on-disk dialect is line oriented: a physical line is either a
//! comment (the comment marker followed by arbitrary text) or a data line
//! (cells separated by the separator character). The marker, separator,
//! substitute character, and end-of-line bytes are all configurable via
//! [`Format`].
//!
//! # Example
//!
//! ```
//! use csvgrid::CsvFile;
//!
//! let mut csv = CsvFile::with_size(2, 2, 1)?;
//! csv.set_comment(0, "hdr");
//! csv.set_cell(0, 0, "x");
//! csv.set_cell(1, 1, "y");
//!
//! let mut out = Vec::new();
//! csvgrid::write_table(&mut out, csv.table(), csv.format())?;
//! assert_eq!(out, b"#hdr\r\nx;\r\n;y\r\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Reading and writing files goes through [`CsvFile::read`] and
//! [`CsvFile::write`]; [`CsvFile::assess`] previews a file's shape (rows,
//! columns, comments, longest line) without touching the table.

mod error;
mod file;
mod format;
pub mod sanitize;
pub mod scanner;
pub mod source;
mod table;
mod writer;

pub use error::{Error, Result};
pub use file::CsvFile;
pub use format::{EndOfLine, Format};
pub use scanner::Measurement;
pub use table::Table;
pub use writer::write_table;
