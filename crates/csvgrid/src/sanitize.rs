//! Rewrites text that would corrupt the written structure.

use bstr::BString;

use crate::format::Format;

/// Returns `text` with every structure-breaking byte replaced by the
/// substitute byte from `format`.
///
/// A byte is structure-breaking if it is a control character other than tab
/// (`< 0x20`, not `\t`), the active separator, or the active comment
/// marker. Bytes `>= 0x80` pass through unchanged.
///
/// Applied by [`CsvFile`](crate::CsvFile) to every cell and comment value
/// supplied through its setters; values produced by parsing a file are
/// taken as already well-formed and are stored verbatim.
///
/// ```
/// use csvgrid::{Format, sanitize::sanitize};
///
/// let fmt = Format::default();
/// assert_eq!(sanitize("Bad ; , Cell \r\n \n", &fmt), "Bad : , Cell :: :");
/// ```
pub fn sanitize(text: impl Into<BString>, format: &Format) -> BString {
    let mut text = text.into();
    for b in text.iter_mut() {
        if (*b < 0x20 && *b != b'\t') || *b == format.separator || *b == format.comment {
            *b = format.substitute;
        }
    }
    text
}
