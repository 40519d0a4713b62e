use core::fmt;

use bstr::{BStr, ByteSlice};

/// Maximum number of end-of-line bytes.
const EOL_MAX: usize = 3;

/// Format configuration for parsing and serialization.
///
/// The scanner and the serializer read these values on every call; nothing
/// is cached, so changing a field takes effect on the next parse or write.
///
/// A cell value must not itself contain the separator, the comment marker,
/// or a control character; the engine's setters enforce this via
/// [`sanitize`](crate::sanitize::sanitize).
///
/// # Default
///
/// Separator `;`, comment marker `#`, substitute `:`, end of line `"\r\n"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Format {
    /// Byte dividing cells within a data line.
    ///
    /// # Default
    ///
    /// `b';'`
    pub separator: u8,

    /// Byte introducing a comment line. Once seen on a line (outside a
    /// comment), the rest of the line is comment text; the marker itself is
    /// stored in neither cells nor comments.
    ///
    /// # Default
    ///
    /// `b'#'`
    pub comment: u8,

    /// Replacement byte used when sanitizing user-supplied text that would
    /// otherwise corrupt the written structure.
    ///
    /// # Default
    ///
    /// `b':'`
    pub substitute: u8,

    /// Bytes written after every comment and every row.
    ///
    /// On read, `\r` and `\n` are always accepted as terminators regardless
    /// of this setting.
    ///
    /// # Default
    ///
    /// `"\r\n"`
    pub eol: EndOfLine,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            separator: b';',
            comment: b'#',
            substitute: b':',
            eol: EndOfLine::default(),
        }
    }
}

/// End-of-line marker: up to [`EOL_MAX`] bytes, stored inline.
///
/// Longer inputs are truncated; an empty marker is allowed but means rows
/// and comments run together on write.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndOfLine {
    bytes: [u8; EOL_MAX],
    len: u8,
}

impl EndOfLine {
    /// Builds a marker from the first [`EOL_MAX`] bytes of `bytes`.
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        let len = bytes.len().min(EOL_MAX);
        let mut buf = [0u8; EOL_MAX];
        buf[..len].copy_from_slice(&bytes[..len]);
        Self {
            bytes: buf,
            len: len as u8,
        }
    }

    /// The marker bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    /// The marker bytes as a byte string.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        self.as_bytes().as_bstr()
    }
}

impl Default for EndOfLine {
    fn default() -> Self {
        Self::new(b"\r\n")
    }
}

impl fmt::Debug for EndOfLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EndOfLine({:?})", self.as_bstr())
    }
}

impl From<&[u8]> for EndOfLine {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for EndOfLine {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}
