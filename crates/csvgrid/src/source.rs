//! Byte sources: where raw file content comes from.
//!
//! The engine only needs one capability from the outside world: read the
//! whole content as bytes, report its size, report failure. [`ByteSource`]
//! is that seam; [`FileSource`] is the production implementation and
//! [`MemorySource`] serves tests and examples that never touch disk.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// Reads an entire source into memory.
pub trait ByteSource {
    /// The whole content as bytes.
    ///
    /// # Errors
    ///
    /// [`Error::Io`](crate::Error::Io) if the source cannot be read.
    fn load(&mut self) -> Result<Vec<u8>>;

    /// Size of the content in bytes, without loading it.
    ///
    /// # Errors
    ///
    /// [`Error::Io`](crate::Error::Io) if the source cannot be inspected.
    fn size(&self) -> Result<u64>;
}

/// A file on disk. The handle is scoped to each call; nothing is held
/// open between calls.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// A source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ByteSource for FileSource {
    fn load(&mut self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }

    fn size(&self) -> Result<u64> {
        Ok(fs::metadata(&self.path)?.len())
    }
}

/// Bytes already in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    bytes: Vec<u8>,
}

impl MemorySource {
    /// A source yielding `bytes`.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl ByteSource for MemorySource {
    fn load(&mut self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }

    fn size(&self) -> Result<u64> {
        Ok(self.bytes.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn memory_source_reports_size_and_content() {
        let mut src = MemorySource::new(&b"a;b\r\n"[..]);
        assert_eq!(src.size().unwrap(), 5);
        assert_eq!(src.load().unwrap(), b"a;b\r\n");
    }

    #[test]
    fn file_source_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src.csv");
        std::fs::write(&path, b"x\r\n").unwrap();

        let mut src = FileSource::new(&path);
        assert_eq!(src.size().unwrap(), 3);
        assert_eq!(src.load().unwrap(), b"x\r\n");
    }

    #[test]
    fn missing_file_reports_io() {
        let mut src = FileSource::new("/nonexistent/csvgrid-missing.csv");
        match src.load() {
            Err(Error::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
        match src.size() {
            Err(Error::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
