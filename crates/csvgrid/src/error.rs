use thiserror::Error;

/// Alias for results produced by engine-level operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Failures surfaced by [`CsvFile`](crate::CsvFile) and [`Table`](crate::Table)
/// operations.
///
/// Out-of-bounds cell or comment access is deliberately *not* an error:
/// getters return `None` and setters do nothing, matching the tolerant
/// nature of a data-entry API.
#[derive(Debug, Error)]
pub enum Error {
    /// The file was missing, unreadable, or unwritable.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Growing the backing storage failed. The table keeps its previous
    /// counts and contents.
    #[error("allocation of backing storage failed")]
    Allocation,

    /// Reserved: a measurement or read was invoked on an empty or already
    /// exhausted source. Shipped paths treat an empty source as zero counts
    /// instead, so this kind is never produced today.
    #[error("end of data")]
    EndOfData,
}
