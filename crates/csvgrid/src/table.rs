//! The dense 2-D cell store and comment list.
//!
//! What it does
//! - Owns a rectangle of optional byte-string cells plus an independently
//!   indexed list of optional comment lines.
//! - Tracks logical counts separately from allocated capacities so repeated
//!   resizes reuse storage instead of reallocating.
//! - Grows fallibly: reservation failures surface as
//!   [`Error::Allocation`] with counts and contents untouched.
//!
//! Invariants
//! - The allocated region is always a full rectangle: `cells.len()` rows,
//!   each of `allocated_columns` slots, so every logical cell `(r, c)` with
//!   `r < rows`, `c < columns` is backed by a slot.
//! - Every slot outside the logical bounds is `None`. Shrinking a dimension
//!   drops all values in the vacated range before the count changes, so a
//!   later in-capacity grow exposes only unset slots.
//! - A stored value is exclusively owned by its slot; storing into an
//!   occupied slot drops the previous value first.
//!
//! Values are stored verbatim here; sanitization of user-supplied text is
//! the engine's concern, not the table's.

use bstr::{BStr, BString, ByteSlice};

use crate::error::{Error, Result};

/// Rectangular grid of optional cells plus a comment list.
///
/// All accessors are bounds-checked: out-of-range getters return `None`,
/// out-of-range setters do nothing. `resize` is the only operation that can
/// fail.
#[derive(Debug, Default)]
pub struct Table {
    /// `cells.len()` is the allocated row capacity; every inner Vec has
    /// exactly `allocated_columns` slots.
    cells: Vec<Vec<Option<BString>>>,
    comments: Vec<Option<BString>>,
    allocated_columns: usize,
    rows: usize,
    columns: usize,
    comment_count: usize,
}

impl Table {
    /// Creates an empty table with no allocated storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table pre-sized to the given dimensions, all slots unset.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if the backing storage cannot be reserved.
    pub fn with_size(rows: usize, columns: usize, comments: usize) -> Result<Self> {
        let mut table = Self::new();
        table.resize(rows, columns, comments)?;
        Ok(table)
    }

    /// Number of logical rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of logical columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Number of logical comment slots.
    #[must_use]
    pub fn comment_count(&self) -> usize {
        self.comment_count
    }

    /// The cell at `(row, column)`, or `None` if unset or out of range.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&BStr> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells[row][column].as_ref().map(|v| v.as_bstr())
    }

    /// Stores a cell value, dropping any previous value in the slot.
    /// Out-of-range coordinates are a silent no-op.
    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<BString>) {
        if row >= self.rows || column >= self.columns {
            return;
        }
        self.cells[row][column] = Some(value.into());
    }

    /// The comment at `index`, or `None` if unset or out of range.
    #[must_use]
    pub fn comment(&self, index: usize) -> Option<&BStr> {
        if index >= self.comment_count {
            return None;
        }
        self.comments[index].as_ref().map(|v| v.as_bstr())
    }

    /// Stores a comment line, dropping any previous value in the slot.
    /// An out-of-range index is a silent no-op.
    pub fn set_comment(&mut self, index: usize, value: impl Into<BString>) {
        if index >= self.comment_count {
            return;
        }
        self.comments[index] = Some(value.into());
    }

    /// Resizes all three dimensions independently; the order of dimensions
    /// never affects the result.
    ///
    /// Growing a dimension past its capacity reserves more storage and
    /// exposes unset slots; growing within capacity just exposes the
    /// already-`None` slots. Shrinking drops every value in the vacated
    /// range but keeps the storage for reuse. Existing values inside the
    /// new bounds are never touched.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if reserving storage fails. All reservations
    /// for a dimension are made before any slot is exposed, so on failure
    /// the counts and contents are exactly as before the call.
    pub fn resize(&mut self, rows: usize, columns: usize, comments: usize) -> Result<()> {
        // Rows.
        if rows > self.cells.len() {
            let extra = rows - self.cells.len();
            self.cells.try_reserve_exact(extra).map_err(|_| Error::Allocation)?;
            let mut fresh = Vec::new();
            fresh.try_reserve_exact(extra).map_err(|_| Error::Allocation)?;
            for _ in 0..extra {
                fresh.push(alloc_slots(self.allocated_columns)?);
            }
            self.cells.append(&mut fresh);
        } else if rows < self.rows {
            for row in &mut self.cells[rows..self.rows] {
                for slot in row.iter_mut() {
                    *slot = None;
                }
            }
        }
        self.rows = rows;

        // Columns: the whole allocated rectangle is widened, not just the
        // logical rows, so later row growth within capacity stays in step.
        if columns > self.allocated_columns {
            let extra = columns - self.allocated_columns;
            for row in &mut self.cells {
                row.try_reserve_exact(extra).map_err(|_| Error::Allocation)?;
            }
            for row in &mut self.cells {
                row.resize_with(columns, || None);
            }
            self.allocated_columns = columns;
        } else if columns < self.columns {
            for row in &mut self.cells[..self.rows] {
                for slot in &mut row[columns..self.columns] {
                    *slot = None;
                }
            }
        }
        self.columns = columns;

        // Comments.
        if comments > self.comments.len() {
            let extra = comments - self.comments.len();
            self.comments
                .try_reserve_exact(extra)
                .map_err(|_| Error::Allocation)?;
            self.comments.resize_with(comments, || None);
        } else if comments < self.comment_count {
            for slot in &mut self.comments[comments..self.comment_count] {
                *slot = None;
            }
        }
        self.comment_count = comments;

        Ok(())
    }

    /// Drops every stored value in every allocated slot without changing
    /// any count. Used before repopulating from a fresh parse.
    pub fn free_content(&mut self) {
        for row in &mut self.cells {
            for slot in row.iter_mut() {
                *slot = None;
            }
        }
        for slot in &mut self.comments {
            *slot = None;
        }
    }
}

/// One fallibly-allocated row of unset slots.
fn alloc_slots(len: usize) -> Result<Vec<Option<BString>>> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(len).map_err(|_| Error::Allocation)?;
    slots.resize_with(len, || None);
    Ok(slots)
}

// Capacity inspection for tests and the fuzz harness.
impl Table {
    /// Allocated row capacity (≥ `row_count`).
    #[must_use]
    pub fn allocated_rows(&self) -> usize {
        self.cells.len()
    }

    /// Allocated column capacity (≥ `column_count`).
    #[must_use]
    pub fn allocated_columns(&self) -> usize {
        self.allocated_columns
    }

    /// Allocated comment capacity (≥ `comment_count`).
    #[must_use]
    pub fn allocated_comments(&self) -> usize {
        self.comments.len()
    }
}
