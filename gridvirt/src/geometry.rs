use alloc::vec::Vec;

use crate::prefix::PrefixSums;
use crate::{Axis, GridError, Result};

/// Column widths, row heights, pinned header sizes, and the prefix sums derived from them.
///
/// Mutations only touch the raw size sequences and mark the table dirty. Call
/// [`GeometryTable::invalidate`] before the next lookup; prefix-based reads on a dirty table
/// are a contract violation (debug-asserted, logged with the `tracing` feature).
#[derive(Clone, Debug, Default)]
pub struct GeometryTable {
    row_count: usize,
    column_count: usize,
    column_widths: Vec<u32>,
    row_heights: Vec<u32>,
    header_row_width: u32,
    header_column_height: u32,

    column_sums: PrefixSums,
    row_sums: PrefixSums,
    dirty: bool,
}

impl GeometryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the grid dimensions and resets every size to zero.
    pub fn initialize(&mut self, row_count: usize, column_count: usize) {
        vdebug!(row_count, column_count, "GeometryTable::initialize");
        self.row_count = row_count;
        self.column_count = column_count;
        self.column_widths = alloc::vec![0; column_count];
        self.row_heights = alloc::vec![0; row_count];
        self.dirty = true;
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_column_width(&mut self, column: usize, width: u32) -> Result<()> {
        let count = self.column_count;
        let slot = self
            .column_widths
            .get_mut(column)
            .ok_or(GridError::IndexOutOfRange {
                axis: Axis::Column,
                index: column,
                count,
            })?;
        *slot = width;
        self.dirty = true;
        Ok(())
    }

    pub fn set_row_height(&mut self, row: usize, height: u32) -> Result<()> {
        let count = self.row_count;
        let slot = self
            .row_heights
            .get_mut(row)
            .ok_or(GridError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                count,
            })?;
        *slot = height;
        self.dirty = true;
        Ok(())
    }

    /// Replaces all column widths at once. The length is checked by the next `invalidate`.
    pub fn set_column_widths(&mut self, widths: Vec<u32>) {
        self.column_widths = widths;
        self.dirty = true;
    }

    /// Replaces all row heights at once. The length is checked by the next `invalidate`.
    pub fn set_row_heights(&mut self, heights: Vec<u32>) {
        self.row_heights = heights;
        self.dirty = true;
    }

    pub fn set_header_sizes(&mut self, header_row_width: u32, header_column_height: u32) {
        self.header_row_width = header_row_width;
        self.header_column_height = header_column_height;
    }

    /// Rebuilds both prefix-sum tables in `O(rows + columns)`.
    ///
    /// Fails when a size sequence no longer matches its declared count; the table stays
    /// dirty in that case.
    pub fn invalidate(&mut self) -> Result<()> {
        if self.column_widths.len() != self.column_count {
            return Err(GridError::GeometryMismatch {
                axis: Axis::Column,
                expected: self.column_count,
                actual: self.column_widths.len(),
            });
        }
        if self.row_heights.len() != self.row_count {
            return Err(GridError::GeometryMismatch {
                axis: Axis::Row,
                expected: self.row_count,
                actual: self.row_heights.len(),
            });
        }
        self.column_sums = PrefixSums::from_sizes(&self.column_widths);
        self.row_sums = PrefixSums::from_sizes(&self.row_heights);
        self.dirty = false;
        vtrace!(
            columns = self.column_count,
            rows = self.row_count,
            "GeometryTable::invalidate"
        );
        Ok(())
    }

    pub fn column_width(&self, column: usize) -> u32 {
        self.column_widths.get(column).copied().unwrap_or(0)
    }

    pub fn row_height(&self, row: usize) -> u32 {
        self.row_heights.get(row).copied().unwrap_or(0)
    }

    pub fn column_widths(&self) -> &[u32] {
        &self.column_widths
    }

    pub fn row_heights(&self) -> &[u32] {
        &self.row_heights
    }

    pub fn header_row_width(&self) -> u32 {
        self.header_row_width
    }

    pub fn header_column_height(&self) -> u32 {
        self.header_column_height
    }

    /// Total width of `count` columns starting at `from_column`.
    pub fn span_width(&self, from_column: usize, count: usize) -> u64 {
        self.check_fresh();
        self.column_sums.span(from_column, count)
    }

    /// Total height of `count` rows starting at `from_row`.
    pub fn span_height(&self, from_row: usize, count: usize) -> u64 {
        self.check_fresh();
        self.row_sums.span(from_row, count)
    }

    /// Maps a content-space x coordinate to a column, clamped to `[0, column_count - 1]`.
    pub fn column_for_x(&self, x: i64) -> usize {
        self.check_fresh();
        self.column_sums.index_at(u64::try_from(x).unwrap_or(0))
    }

    /// Maps a content-space y coordinate to a row, clamped to `[0, row_count - 1]`.
    pub fn row_for_y(&self, y: i64) -> usize {
        self.check_fresh();
        self.row_sums.index_at(u64::try_from(y).unwrap_or(0))
    }

    /// Content width including the pinned header column.
    pub fn full_width(&self) -> u64 {
        self.check_fresh();
        self.column_sums
            .total()
            .saturating_add(self.header_row_width as u64)
    }

    /// Content height including the pinned header row.
    pub fn full_height(&self) -> u64 {
        self.check_fresh();
        self.row_sums
            .total()
            .saturating_add(self.header_column_height as u64)
    }

    /// Exchanges the widths of two columns. Out-of-range indices are ignored.
    pub fn swap_columns(&mut self, a: usize, b: usize) {
        if a >= self.column_widths.len() || b >= self.column_widths.len() {
            vwarn!(a, b, "GeometryTable::swap_columns: index out of range");
            return;
        }
        self.column_widths.swap(a, b);
        self.dirty = true;
    }

    fn check_fresh(&self) {
        if self.dirty {
            vwarn!("GeometryTable read before invalidate");
        }
        debug_assert!(!self.dirty, "GeometryTable read before invalidate");
    }
}
