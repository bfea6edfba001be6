use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::CellCoord;
use crate::map::Map;

/// Sparse storage of materialized elements.
///
/// Data cells are keyed by `(row, column)` and additionally indexed by column, so
/// column-scoped queries cost time proportional to that column's occupancy. Header cells live
/// in two separate maps keyed by a single index.
#[derive(Clone, Debug)]
pub struct CellStore<T> {
    cells: Map<CellCoord, T>,
    columns: Map<usize, BTreeSet<usize>>,
    header_columns: Map<usize, T>,
    header_rows: Map<usize, T>,
}

impl<T> Default for CellStore<T> {
    fn default() -> Self {
        Self {
            cells: Map::default(),
            columns: Map::default(),
            header_columns: Map::default(),
            header_rows: Map::default(),
        }
    }
}

impl<T> CellStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.cells.get(&CellCoord::new(row, column))
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.cells.get_mut(&CellCoord::new(row, column))
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.cells.contains_key(&CellCoord::new(row, column))
    }

    /// Stores `element` at `(row, column)` and returns the element it displaced, if any.
    ///
    /// Callers are expected to remove the previous occupant first; a `Some` return means that
    /// contract was broken.
    pub fn put(&mut self, row: usize, column: usize, element: T) -> Option<T> {
        self.columns.entry(column).or_default().insert(row);
        self.cells.insert(CellCoord::new(row, column), element)
    }

    pub fn remove(&mut self, row: usize, column: usize) -> Option<T> {
        let removed = self.cells.remove(&CellCoord::new(row, column))?;
        if let Some(rows) = self.columns.get_mut(&column) {
            rows.remove(&row);
            if rows.is_empty() {
                self.columns.remove(&column);
            }
        }
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// An owned snapshot of every occupied data coordinate, in no particular order.
    pub fn coords(&self) -> Vec<CellCoord> {
        self.cells.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, &T)> + '_ {
        self.cells.iter().map(|(&coord, element)| (coord, element))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CellCoord, &mut T)> + '_ {
        self.cells.iter_mut().map(|(&coord, element)| (coord, element))
    }

    /// Rows occupied in `column`, ascending.
    pub fn column_rows(&self, column: usize) -> Vec<usize> {
        self.columns
            .get(&column)
            .map(|rows| rows.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Data elements of one column as `(row, element)`, ascending by row.
    pub fn column_elements(&self, column: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.columns.get(&column).into_iter().flat_map(move |rows| {
            rows.iter().filter_map(move |&row| {
                self.cells
                    .get(&CellCoord::new(row, column))
                    .map(|element| (row, element))
            })
        })
    }

    /// Removes and returns every data element of `column`, ascending by row.
    pub fn take_column(&mut self, column: usize) -> Vec<(usize, T)> {
        let Some(rows) = self.columns.remove(&column) else {
            return Vec::new();
        };
        rows.into_iter()
            .filter_map(|row| {
                self.cells
                    .remove(&CellCoord::new(row, column))
                    .map(|element| (row, element))
            })
            .collect()
    }

    pub fn header_column(&self, column: usize) -> Option<&T> {
        self.header_columns.get(&column)
    }

    pub fn header_column_mut(&mut self, column: usize) -> Option<&mut T> {
        self.header_columns.get_mut(&column)
    }

    pub fn put_header_column(&mut self, column: usize, element: T) -> Option<T> {
        self.header_columns.insert(column, element)
    }

    pub fn remove_header_column(&mut self, column: usize) -> Option<T> {
        self.header_columns.remove(&column)
    }

    pub fn header_columns(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.header_columns.iter().map(|(&c, element)| (c, element))
    }

    pub fn header_columns_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        self.header_columns.iter_mut().map(|(&c, element)| (c, element))
    }

    pub fn header_column_indices(&self) -> Vec<usize> {
        self.header_columns.keys().copied().collect()
    }

    pub fn header_row(&self, row: usize) -> Option<&T> {
        self.header_rows.get(&row)
    }

    pub fn put_header_row(&mut self, row: usize, element: T) -> Option<T> {
        self.header_rows.insert(row, element)
    }

    pub fn remove_header_row(&mut self, row: usize) -> Option<T> {
        self.header_rows.remove(&row)
    }

    pub fn header_rows(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.header_rows.iter().map(|(&r, element)| (r, element))
    }

    pub fn header_row_indices(&self) -> Vec<usize> {
        self.header_rows.keys().copied().collect()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.columns.clear();
        self.header_columns.clear();
        self.header_rows.clear();
    }

    /// Removes every element (data and headers) and returns them.
    pub fn drain_all(&mut self) -> Vec<T> {
        self.columns.clear();
        let mut out = Vec::with_capacity(
            self.cells.len() + self.header_columns.len() + self.header_rows.len(),
        );
        out.extend(core::mem::take(&mut self.cells).into_values());
        out.extend(core::mem::take(&mut self.header_columns).into_values());
        out.extend(core::mem::take(&mut self.header_rows).into_values());
        out
    }
}
