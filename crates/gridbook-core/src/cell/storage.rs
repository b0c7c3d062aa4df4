//! Sparse cell storage
//!
//! Only non-empty cells are stored, using a row-based BTreeMap structure.
//! The grid also tracks logical dimensions (`row_count`/`col_count`) that
//! grow on writes past the current edge and shrink only through explicit
//! row/column deletion.

use std::collections::BTreeMap;

use super::{CellValue, SharedString};

/// Sparse row-major storage for grid cells
///
/// Structure: `BTreeMap<row_index, BTreeMap<col_index, SharedString>>`.
/// Cells hold raw text only; numeric interpretation happens at read time
/// via [`CellValue::as_number`].
#[derive(Debug, Default)]
pub struct CellStorage {
    /// Row index → column map
    rows: BTreeMap<u32, BTreeMap<u32, SharedString>>,

    /// Logical row count (grows on writes, shrinks on row deletion)
    row_count: u32,

    /// Logical column count
    col_count: u32,
}

impl CellStorage {
    /// Create a new empty cell storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with initial logical dimensions
    pub fn with_size(rows: u32, cols: u32) -> Self {
        Self {
            rows: BTreeMap::new(),
            row_count: rows,
            col_count: cols,
        }
    }

    /// Logical number of rows
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Logical number of columns
    pub fn col_count(&self) -> u32 {
        self.col_count
    }

    /// Get a cell's value
    ///
    /// Never-written coordinates read as [`CellValue::Empty`], in or out
    /// of the logical bounds.
    pub fn get(&self, row: u32, col: u32) -> CellValue {
        match self.get_text(row, col) {
            Some(s) => CellValue::Text(s.clone()),
            None => CellValue::Empty,
        }
    }

    /// Get a cell's raw text, if any is stored
    pub fn get_text(&self, row: u32, col: u32) -> Option<&SharedString> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Set a cell's text
    ///
    /// Empty text removes the stored entry. The logical dimensions grow
    /// to cover the written coordinate either way.
    pub fn set<S: AsRef<str>>(&mut self, row: u32, col: u32, text: S) {
        self.row_count = self.row_count.max(row + 1);
        self.col_count = self.col_count.max(col + 1);

        let text = text.as_ref();
        if text.is_empty() {
            if let Some(row_map) = self.rows.get_mut(&row) {
                row_map.remove(&col);
                if row_map.is_empty() {
                    self.rows.remove(&row);
                }
            }
        } else {
            self.rows
                .entry(row)
                .or_default()
                .insert(col, SharedString::new(text));
        }
    }

    /// Remove a cell, returning its text if it was stored
    pub fn remove(&mut self, row: u32, col: u32) -> Option<SharedString> {
        let result = self.rows.get_mut(&row).and_then(|r| r.remove(&col));

        if let Some(row_map) = self.rows.get(&row) {
            if row_map.is_empty() {
                self.rows.remove(&row);
            }
        }

        result
    }

    /// Clear all cells and reset the logical dimensions
    pub fn clear(&mut self) {
        self.rows.clear();
        self.row_count = 0;
        self.col_count = 0;
    }

    /// Get the number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Check if no cell holds text
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the bounds of used cells
    ///
    /// Returns (min_row, min_col, max_row, max_col) or None if empty.
    pub fn used_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        let min_row = *self.rows.keys().next()?;
        let max_row = *self.rows.keys().next_back()?;

        let mut min_col = u32::MAX;
        let mut max_col = 0u32;

        for row_data in self.rows.values() {
            if let Some(&col) = row_data.keys().next() {
                min_col = min_col.min(col);
            }
            if let Some(&col) = row_data.keys().next_back() {
                max_col = max_col.max(col);
            }
        }

        Some((min_row, min_col, max_row, max_col))
    }

    /// Iterate over all non-empty cells in row order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &SharedString)> {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |(&col, text)| (row, col, text)))
    }

    /// Iterate over non-empty cells in a specific row
    pub fn iter_row(&self, row: u32) -> impl Iterator<Item = (u32, &SharedString)> {
        self.rows
            .get(&row)
            .into_iter()
            .flat_map(|cols| cols.iter().map(|(&col, text)| (col, text)))
    }

    /// Insert an empty row at `at`, shifting rows at or below it down
    pub fn insert_row(&mut self, at: u32) {
        let shifted: Vec<(u32, BTreeMap<u32, SharedString>)> = self
            .rows
            .split_off(&at)
            .into_iter()
            .map(|(row, cols)| (row + 1, cols))
            .collect();
        self.rows.extend(shifted);
        self.row_count = self.row_count.max(at) + 1;
    }

    /// Delete the row at `at`, shifting rows below it up
    ///
    /// Deleting past the logical bounds is a no-op.
    pub fn delete_row(&mut self, at: u32) {
        if at >= self.row_count {
            return;
        }
        let mut tail = self.rows.split_off(&at);
        tail.remove(&at);
        self.rows
            .extend(tail.into_iter().map(|(row, cols)| (row - 1, cols)));
        self.row_count -= 1;
    }

    /// Insert an empty column at `at`, shifting columns at or right of it
    pub fn insert_col(&mut self, at: u32) {
        for cols in self.rows.values_mut() {
            let shifted: Vec<(u32, SharedString)> = cols
                .split_off(&at)
                .into_iter()
                .map(|(col, text)| (col + 1, text))
                .collect();
            cols.extend(shifted);
        }
        self.col_count = self.col_count.max(at) + 1;
    }

    /// Delete the column at `at`, shifting columns right of it left
    ///
    /// Deleting past the logical bounds is a no-op.
    pub fn delete_col(&mut self, at: u32) {
        if at >= self.col_count {
            return;
        }
        let mut emptied = Vec::new();
        for (&row, cols) in self.rows.iter_mut() {
            let mut tail = cols.split_off(&at);
            tail.remove(&at);
            cols.extend(tail.into_iter().map(|(col, text)| (col - 1, text)));
            if cols.is_empty() {
                emptied.push(row);
            }
        }
        for row in emptied {
            self.rows.remove(&row);
        }
        self.col_count -= 1;
    }
}
