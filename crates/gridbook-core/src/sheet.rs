//! Sheet type
//!
//! The single access path callers use: cell reads and writes, structural
//! edits, conditional formatting, sorting, and fills all go through one
//! `Sheet`. The type is not internally synchronized; embedders serialize
//! access themselves.

use crate::autofill;
use crate::cell::{CellAddress, CellRange, CellStorage, CellValue};
use crate::error::Result;
use crate::conditional_format::{ConditionalRule, RuleSet};
use crate::sort::{self, SortSpec};
use crate::style::ComputedStyle;

/// A single grid of cells with its formatting rules
#[derive(Debug, Default)]
pub struct Sheet {
    /// Cell storage
    cells: CellStorage,
    /// Conditional formatting rules
    rules: RuleSet,
    /// Freeze pane settings
    freeze_panes: Option<FreezePanes>,
}

impl Sheet {
    /// Create a new empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sheet with initial logical dimensions
    pub fn with_size(rows: u32, cols: u32) -> Self {
        Self {
            cells: CellStorage::with_size(rows, cols),
            rules: RuleSet::new(),
            freeze_panes: None,
        }
    }

    /// Label for a column index (0 = "A", 26 = "AA")
    pub fn column_label(col: u32) -> String {
        CellAddress::column_to_letters(col)
    }

    /// Index for a column label, case-insensitively
    pub fn column_index(label: &str) -> Result<u32> {
        CellAddress::letters_to_column(label)
    }

    // === Cell Access ===

    /// Get a cell's value
    pub fn get_cell(&self, row: u32, col: u32) -> CellValue {
        self.cells.get(row, col)
    }

    /// Set a cell's text
    ///
    /// Empty text clears the cell; the grid grows to cover the write.
    pub fn set_cell<S: AsRef<str>>(&mut self, row: u32, col: u32, text: S) {
        self.cells.set(row, col, text);
    }

    /// Logical number of rows
    pub fn row_count(&self) -> u32 {
        self.cells.row_count()
    }

    /// Logical number of columns
    pub fn col_count(&self) -> u32 {
        self.cells.col_count()
    }

    /// Number of non-empty cells
    pub fn used_cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// The bounding range of all non-empty cells
    ///
    /// An empty sheet reports the single-cell range A1.
    pub fn used_range(&self) -> CellRange {
        match self.cells.used_bounds() {
            Some((min_row, min_col, max_row, max_col)) => {
                CellRange::from_indices(min_row, min_col, max_row, max_col)
            }
            None => CellRange::from_indices(0, 0, 0, 0),
        }
    }

    /// Direct access to the underlying storage
    pub fn cells(&self) -> &CellStorage {
        &self.cells
    }

    /// Clear all cells, rules, and frozen panes
    pub fn clear(&mut self) {
        self.cells.clear();
        self.rules.clear();
        self.freeze_panes = None;
    }

    // === Structural Edits ===

    /// Insert an empty row, shifting rows at or below `at` down
    pub fn insert_row(&mut self, at: u32) {
        self.cells.insert_row(at);
    }

    /// Delete a row, shifting rows below it up
    pub fn delete_row(&mut self, at: u32) {
        self.cells.delete_row(at);
    }

    /// Insert an empty column, shifting columns at or right of `at`
    pub fn insert_column(&mut self, at: u32) {
        self.cells.insert_col(at);
    }

    /// Delete a column, shifting columns right of it left
    pub fn delete_column(&mut self, at: u32) {
        self.cells.delete_col(at);
    }

    // === Conditional Formatting ===

    /// Append a conditional formatting rule
    pub fn add_conditional_rule(&mut self, rule: ConditionalRule) {
        self.rules.add(rule);
    }

    /// The rules in evaluation order
    pub fn conditional_rules(&self) -> &[ConditionalRule] {
        self.rules.rules()
    }

    /// Compute the conditional style of a cell
    pub fn style_for(&self, row: u32, col: u32) -> ComputedStyle {
        self.rules.style_for(&self.cells, row, col)
    }

    // === Sorting and Fills ===

    /// Sort all rows by a column
    pub fn sort(&mut self, spec: SortSpec) {
        sort::sort_rows(&mut self.cells, spec);
    }

    /// Auto-fill the selection from its first column
    pub fn auto_fill(&mut self, range: &CellRange) {
        autofill::auto_fill(&mut self.cells, range);
    }

    /// Stamp the selection's top-left cell into every row below the top
    ///
    /// The one source value covers the whole selection width; a
    /// single-row selection is a no-op.
    pub fn fill_down(&mut self, range: &CellRange) {
        if range.row_count() < 2 {
            return;
        }
        let text = self
            .cells
            .get_text(range.start.row, range.start.col)
            .map(|s| s.as_str().to_string());
        for row in range.start.row + 1..=range.end.row {
            for col in range.start.col..=range.end.col {
                match &text {
                    Some(t) => self.cells.set(row, col, t),
                    None => self.cells.set(row, col, ""),
                }
            }
        }
    }

    /// Stamp the selection's top-left cell into every column after the first
    ///
    /// The one source value covers the whole selection height; a
    /// single-column selection is a no-op.
    pub fn fill_right(&mut self, range: &CellRange) {
        if range.col_count() < 2 {
            return;
        }
        let text = self
            .cells
            .get_text(range.start.row, range.start.col)
            .map(|s| s.as_str().to_string());
        for row in range.start.row..=range.end.row {
            for col in range.start.col + 1..=range.end.col {
                match &text {
                    Some(t) => self.cells.set(row, col, t),
                    None => self.cells.set(row, col, ""),
                }
            }
        }
    }

    // === Freeze Panes ===

    /// Get freeze pane settings
    pub fn freeze_panes(&self) -> Option<&FreezePanes> {
        self.freeze_panes.as_ref()
    }

    /// Set freeze panes
    ///
    /// `(0, 0)` removes any existing freeze.
    pub fn set_freeze_panes(&mut self, row: u32, col: u32) {
        if row == 0 && col == 0 {
            self.freeze_panes = None;
        } else {
            self.freeze_panes = Some(FreezePanes { row, col });
        }
    }

    /// Remove freeze panes
    pub fn unfreeze_panes(&mut self) {
        self.freeze_panes = None;
    }
}

/// Freeze pane settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreezePanes {
    /// First unfrozen row
    pub row: u32,
    /// First unfrozen column
    pub col: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortSpec;
    use crate::style::Color;

    #[test]
    fn test_column_label_helpers() {
        assert_eq!(Sheet::column_label(27), "AB");
        assert_eq!(Sheet::column_index("ab").unwrap(), 27);
        assert!(Sheet::column_index("a b").is_err());
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut sheet = Sheet::new();
        sheet.set_cell(2, 1, "hello");

        assert_eq!(sheet.get_cell(2, 1).as_text(), Some("hello"));
        assert!(sheet.get_cell(0, 0).is_empty());
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.col_count(), 2);
    }

    #[test]
    fn test_used_range_sentinel_when_empty() {
        let sheet = Sheet::new();
        let range = sheet.used_range();
        assert_eq!(range.start.row, 0);
        assert_eq!(range.end.col, 0);
        assert_eq!(range.cell_count(), 1);
    }

    #[test]
    fn test_used_range_bounds() {
        let mut sheet = Sheet::new();
        sheet.set_cell(2, 3, "a");
        sheet.set_cell(7, 1, "b");

        let range = sheet.used_range();
        assert_eq!(range.to_a1_string(), "B3:D8");
        assert_eq!(sheet.used_cell_count(), 2);
    }

    #[test]
    fn test_fill_down_stamps_top_left_cell() {
        let mut sheet = Sheet::new();
        sheet.set_cell(0, 0, "h1");
        sheet.set_cell(0, 1, "h2");
        sheet.set_cell(2, 0, "stale");

        sheet.fill_down(&CellRange::parse("A1:B3").unwrap());

        // The top row is the source and stays as typed
        assert_eq!(sheet.get_cell(0, 0).as_text(), Some("h1"));
        assert_eq!(sheet.get_cell(0, 1).as_text(), Some("h2"));
        // Every cell below gets the top-left value, second column included
        for row in 1..3 {
            assert_eq!(sheet.get_cell(row, 0).as_text(), Some("h1"));
            assert_eq!(sheet.get_cell(row, 1).as_text(), Some("h1"));
        }
    }

    #[test]
    fn test_fill_right_stamps_top_left_cell() {
        let mut sheet = Sheet::new();
        sheet.set_cell(0, 0, "L1");
        sheet.set_cell(1, 0, "L2");

        sheet.fill_right(&CellRange::parse("A1:C2").unwrap());

        // The left column is untouched; both filled columns get A1's value
        assert_eq!(sheet.get_cell(1, 0).as_text(), Some("L2"));
        for col in 1..3 {
            assert_eq!(sheet.get_cell(0, col).as_text(), Some("L1"));
            assert_eq!(sheet.get_cell(1, col).as_text(), Some("L1"));
        }
    }

    #[test]
    fn test_fill_down_with_empty_source_clears() {
        let mut sheet = Sheet::new();
        sheet.set_cell(1, 0, "old");

        sheet.fill_down(&CellRange::parse("A1:A2").unwrap());

        assert!(sheet.get_cell(1, 0).is_empty());
    }

    #[test]
    fn test_fills_need_two_rows_or_columns() {
        let mut sheet = Sheet::new();
        sheet.set_cell(0, 0, "v");
        sheet.set_cell(0, 1, "keep");
        sheet.set_cell(1, 0, "keep");

        sheet.fill_down(&CellRange::parse("A1:B1").unwrap());
        sheet.fill_right(&CellRange::parse("A1:A2").unwrap());

        assert_eq!(sheet.get_cell(0, 1).as_text(), Some("keep"));
        assert_eq!(sheet.get_cell(1, 0).as_text(), Some("keep"));
    }

    #[test]
    fn test_freeze_panes() {
        let mut sheet = Sheet::new();
        assert!(sheet.freeze_panes().is_none());

        sheet.set_freeze_panes(1, 0);
        assert_eq!(sheet.freeze_panes(), Some(&FreezePanes { row: 1, col: 0 }));

        sheet.set_freeze_panes(0, 0);
        assert!(sheet.freeze_panes().is_none());
    }

    #[test]
    fn test_sort_and_style_through_facade() {
        let mut sheet = Sheet::new();
        sheet.set_cell(0, 0, "2");
        sheet.set_cell(1, 0, "1");
        sheet.add_conditional_rule(ConditionalRule::greater_than("1"));

        sheet.sort(SortSpec::ascending(0));
        assert_eq!(sheet.get_cell(0, 0).as_text(), Some("1"));

        let style = sheet.style_for(1, 0);
        assert_eq!(style.background, Some(Color::YELLOW));
        assert!(sheet.style_for(0, 0).is_unstyled());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut sheet = Sheet::new();
        sheet.set_cell(3, 3, "x");
        sheet.add_conditional_rule(ConditionalRule::duplicate_values());
        sheet.set_freeze_panes(2, 2);

        sheet.clear();

        assert_eq!(sheet.used_cell_count(), 0);
        assert!(sheet.conditional_rules().is_empty());
        assert!(sheet.freeze_panes().is_none());
        assert_eq!(sheet.row_count(), 0);
    }
}
