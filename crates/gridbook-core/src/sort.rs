//! Row sorting
//!
//! Sorting keys on one column, treats every cell that does not parse as a
//! number as `0.0`, and permutes whole rows. The sort is stable, so rows
//! whose keys tie (all non-numeric rows in particular) keep their
//! original relative order. Descending only reverses the key comparison,
//! which preserves that tie behavior.

use crate::cell::{CellStorage, SharedString};

/// What to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// 0-based column the keys come from
    pub column: u32,
    /// Ascending (smallest key first) or descending
    pub ascending: bool,
}

impl SortSpec {
    /// Sort ascending on a column
    pub fn ascending(column: u32) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    /// Sort descending on a column
    pub fn descending(column: u32) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

/// Sort the used rows of the grid by the spec's column
///
/// Rows `0..=max_used_row` participate; rows grown past the used range
/// by empty writes stay where they are. The whole row is permuted across
/// every column of the grid.
pub fn sort_rows(storage: &mut CellStorage, spec: SortSpec) {
    let Some((_, _, max_row, _)) = storage.used_bounds() else {
        return;
    };
    let row_count = max_row + 1;
    let col_count = storage.col_count();
    if row_count < 2 {
        return;
    }

    // Snapshot every row's text before rewriting
    let mut rows: Vec<(f64, Vec<Option<SharedString>>)> = (0..row_count)
        .map(|row| {
            let key = storage
                .get_text(row, spec.column)
                .and_then(|s| s.as_str().trim().parse::<f64>().ok())
                .unwrap_or(0.0);
            let cells = (0..col_count)
                .map(|col| storage.get_text(row, col).cloned())
                .collect();
            (key, cells)
        })
        .collect();

    if spec.ascending {
        rows.sort_by(|a, b| a.0.total_cmp(&b.0));
    } else {
        rows.sort_by(|a, b| b.0.total_cmp(&a.0));
    }

    for (row, (_, cells)) in rows.into_iter().enumerate() {
        for (col, text) in cells.into_iter().enumerate() {
            match text {
                Some(s) => storage.set(row as u32, col as u32, s.as_str()),
                None => storage.set(row as u32, col as u32, ""),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_texts(storage: &CellStorage, col: u32) -> Vec<String> {
        (0..storage.row_count())
            .map(|row| {
                storage
                    .get_text(row, col)
                    .map(|s| s.as_str().to_string())
                    .unwrap_or_default()
            })
            .collect()
    }

    #[test]
    fn test_non_numeric_rows_keep_order() {
        let mut storage = CellStorage::new();
        for (row, text) in ["b", "2", "a", "1"].iter().enumerate() {
            storage.set(row as u32, 0, *text);
        }

        sort_rows(&mut storage, SortSpec::ascending(0));

        // "b" and "a" both key as 0.0 and tie ahead of 1 and 2
        assert_eq!(column_texts(&storage, 0), vec!["b", "a", "1", "2"]);
    }

    #[test]
    fn test_descending_reverses_keys_only() {
        let mut storage = CellStorage::new();
        for (row, text) in ["b", "2", "a", "1"].iter().enumerate() {
            storage.set(row as u32, 0, *text);
        }

        sort_rows(&mut storage, SortSpec::descending(0));

        assert_eq!(column_texts(&storage, 0), vec!["2", "1", "b", "a"]);
    }

    #[test]
    fn test_whole_rows_move_together() {
        let mut storage = CellStorage::new();
        storage.set(0, 0, "3");
        storage.set(0, 1, "three");
        storage.set(1, 0, "1");
        storage.set(1, 1, "one");
        storage.set(2, 0, "2");
        storage.set(2, 1, "two");

        sort_rows(&mut storage, SortSpec::ascending(0));

        assert_eq!(column_texts(&storage, 0), vec!["1", "2", "3"]);
        assert_eq!(column_texts(&storage, 1), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_empty_cells_travel_with_rows() {
        let mut storage = CellStorage::new();
        storage.set(0, 0, "9");
        storage.set(0, 1, "nine");
        storage.set(1, 0, "1");
        // Row 1 has no cell in column 1

        sort_rows(&mut storage, SortSpec::ascending(0));

        assert_eq!(column_texts(&storage, 0), vec!["1", "9"]);
        assert_eq!(column_texts(&storage, 1), vec!["", "nine"]);
    }

    #[test]
    fn test_rows_past_used_range_stay_put() {
        let mut storage = CellStorage::new();
        storage.set(0, 0, "b");
        storage.set(1, 0, "1");
        // Grow the logical grid well past the used range
        storage.set(9, 9, "");
        assert_eq!(storage.row_count(), 10);

        sort_rows(&mut storage, SortSpec::ascending(0));

        // The grown empty rows do not interleave as key-0 ties
        assert_eq!(storage.get_text(0, 0).unwrap().as_str(), "b");
        assert_eq!(storage.get_text(1, 0).unwrap().as_str(), "1");
    }

    #[test]
    fn test_single_row_is_noop() {
        let mut storage = CellStorage::new();
        storage.set(0, 0, "x");
        sort_rows(&mut storage, SortSpec::ascending(0));
        assert_eq!(column_texts(&storage, 0), vec!["x"]);
    }
}
