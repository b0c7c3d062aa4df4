//! Auto-fill across a selection
//!
//! The first column of the selection seeds the fill. When the seeds form
//! a usable numeric sequence the remaining columns continue it as an
//! arithmetic progression; otherwise the seed texts repeat verbatim.

use crate::cell::{CellRange, CellStorage};

/// Fill the selection's remaining columns from its first column
///
/// Numeric mode requires every non-empty seed to parse as a number and at
/// least two of them to exist. The step is `seed[1] - seed[0]`, and each
/// new column starts from the bottom cell of the column to its left, so
/// the progression runs column-major through the whole selection.
///
/// Any other seeds fall back to repeating the first column's texts into
/// every later column.
pub fn auto_fill(storage: &mut CellStorage, range: &CellRange) {
    if range.col_count() < 2 {
        return;
    }

    let seed_col = range.start.col;
    let rows = range.start.row..=range.end.row;

    let mut parsed = Vec::new();
    let mut all_numeric = true;
    for row in rows.clone() {
        if let Some(text) = storage.get_text(row, seed_col) {
            match text.as_str().trim().parse::<f64>() {
                Ok(n) => parsed.push(n),
                Err(_) => {
                    all_numeric = false;
                    break;
                }
            }
        }
    }

    if all_numeric && parsed.len() >= 2 {
        let diff = parsed[1] - parsed[0];
        for col in range.start.col + 1..=range.end.col {
            // Continue from the bottom of the previous column
            let mut last = storage
                .get_text(range.end.row, col - 1)
                .and_then(|s| s.as_str().trim().parse::<f64>().ok())
                .unwrap_or(0.0);
            for row in rows.clone() {
                last += diff;
                storage.set(row, col, format_number(last));
            }
        }
    } else {
        log::debug!(
            "auto_fill: seeds in column {} are not an arithmetic sequence, repeating pattern",
            seed_col
        );
        let seeds: Vec<Option<String>> = rows
            .clone()
            .map(|row| storage.get_text(row, seed_col).map(|s| s.as_str().to_string()))
            .collect();
        for col in range.start.col + 1..=range.end.col {
            for (offset, seed) in seeds.iter().enumerate() {
                let row = range.start.row + offset as u32;
                match seed {
                    Some(text) => storage.set(row, col, text),
                    None => storage.set(row, col, ""),
                }
            }
        }
    }
}

/// Format a fill value the way cells display numbers
fn format_number(n: f64) -> String {
    n.to_string()
}
