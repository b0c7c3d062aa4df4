//! Formula evaluation
//!
//! Evaluation is read-only and best-effort: the formula text stays in the
//! cell as the source of truth, and anything that cannot be computed
//! (bad syntax, unknown function, malformed range) comes back as `None`
//! for the caller to display as it sees fit.

use gridbook_core::{CellRange, Sheet};

use crate::parser::parse_formula;

/// Evaluate formula text against a sheet
///
/// Cells in the argument range that do not parse as numbers are skipped
/// silently, matching how the aggregate functions treat raw text. The
/// sheet is never mutated and results are never cached.
///
/// # Examples
/// ```
/// use gridbook_core::Sheet;
/// use gridbook_formula::evaluate;
///
/// let mut sheet = Sheet::new();
/// sheet.set_cell(0, 0, "1");
/// sheet.set_cell(1, 0, "2");
///
/// assert_eq!(evaluate(&sheet, "=SUM(A1:A2)"), Some(3.0));
/// assert_eq!(evaluate(&sheet, "=BOGUS(A1:A2)"), None);
/// ```
pub fn evaluate(sheet: &Sheet, text: &str) -> Option<f64> {
    let formula = match parse_formula(text) {
        Ok(formula) => formula,
        Err(err) => {
            log::debug!("formula '{}' not evaluated: {}", text, err);
            return None;
        }
    };

    let range = match CellRange::parse(&formula.argument) {
        Ok(range) => range,
        Err(err) => {
            log::debug!("formula '{}' has a bad range: {}", text, err);
            return None;
        }
    };

    let values = collect_numbers(sheet, &range);
    Some(formula.function.apply(&values))
}

/// Collect the numeric values of a range, skipping non-numeric cells
fn collect_numbers(sheet: &Sheet, range: &CellRange) -> Vec<f64> {
    range
        .cells()
        .filter_map(|addr| sheet.get_cell(addr.row, addr.col).as_number())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sheet() -> Sheet {
        let mut sheet = Sheet::new();
        sheet.set_cell(0, 0, "10"); // A1
        sheet.set_cell(1, 0, "20"); // A2
        sheet.set_cell(2, 0, "thirty"); // A3, skipped by aggregates
        sheet.set_cell(0, 1, "5"); // B1
        sheet
    }

    #[test]
    fn test_evaluate_sum() {
        let sheet = sample_sheet();
        assert_eq!(evaluate(&sheet, "=SUM(A1:A3)"), Some(30.0));
        assert_eq!(evaluate(&sheet, "=SUM(A1:B3)"), Some(35.0));
    }

    #[test]
    fn test_evaluate_skips_non_numeric() {
        let sheet = sample_sheet();
        assert_eq!(evaluate(&sheet, "=COUNT(A1:A3)"), Some(2.0));
        assert_eq!(evaluate(&sheet, "=AVERAGE(A1:A3)"), Some(15.0));
    }

    #[test]
    fn test_evaluate_empty_range_is_zero() {
        let sheet = sample_sheet();
        assert_eq!(evaluate(&sheet, "=AVERAGE(Z1:Z1)"), Some(0.0));
        assert_eq!(evaluate(&sheet, "=SUM(Z1:Z9)"), Some(0.0));
    }

    #[test]
    fn test_evaluate_single_cell_argument() {
        let sheet = sample_sheet();
        assert_eq!(evaluate(&sheet, "=MAX(A2)"), Some(20.0));
    }

    #[test]
    fn test_evaluate_failures_are_none() {
        let sheet = sample_sheet();
        assert_eq!(evaluate(&sheet, "SUM(A1:A3)"), None); // no leading =
        assert_eq!(evaluate(&sheet, "=BOGUS(A1:A3)"), None);
        assert_eq!(evaluate(&sheet, "=SUM(A1:A2:A3)"), None);
        assert_eq!(evaluate(&sheet, "=SUM(notarange)"), None);
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let sheet = sample_sheet();
        let before = sheet.used_cell_count();
        evaluate(&sheet, "=SUM(A1:C10)");
        assert_eq!(sheet.used_cell_count(), before);
    }
}
