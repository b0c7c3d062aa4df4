//! # gridbook
//!
//! A text-first spreadsheet grid engine.
//!
//! Every cell stores raw text; numbers are a read-time interpretation.
//! On top of that model gridbook provides A1-style addressing, a small
//! `=NAME(range)` formula language, value-driven conditional formatting,
//! stable single-column sorting, and auto-fill.
//!
//! ## Example
//!
//! ```rust
//! use gridbook::prelude::*;
//!
//! let mut sheet = Sheet::new();
//! sheet.set_cell(0, 0, "10");
//! sheet.set_cell(1, 0, "20");
//! sheet.set_cell(2, 0, "=SUM(A1:A2)");
//!
//! // Formula text stays in the cell; evaluation is on demand
//! let text = sheet.get_cell(2, 0);
//! assert_eq!(evaluate(&sheet, "=SUM(A1:A2)"), Some(30.0));
//! assert_eq!(text.as_text(), Some("=SUM(A1:A2)"));
//!
//! // Highlight large values
//! sheet.add_conditional_rule(ConditionalRule::greater_than("15"));
//! assert!(!sheet.style_for(1, 0).is_unstyled());
//! ```

pub mod prelude;

// Re-export core types
pub use gridbook_core::{
    auto_fill,
    // Addressing
    CellAddress,
    CellRange,
    CellStorage,
    // Styling
    CellStyle,
    // Cell types
    CellValue,
    Color,
    ComputedStyle,
    // Conditional formatting
    ConditionalRule,
    // Error types
    Error,
    FreezePanes,
    Predicate,
    Result,
    RuleSet,
    SharedString,
    // Main type
    Sheet,
    // Sorting
    sort_rows,
    SortSpec,
};

// Re-export formula types
pub use gridbook_formula::{
    evaluate, is_formula, parse_formula, Formula, FormulaError, FormulaResult, Function,
};
