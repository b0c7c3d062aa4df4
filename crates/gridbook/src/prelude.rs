//! Prelude module - common imports for gridbook users
//!
//! ```rust
//! use gridbook::prelude::*;
//! ```

pub use crate::{
    // Addressing
    CellAddress,
    CellRange,
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
    // Formula types
    evaluate,
    Formula,
    FormulaError,
    FreezePanes,
    Function,
    is_formula,
    parse_formula,
    Predicate,
    Result,
    // Main type
    Sheet,
    // Sorting
    SortSpec,
};
