//! # gridbook-formula
//!
//! Restricted formula parser and evaluator for the gridbook engine.
//!
//! Formulas have the shape `=NAME(range)` with five supported aggregate
//! functions: SUM, AVERAGE (alias AVG), COUNT, MAX, and MIN. Evaluation
//! reads the sheet, skips cells that do not parse as numbers, and never
//! writes back; a formula's text is its cell's permanent value.
//!
//! ## Example
//!
//! ```rust
//! use gridbook_core::Sheet;
//! use gridbook_formula::{evaluate, parse_formula, Function};
//!
//! let mut sheet = Sheet::new();
//! sheet.set_cell(0, 0, "2");
//! sheet.set_cell(1, 0, "4");
//!
//! assert_eq!(evaluate(&sheet, "=AVERAGE(A1:A2)"), Some(3.0));
//!
//! let formula = parse_formula("=max(A1:A2)").unwrap();
//! assert_eq!(formula.function, Function::Max);
//! ```

pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;

pub use error::{FormulaError, FormulaResult};
pub use evaluator::evaluate;
pub use functions::Function;
pub use parser::{is_formula, parse_formula, Formula};
