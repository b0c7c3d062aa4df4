//! # gridbook-core
//!
//! Core grid model for the gridbook spreadsheet engine.
//!
//! This crate provides the fundamental types:
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing and ranges
//! - [`CellValue`] - Raw cell text with parse-on-read numeric interpretation
//! - [`CellStorage`] - Sparse row-major cell storage
//! - [`Sheet`] - The facade tying cells, formatting, sorting, and fills together
//! - [`ConditionalRule`] / [`RuleSet`] - Value-driven cell styling
//!
//! ## Example
//!
//! ```rust
//! use gridbook_core::{Sheet, SortSpec};
//!
//! let mut sheet = Sheet::new();
//! sheet.set_cell(0, 0, "banana");
//! sheet.set_cell(1, 0, "42");
//!
//! assert_eq!(sheet.get_cell(1, 0).as_number(), Some(42.0));
//! assert_eq!(sheet.get_cell(0, 0).as_number(), None);
//!
//! sheet.sort(SortSpec::ascending(0));
//! ```

pub mod autofill;
pub mod cell;
pub mod conditional_format;
pub mod error;
pub mod sheet;
pub mod sort;
pub mod style;

// Re-exports for convenience
pub use autofill::auto_fill;
pub use cell::{CellAddress, CellRange, CellStorage, CellValue, SharedString};
pub use conditional_format::{ConditionalRule, Predicate, RuleSet};
pub use error::{Error, Result};
pub use sheet::{FreezePanes, Sheet};
pub use sort::{sort_rows, SortSpec};
pub use style::{CellStyle, Color, ComputedStyle};
