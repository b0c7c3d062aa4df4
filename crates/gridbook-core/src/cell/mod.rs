//! Cell model: addresses, ranges, values, and sparse storage

mod address;
mod storage;
mod value;

pub use address::{CellAddress, CellRange, CellRangeIterator};
pub use storage::CellStorage;
pub use value::{CellValue, SharedString};
