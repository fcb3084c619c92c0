// file: src/workbook/mod.rs
// description: worksheet access behind a narrow rows-of-a-named-sheet interface
// reference: internal module structure

pub mod spreadsheet;
pub mod memory;

pub use spreadsheet::CalamineSource;
pub use memory::InMemorySource;

use crate::error::Result;
use crate::models::Row;

/// Anything that can hand out the rows of a named sheet as text cells.
pub trait SheetSource {
    fn sheet_rows(&mut self, sheet_name: &str) -> Result<Vec<Row>>;
}
