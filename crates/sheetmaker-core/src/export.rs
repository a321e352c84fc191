//! Export adapter seam

use std::path::PathBuf;

use crate::error::SheetError;
use crate::types::Table;

/// Writes a finished table to persistent storage
///
/// Implementations choose the file format, directory and a naming scheme
/// that never overwrites an earlier file. The base filename is passed
/// through exactly as the user typed it.
pub trait TableExporter {
    /// Write the table and return the path of the created file
    fn export_table(&self, table: &Table, filename: &str) -> Result<PathBuf, SheetError>;
}
