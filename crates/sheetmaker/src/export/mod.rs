//! Spreadsheet export adapter
//!
//! `XlsxExporter` writes each finished table to `<output_dir>/<millis>_<name>.xlsx`.
//! The archive is built in a temporary file next to its destination and
//! moved into place only once complete, without replacing existing files.

mod xlsx;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use sheetmaker_core::{SheetError, Table, TableExporter};
use tempfile::NamedTempFile;
use tracing::debug;

pub use xlsx::write_workbook;

const EXTENSION: &str = "xlsx";
const FALLBACK_NAME: &str = "sheet";

/// Characters not allowed in file names on common platforms
const ILLEGAL_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Writes tables as .xlsx workbooks into a directory
pub struct XlsxExporter {
    output_dir: PathBuf,
}

impl XlsxExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Make a user-typed name safe to use as one path component
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            if ILLEGAL_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    if cleaned.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        cleaned
    }
}

/// File name for a stamp, base name and collision attempt
fn stamped_file_name(stamp: i64, base: &str, attempt: u32) -> String {
    if attempt == 0 {
        format!("{stamp}_{base}.{EXTENSION}")
    } else {
        format!("{stamp}_{base}-{attempt}.{EXTENSION}")
    }
}

impl TableExporter for XlsxExporter {
    fn export_table(&self, table: &Table, filename: &str) -> Result<PathBuf, SheetError> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            SheetError::Export(format!(
                "cannot create directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;

        let mut temp = NamedTempFile::new_in(&self.output_dir)?;
        write_workbook(temp.as_file_mut(), table)?;
        temp.as_file().sync_all()?;

        let stamp = Utc::now().timestamp_millis();
        let base = sanitize_filename(filename);
        let mut attempt = 0;

        loop {
            let path = self.output_dir.join(stamped_file_name(stamp, &base, attempt));
            match temp.persist_noclobber(&path) {
                Ok(_) => {
                    debug!(path = %path.display(), rows = table.rows.len(), "workbook written");
                    return Ok(path);
                }
                Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                    temp = e.file;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(SheetError::Export(format!(
                        "cannot save {}: {}",
                        path.display(),
                        e.error
                    )));
                }
            }
        }
    }
}
